use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// the nodes file to reseed in place
    nodes_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().expect("cannot init logger");

    let cli = Cli::parse();

    let base = reseed::reseed(&cli.nodes_file, &mut rand::thread_rng())?;
    info!("reseeded `{:?}` from base {}", cli.nodes_file, base);

    Ok(())
}
