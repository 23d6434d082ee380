//! Reseed: renumber the hosts of a nodes file
//!
//! A nodes file lists one host per line, optionally followed by `:value`.
//! Reseeding it means
//! 1. reading all the hosts and the _prior_ base value, i.e. the value of the
//!    last annotated host divided by [`nodes::SCALE`]
//! 2. drawing a new base value, different from the prior one, see
//!    [`random::draw_base`]
//! 3. overwriting the file so that the i-th host is annotated with
//!    `base * SCALE + i`
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let (rendered, base) = reseed::rewrite("alpha\nbeta:5000\n", &mut rng).unwrap();
//!
//! assert_ne!(base, 5);
//! assert_eq!(
//!     rendered,
//!     format!("alpha:{}\nbeta:{}\n", base * 1000, base * 1000 + 1)
//! );
//! ```
use std::path::Path;

use rand::RngCore;
use tracing::info;

pub mod error;
pub mod fs;
pub mod nodes;
pub mod random;

use crate::{error::ReseedError, nodes::Nodes};

/// reseed the nodes file at `path` in place and return the new base value
///
/// the whole file is parsed before it is opened for writing, so a malformed
/// file is left untouched.
pub fn reseed(path: &Path, rng: &mut impl RngCore) -> anyhow::Result<i64> {
    let nodes = fs::read_nodes(path)?;

    info!("drawing a new base value");
    let base = random::draw_base(nodes.prior(), rng);
    info!("new base value is {} (was {})", base, nodes.prior());

    fs::write_nodes(path, &nodes, base)?;

    Ok(base)
}

/// same as [`reseed`] but on an in-memory listing
///
/// returns the renumbered listing and the new base value.
pub fn rewrite(contents: &str, rng: &mut impl RngCore) -> Result<(String, i64), ReseedError> {
    let nodes = Nodes::parse(contents)?;
    let base = random::draw_base(nodes.prior(), rng);

    Ok((nodes.render(base), base))
}
