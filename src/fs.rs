//! Interact with the filesystem, read from and write to it.
use std::{fs::File, io::prelude::*, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::nodes::Nodes;

/// Reads and parses a whole nodes file.
///
/// The file is read entirely and closed before anything is parsed, so a
/// malformed listing is always reported before [`write_nodes`] gets a chance
/// to touch the file.
///
/// The file has to be valid UTF-8, otherwise it is reported as unreadable and
/// left as is.
pub fn read_nodes(path: &Path) -> Result<Nodes> {
    info!("reading nodes from `{:?}`", path);
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read nodes from `{}`", path.display()))?;

    let nodes = Nodes::parse(&contents)
        .with_context(|| format!("could not parse nodes from `{}`", path.display()))?;

    Ok(nodes)
}

/// Truncates the file at `path` and writes the nodes renumbered from `base`.
///
/// > **Note**
/// >
/// > There is no rollback: if writing fails half-way, the file is left
/// > truncated or partially written.
pub fn write_nodes(path: &Path, nodes: &Nodes, base: i64) -> Result<()> {
    let rendered = nodes.render(base);

    info!("dumping {} nodes into `{:?}`", nodes.len(), path);
    let mut file = File::create(path)
        .with_context(|| format!("could not open `{}` for writing", path.display()))?;
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("could not write nodes to `{}`", path.display()))?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{read_nodes, write_nodes};
    use crate::nodes::Nodes;

    #[test]
    fn read_then_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes");
        fs::write(&path, "alpha\nbeta:5000\n\ngamma:7002\n").unwrap();

        let nodes = read_nodes(&path).unwrap();
        assert_eq!(nodes.hosts(), &["alpha", "beta", "gamma"]);
        assert_eq!(nodes.prior(), 7);

        write_nodes(&path, &nodes, 4).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alpha:4000\nbeta:4001\ngamma:4002\n"
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let err = read_nodes(&path).unwrap_err();
        assert!(err.to_string().contains("could not read nodes from"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes");
        fs::write(&path, "badhost:notanumber\n").unwrap();

        let err = read_nodes(&path).unwrap_err();
        assert!(err.to_string().contains("could not parse nodes from"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "badhost:notanumber\n"
        );
    }

    #[test]
    fn non_utf8_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes");
        let input = b"caf\xe9\nbeta:5000\n";
        fs::write(&path, input).unwrap();

        let err = read_nodes(&path).unwrap_err();
        assert!(err.to_string().contains("could not read nodes from"));
        assert_eq!(
            err.root_cause()
                .downcast_ref::<std::io::Error>()
                .map(|e| e.kind()),
            Some(std::io::ErrorKind::InvalidData)
        );
        assert_eq!(fs::read(&path).unwrap(), input);
    }

    #[test]
    fn empty_listing_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes");
        fs::write(&path, "\n   \n").unwrap();

        let nodes = read_nodes(&path).unwrap();
        assert!(nodes.is_empty());

        write_nodes(&path, &nodes, 2).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("nodes");

        assert!(write_nodes(&path, &Nodes::default(), 2).is_err());
    }
}
