use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use serde_yaml::Mapping;
use thiserror::Error;
use tracing::debug;

use crate::structure::{Node, value_kind};

/// Errors raised while materializing a decoded tree onto disk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A node key or value did not have the expected shape.
    #[error("invalid structure at {path}: {detail}")]
    Shape { path: Utf8PathBuf, detail: String },
    /// Directory creation failed for a reason other than pre-existence.
    #[error("creating directory {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    fn shape(path: &Utf8Path, detail: String) -> Self {
        WalkError::Shape {
            path: path.to_owned(),
            detail,
        }
    }
}

/// Create `path` as a directory unless something already exists there.
///
/// Any pre-existing entry counts as existing, directory or not, and is left
/// untouched, so re-running over an already materialized tree is a no-op.
pub fn create_dir_if_absent(path: &Utf8Path) -> Result<(), WalkError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir(path).map_err(|source| WalkError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!("created {path}");
    Ok(())
}

/// Ensure `base` and every entry below `node` exist as directories,
/// walking depth-first.
///
/// The first error aborts the walk; directories already created stay on
/// disk, since a re-run will simply find them existing. Each entry's
/// directory is created before its value is validated, so a malformed value
/// leaves its own directory behind too.
pub fn materialize(base: &Utf8Path, node: &Mapping) -> Result<(), WalkError> {
    create_dir_if_absent(base)?;

    for (key, value) in node {
        let key = key.as_str().ok_or_else(|| {
            WalkError::shape(
                base,
                format!("key {key:?} is not a string (found {})", value_kind(key)),
            )
        })?;

        let dir = base.join(key);
        create_dir_if_absent(&dir)?;

        match Node::classify(value) {
            Some(Node::Subtree(children)) => materialize(&dir, children)?,
            Some(Node::Leaf) => {}
            None => {
                return Err(WalkError::shape(
                    &dir,
                    format!("value is not a mapping (found {})", value_kind(value)),
                ));
            }
        }
    }

    Ok(())
}
