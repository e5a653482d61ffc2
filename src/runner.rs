use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::structure::{self, Node, Structure};
use crate::walk;

pub fn run(cli: Cli) -> Result<()> {
    let file = utf8_path(cli.file)?;
    let out = utf8_path(cli.out)?;

    info!("writing structure {file} into {out}");

    let raw = fs::read(&file).with_context(|| format!("reading structure file {file}"))?;
    let decoded =
        structure::decode(&raw).with_context(|| format!("decoding structure file {file}"))?;

    write_structure(&out, &decoded)
}

fn utf8_path(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| anyhow!("path {} is not valid UTF-8", p.display()))
}

/// Drive the walk for each top-level entry of the decoded structure.
///
/// A malformed top-level entry is logged and skipped, and the remaining
/// entries are still processed. Errors inside the walk abort the whole run.
pub fn write_structure(out: &Utf8Path, structure: &Structure) -> Result<()> {
    for (key, value) in &structure.root {
        let Some(key) = key.as_str() else {
            warn!(
                "skipping entry: key {key:?} is not a string (found {})",
                structure::value_kind(key)
            );
            continue;
        };

        let Some(node) = Node::classify(value) else {
            warn!(
                "skipping {key}: value is not a mapping (found {})",
                structure::value_kind(value)
            );
            continue;
        };

        let dir = out.join(key);
        match node {
            Node::Subtree(children) => walk::materialize(&dir, children)?,
            Node::Leaf => walk::create_dir_if_absent(&dir)?,
        }
    }

    Ok(())
}
