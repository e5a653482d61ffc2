use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "dirgen",
    version,
    about = "Materialize a directory skeleton from a structure file"
)]
pub struct Cli {
    /// Structure file describing the directory tree.
    #[arg(short = 'f', long = "file", default_value = "./config.yaml")]
    pub file: PathBuf,

    /// Output directory the tree is written under; must already exist.
    #[arg(short = 'o', long = "out", default_value = "./out")]
    pub out: PathBuf,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
