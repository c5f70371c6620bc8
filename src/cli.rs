// src/cli.rs

use clap::Parser;

/// Takes no options beyond `--help` and `--version`; everything else is
/// configured interactively and persisted in `config.txt`.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Builds a PotPlayer playlist from a folder of your video library and opens it.",
    long_about = None
)]
pub struct Cli {}
