//! Command-line interface for treecat.
//!
//! Walks a directory tree and prints every text file not excluded by the
//! root `.gitignore`, each prefixed with a `==path==` header.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use treecat::{TreecatBuilder, treecat};

/// Prints all text files in a directory tree, respecting .gitignore.
#[derive(Parser)]
#[command(name = "treecat", version, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let options = TreecatBuilder::new(cli.root).build();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    // Per-file errors go to stderr during the walk; the exit status stays 0
    // either way.
    if let Err(e) = treecat(&options, &mut out, &mut err) {
        let _ = writeln!(err, "Error: {}", e);
    }
}
