pub mod commands;
pub mod find;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Commands, FindArgs};

/// bif - Fairwinds Base Image Finder client
///
/// Finds the base images of a container image, their known vulnerabilities,
/// and the upgrades that fix them.
#[derive(Parser, Debug)]
#[command(
    name = "bif",
    version,
    about = "The Fairwinds Base Image Finder (BIF) Client",
    long_about = "bif looks up the base images of a container image.\nIt lists the vulnerabilities of each base image and which upgrades fix them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: nearest .bif.toml, then ~/.bif.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
