use clap::{ArgGroup, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the base image of an image and any known vulnerabilities
    Find(FindArgs),

    /// Initialize a .bif.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["image", "image_layers", "report_file"])
))]
pub struct FindArgs {
    /// Image reference to look up, e.g. nginx:1.25
    pub image: Option<String>,

    /// Layer digests of the image instead of a reference (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub image_layers: Vec<String>,

    /// Render a report saved earlier with --output json instead of querying the server
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    /// Output format: "json", "yaml" or "table"
    #[arg(short, long)]
    pub output: Option<String>,

    /// Table sort column: "id", "severity" or "cvss"
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Table sort order: "asc" or "desc"
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Do not colorize table rows
    #[arg(long)]
    pub no_color: bool,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Your Fairwinds OSS token
    #[arg(short = 't', long = "insights-oss-token", env = "INSIGHTS_OSS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The URL of the BIF server
    #[arg(long, env = "BIF_URL")]
    pub bif_url: Option<String>,
}
