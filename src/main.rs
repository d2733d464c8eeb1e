mod cli;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bif::config::{self, BifConfig};
use cli::find::Finder;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the report
    let filter = if cli.verbose {
        EnvFilter::new("bif=debug")
    } else if cli.quiet {
        EnvFilter::new("bif=error")
    } else {
        EnvFilter::new("bif=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("bif v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        cli::Commands::Find(args) => {
            let cwd = std::env::current_dir()?;
            let config = BifConfig::load(cli.config.as_deref(), &cwd);
            let finder = Finder::new(args, config.as_ref())?;
            finder.run()?;
        }
        cli::Commands::Init => {
            let cwd = std::env::current_dir()?;
            if config::init_config(&cwd)? {
                info!("Created {}", config::CONFIG_FILE_NAME);
                println!("{} Created {}", "✅".bold(), config::CONFIG_FILE_NAME.green());
                println!("   Edit it to set your token and output defaults.");
            } else {
                println!("⚠️  {} already exists in this directory", config::CONFIG_FILE_NAME);
            }
        }
    }

    Ok(())
}
