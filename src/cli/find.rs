use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use bif::client::http::DEFAULT_API_URL;
use bif::client::{FileFetcher, HttpFetcher, ReportFetcher, ReportSource};
use bif::config::BifConfig;
use bif::report::RenderOptions;

use crate::cli::FindArgs;

/// Runs `bif find`: fetch one report and render it.
pub struct Finder {
    fetcher: Box<dyn ReportFetcher>,
    options: RenderOptions,
    out: Option<PathBuf>,
}

impl Finder {
    /// Merge CLI flags over the config file over the defaults and validate
    /// everything before any request is made.
    pub fn new(args: &FindArgs, config: Option<&BifConfig>) -> Result<Self> {
        let options = render_options(args, config)?;
        let fetcher = fetcher(args, config)?;

        Ok(Finder {
            fetcher,
            options,
            out: args.out.clone(),
        })
    }

    pub fn run(&self) -> Result<()> {
        let report = self.fetcher.fetch()?;
        info!(
            "Found {} base images for {}:{}",
            report.base_images.len(),
            report.image_repository,
            report.image_tag
        );

        let output = self.options.render(&report)?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, &output)
                    .with_context(|| format!("could not write {}", path.display()))?;
                info!("Report written to {}", path.display());
            }
            None => println!("{}", output.trim_end()),
        }
        Ok(())
    }
}

fn render_options(args: &FindArgs, config: Option<&BifConfig>) -> Result<RenderOptions> {
    let defaults = RenderOptions::default();
    let output = config.map(|c| &c.output);

    let format = args
        .output
        .clone()
        .or_else(|| output.and_then(|o| o.format.clone()))
        .unwrap_or_else(|| "table".to_string());
    let sort_by = args
        .sort_by
        .clone()
        .or_else(|| output.and_then(|o| o.sort_by.clone()))
        .unwrap_or_else(|| "severity".to_string());
    let sort_order = args
        .sort_order
        .clone()
        .or_else(|| output.and_then(|o| o.sort_order.clone()))
        .unwrap_or_else(|| "desc".to_string());
    let colorize = !args.no_color && output.and_then(|o| o.color).unwrap_or(defaults.colorize);

    Ok(RenderOptions::parse(
        &format,
        &sort_by.to_lowercase(),
        &sort_order.to_lowercase(),
        colorize,
    )?)
}

fn fetcher(args: &FindArgs, config: Option<&BifConfig>) -> Result<Box<dyn ReportFetcher>> {
    if let Some(path) = &args.report_file {
        return Ok(Box::new(FileFetcher::new(path)));
    }

    let source = match &args.image {
        Some(image) => ReportSource::Image(image.clone()),
        None if !args.image_layers.is_empty() => ReportSource::Layers(args.image_layers.clone()),
        None => bail!("You must specify either an image or --image-layers."),
    };

    let api = config.map(|c| &c.api);
    let token = args
        .token
        .clone()
        .or_else(|| api.and_then(|a| a.token.clone()))
        .filter(|t| !t.is_empty());
    let Some(token) = token else {
        bail!("You must supply a token via the --insights-oss-token flag.");
    };
    let url = args
        .bif_url
        .clone()
        .or_else(|| api.and_then(|a| a.url.clone()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(Box::new(HttpFetcher::new(&url, &token, source)))
}
