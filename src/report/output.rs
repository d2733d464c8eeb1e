use std::str::FromStr;

use tracing::debug;

use crate::error::RenderError;
use crate::report::model::Report;
use crate::report::sorter::{SortKey, SortOrder};
use crate::report::table;

pub const OUTPUT_FORMATS: &[&str] = &["json", "yaml", "table"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "table" => Ok(OutputFormat::Table),
            _ => Err(RenderError::UnsupportedFormat {
                requested: s.to_string(),
                allowed: OUTPUT_FORMATS,
            }),
        }
    }
}

/// Everything that controls one render, validated up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub colorize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            format: OutputFormat::Table,
            sort_by: SortKey::Severity,
            sort_order: SortOrder::Desc,
            colorize: true,
        }
    }
}

impl RenderOptions {
    /// Validate raw settings. The sort spec is checked even when the
    /// format does not use it.
    pub fn parse(format: &str, sort_by: &str, sort_order: &str, colorize: bool) -> Result<Self, RenderError> {
        Ok(RenderOptions {
            format: format.parse()?,
            sort_by: sort_by.parse()?,
            sort_order: sort_order.parse()?,
            colorize,
        })
    }

    pub fn render(&self, report: &Report) -> Result<String, RenderError> {
        debug!(
            "Rendering {}:{} as {:?} ({} base images)",
            report.image_repository,
            report.image_tag,
            self.format,
            report.base_images.len()
        );

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            OutputFormat::Table => Ok(table::render(report, self.sort_by, self.sort_order, self.colorize)),
        }
    }
}

/// Render a report from raw string settings
pub fn render(
    report: &Report,
    format: &str,
    sort_by: &str,
    sort_order: &str,
    colorize: bool,
) -> Result<String, RenderError> {
    RenderOptions::parse(format, sort_by, sort_order, colorize)?.render(report)
}
