pub mod file;
pub mod http;

use crate::error::FetchError;
use crate::report::Report;

pub use file::FileFetcher;
pub use http::HttpFetcher;

/// What to look up base images for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// A single image reference, e.g. "nginx:1.25"
    Image(String),
    /// The layer digests of an image
    Layers(Vec<String>),
}

impl std::fmt::Display for ReportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSource::Image(image) => write!(f, "image {}", image),
            ReportSource::Layers(layers) => write!(f, "{} image layers", layers.len()),
        }
    }
}

/// Anything that can produce a parsed report
pub trait ReportFetcher {
    fn fetch(&self) -> Result<Report, FetchError>;
}
