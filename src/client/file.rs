use std::path::PathBuf;

use tracing::debug;

use crate::client::ReportFetcher;
use crate::error::FetchError;
use crate::report::Report;

/// Reads a report previously saved with `--output json`
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileFetcher { path: path.into() }
    }
}

impl ReportFetcher for FileFetcher {
    fn fetch(&self) -> Result<Report, FetchError> {
        debug!("Reading report from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
