use thiserror::Error;

/// Errors raised while turning a report into output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no valid output format found - must be one of {allowed:?}, got {requested:?}")]
    UnsupportedFormat {
        requested: String,
        allowed: &'static [&'static str],
    },

    #[error("invalid {field} selection {value:?} - must be one of {allowed:?}")]
    InvalidSortSpec {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while fetching a report
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("error making request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("got {status} status from bif: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode report: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read report file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
