use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::{ReportFetcher, ReportSource};
use crate::error::FetchError;
use crate::report::Report;

pub const DEFAULT_API_URL: &str = "https://bif-server-6biex2p5nq-uc.a.run.app";

/// Fetches reports from the BIF server
pub struct HttpFetcher {
    api_url: String,
    token: String,
    source: ReportSource,
    client: Client,
}

/// Body the server sends with non-200 responses
#[derive(Debug, Deserialize)]
struct BifError {
    #[serde(rename = "Response", default)]
    response: String,
}

impl HttpFetcher {
    pub fn new(api_url: &str, token: &str, source: ReportSource) -> Self {
        HttpFetcher {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            source,
            client: Client::new(),
        }
    }

    fn request(&self) -> RequestBuilder {
        let url = format!("{}/base", self.api_url);
        let builder = match &self.source {
            ReportSource::Image(image) => self.client.get(&url).query(&[("image_tag", image)]),
            ReportSource::Layers(layers) => self.client.post(&url).json(layers),
        };
        builder.bearer_auth(&self.token)
    }
}

impl ReportFetcher for HttpFetcher {
    fn fetch(&self) -> Result<Report, FetchError> {
        debug!("Requesting report for {} from {}", self.source, self.api_url);

        let response = self.request().send()?;
        let status = response.status();
        let body = response.bytes()?;

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Pull the server's message out of an error body, empty if there is none
fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<BifError>(body) {
        Ok(err) => err.response,
        Err(e) => {
            warn!("could not read response {}", e);
            String::new()
        }
    }
}
