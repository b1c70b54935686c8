//! HTTP client for fetching numbered resources

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Marker found in the HTML page the source serves instead of an image
pub const PLACEHOLDER_SIGNATURE: &[u8] = b"DOCTYPE html";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read body of {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, DownloadError>;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("autowall/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A fully read response
#[derive(Debug)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Fetched {
    /// A real image: exactly 200 and no HTML marker in the body
    pub fn is_image(&self) -> bool {
        self.status == StatusCode::OK && !is_placeholder(&self.body)
    }
}

/// Whether `body` carries the HTML placeholder signature
pub fn is_placeholder(body: &[u8]) -> bool {
    body.windows(PLACEHOLDER_SIGNATURE.len())
        .any(|window| window == PLACEHOLDER_SIGNATURE)
}

/// Thin wrapper over a shared reqwest client.
///
/// No timeouts are set; a stalled connection only holds up its own job.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client })
    }

    /// Issue one GET and read the whole body, whatever the status
    pub async fn get(&self, url: &str) -> Result<Fetched> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DownloadError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| DownloadError::Read {
                url: url.to_string(),
                source,
            })?;

        debug!(url, status = status.as_u16(), size = body.len(), "Response received");

        Ok(Fetched { status, body })
    }
}
