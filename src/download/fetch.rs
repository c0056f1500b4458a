use bytes::Bytes;
use reqwest::{Client, Response};
use tracing::warn;

use crate::error::DownloadError;

/// Network seam for the two GETs made per paper.
pub trait Fetch {
    async fn page(&self, url: &str) -> Result<String, DownloadError>;
    async fn pdf(&self, url: &str) -> Result<Bytes, DownloadError>;
}

/// Plain GETs: no timeout, no custom headers. Non-2xx bodies are returned as-is.
#[derive(Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    async fn get(&self, url: &str) -> Result<Response, DownloadError> {
        let resp = self.client.get(url).send().await.map_err(|e| network(url, e))?;
        let status = resp.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status; keeping body");
        }
        Ok(resp)
    }
}

impl Fetch for HttpFetcher {
    async fn page(&self, url: &str) -> Result<String, DownloadError> {
        let text = self.get(url).await?.text().await.map_err(|e| network(url, e))?;
        Ok(text)
    }

    async fn pdf(&self, url: &str) -> Result<Bytes, DownloadError> {
        let bytes = self.get(url).await?.bytes().await.map_err(|e| network(url, e))?;
        Ok(bytes)
    }
}

fn network(url: &str, source: reqwest::Error) -> DownloadError {
    DownloadError::Network { url: url.to_string(), source }
}
