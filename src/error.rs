use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// Host is not one of the known paper sites.
    #[error("Unsupported URL: {url}")]
    UnsupportedSource { url: String },

    #[error("{what} not found on {url}")]
    Extraction { url: String, what: &'static str },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not write {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub fn unsupported(url: impl Into<String>) -> Self {
        DownloadError::UnsupportedSource { url: url.into() }
    }

    pub fn extraction(url: impl Into<String>, what: &'static str) -> Self {
        DownloadError::Extraction { url: url.into(), what }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DownloadError::UnsupportedSource { .. } => "unsupported_source",
            DownloadError::Extraction { .. } => "extraction",
            DownloadError::Network { .. } => "network",
            DownloadError::Filesystem { .. } => "filesystem",
        }
    }
}
