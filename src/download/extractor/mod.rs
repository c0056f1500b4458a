use serde::Serialize;
use url::Url;

use crate::error::DownloadError;

mod acl;
mod arxiv;

/// Paper sites with a known landing-page layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    AclAnthology,
    Arxiv,
}

/// What a strategy pulls out of a landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub pdf_url: String,
    pub title: String,
}

pub trait Extractor {
    fn name(&self) -> &'static str;
    fn extract(&self, url: &str, html: &str) -> Result<Extracted, DownloadError>;
}

impl Source {
    /// Pick a strategy from the URL authority, compared verbatim: no case
    /// folding, ports and userinfo included. Anything else, including
    /// strings that don't parse as URLs, is unsupported.
    pub fn from_url(url: &str) -> Result<Self, DownloadError> {
        let host = Url::parse(url).ok().and_then(|_| raw_authority(url));
        match host {
            Some("aclanthology.org") => Ok(Source::AclAnthology),
            Some("arxiv.org") => Ok(Source::Arxiv),
            _ => Err(DownloadError::unsupported(url)),
        }
    }

    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            Source::AclAnthology => &acl::AclAnthology,
            Source::Arxiv => &arxiv::Arxiv,
        }
    }

    pub fn name(self) -> &'static str { self.extractor().name() }
}

/// Text between `scheme://` and the next `/`, `?` or `#`, untouched.
fn raw_authority(url: &str) -> Option<&str> {
    let start = url.find("://")? + 3;
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Removes at most one trailing `/`.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Title text to filename stem: spaces become underscores, colons are dropped.
pub fn filename_stem(title: &str) -> String {
    title.replace(' ', "_").replace(':', "")
}

pub(crate) fn non_empty_stem(url: &str, stem: String) -> Result<String, DownloadError> {
    if stem.is_empty() { Err(DownloadError::extraction(url, "title text")) } else { Ok(stem) }
}
