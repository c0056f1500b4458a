use std::path::PathBuf;

use serde::Serialize;

use super::extractor::Source;

/// One saved paper. Every strategy produces this same triple plus its origin.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub url: String,
    pub source: Source,
    pub pdf_url: String,
    pub title: String,
    pub save_path: PathBuf,
}

// Plan envelope types
#[derive(Serialize, Debug)]
pub struct PlannedPaper { pub url: String, pub source: Source }

#[derive(Serialize, Debug)]
pub struct DownloadPlan { pub save_dir: PathBuf, pub papers: Vec<PlannedPaper> }

// Apply/result envelope types
#[derive(Serialize, Debug)]
pub struct DownloadResult { pub save_dir: PathBuf, pub papers: Vec<Downloaded> }
