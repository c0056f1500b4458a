use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DownloadError;

/// Writes `<save_dir>/<stem>.pdf`, creating `save_dir` first. Existing files are overwritten.
pub fn save_pdf(save_dir: &Path, stem: &str, body: &[u8]) -> Result<PathBuf, DownloadError> {
    fs::create_dir_all(save_dir).map_err(|source| DownloadError::Filesystem { path: save_dir.to_path_buf(), source })?;
    let path = save_dir.join(format!("{}.pdf", stem));
    fs::write(&path, body).map_err(|source| DownloadError::Filesystem { path: path.clone(), source })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let path = save_pdf(&dir, "Paper", b"%PDF-1.4").unwrap();
        assert_eq!(path, dir.join("Paper.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        save_pdf(tmp.path(), "Same", b"first version, longer").unwrap();
        let path = save_pdf(tmp.path(), "Same", b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn dir_blocked_by_file_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("taken");
        fs::write(&blocker, b"x").unwrap();
        let err = save_pdf(&blocker, "Paper", b"y").unwrap_err();
        assert!(matches!(err, DownloadError::Filesystem { .. }));
    }
}
