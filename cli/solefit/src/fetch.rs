//! Classifier asset resolution.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Fetches the classifier checkpoint if it is not already present.
///
/// A file-existence check first, then one best-effort fetch with no
/// retries: if the asset cannot be fetched the session fails immediately
/// with the underlying error. Returns `true` if a download happened.
pub fn ensure_model(path: &Path, url: &str) -> Result<bool> {
    if path.exists() {
        tracing::info!(path = %path.display(), "classifier checkpoint already present");
        return Ok(false);
    }

    tracing::info!(url, path = %path.display(), "fetching classifier checkpoint");
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("failed to fetch {url}"))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .context("failed to read checkpoint body")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(bytes = bytes.len(), "classifier checkpoint fetched");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_skips_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arch_classifier.bin");
        std::fs::write(&path, b"weights").unwrap();

        // URL is never dereferenced when the file exists.
        let downloaded = ensure_model(&path, "http://invalid.invalid/model.bin").unwrap();
        assert!(!downloaded);
    }

    #[test]
    fn unreachable_url_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let result = ensure_model(&path, "http://invalid.invalid/model.bin");
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
