use anyhow::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::schemas::AppState;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("bundle path {0} exists but is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a `.env` file from the working directory, if there is one.
pub fn load_environment() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
}

/// Read `index.html` from the bundle directory.
///
/// A missing bundle is not fatal: the server still starts and reports the
/// frontend as missing from `/health`, which is what a fresh checkout without
/// a `trunk build` looks like.
pub async fn load_index_html(dist_dir: &Path) -> Result<Option<Arc<str>>, BundleError> {
    match tokio::fs::metadata(dist_dir).await {
        Ok(meta) if !meta.is_dir() => return Err(BundleError::NotADirectory(dist_dir.to_path_buf())),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Bundle directory {} does not exist", dist_dir.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(BundleError::Unreadable { path: dist_dir.to_path_buf(), source });
        }
    }

    let index_path = dist_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => {
            tracing::info!("Loaded {} ({} bytes)", index_path.display(), html.len());
            Ok(Some(Arc::from(html)))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("No index.html in {}", dist_dir.display());
            Ok(None)
        }
        Err(source) => Err(BundleError::Unreadable { path: index_path, source }),
    }
}

/// Initialize application state for the given bundle directory
pub async fn initialize_app_state(dist_dir: &Path) -> Result<AppState> {
    let index_html = load_index_html(dist_dir).await?;

    Ok(AppState {
        dist_dir: Arc::new(dist_dir.to_path_buf()),
        index_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_index_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>crop</html>").unwrap();

        let html = load_index_html(dir.path()).await.unwrap();
        assert_eq!(html.as_deref(), Some("<html>crop</html>"));
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();

        assert!(load_index_html(dir.path()).await.unwrap().is_none());
        assert!(load_index_html(&dir.path().join("dist")).await.unwrap().is_none());

        let state = initialize_app_state(&dir.path().join("dist")).await.unwrap();
        assert!(state.index_html.is_none());
    }

    #[tokio::test]
    async fn test_file_instead_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dist");
        std::fs::write(&file, "not a directory").unwrap();

        let err = load_index_html(&file).await.unwrap_err();
        assert!(matches!(err, BundleError::NotADirectory(_)));
    }
}
