use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory the bundle's static files are served from
    pub dist_dir: Arc<PathBuf>,
    /// The bundle's `index.html`, read once at startup
    pub index_html: Option<Arc<str>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dist_dir", &self.dist_dir)
            .field("index_html", &self.index_html.as_ref().map(|html| html.len()))
            .finish()
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle is being served ("available" or "missing")
    pub frontend: String,
}
