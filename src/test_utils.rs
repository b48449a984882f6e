#[cfg(test)]
pub mod test_utils {
    use crate::config::initialize_app_state;
    use crate::router::create_router;
    use axum::Router;
    use tempfile::TempDir;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\"></div></body></html>";
    pub const APP_JS: &str = "console.log('cropvision');";

    /// Create a bundle directory shaped like a `trunk build` output.
    pub fn setup_test_dist() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create bundle directory");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        std::fs::create_dir(dir.path().join("assets")).expect("Failed to create assets directory");
        std::fs::write(dir.path().join("assets").join("app.js"), APP_JS).expect("Failed to write app.js");
        dir
    }

    /// Create axum app for testing. The returned directory must outlive the router.
    pub async fn setup_test_app() -> (Router, TempDir) {
        let dist = setup_test_dist();
        let state = initialize_app_state(dist.path())
            .await
            .expect("Failed to initialize app state");
        (create_router(state), dist)
    }

    /// Create axum app whose bundle directory has no `index.html`.
    pub async fn setup_test_app_without_bundle() -> (Router, TempDir) {
        let dist = tempfile::tempdir().expect("Failed to create bundle directory");
        let state = initialize_app_state(dist.path())
            .await
            .expect("Failed to initialize app state");
        (create_router(state), dist)
    }
}
