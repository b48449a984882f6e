#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_without_bundle, APP_JS, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::routes::APP_PATHS;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _dist) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.frontend, "available");
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let (app, _dist) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        for path in APP_PATHS {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), INDEX_HTML, "unexpected body for {}", path);
        }

        let response = server.get("/insights/").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_bundle_files_are_served() {
        let (app, _dist) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/assets/app.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), APP_JS);
    }

    #[tokio::test]
    async fn test_unknown_path_serves_index_with_404() {
        let (app, _dist) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        for path in ["/dashboard", "/insights/extra", "/assets/missing.js"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            assert_eq!(response.text(), INDEX_HTML, "unexpected body for {}", path);
        }
    }

    #[tokio::test]
    async fn test_non_get_requests_are_rejected() {
        let (app, _dist) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/insights").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_missing_bundle() {
        let (app, _dist) = setup_test_app_without_bundle().await;
        let server = TestServer::new(app).unwrap();

        let health: HealthResponse = server.get("/health").await.json();
        assert_eq!(health.frontend, "missing");

        let response = server.get("/predictive-analysis").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FRONTEND_MISSING");
        assert!(!body.success);
    }
}
