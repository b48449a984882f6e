use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use common::routes::is_app_path;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{debug, instrument, warn};

use crate::schemas::{AppState, ErrorResponse};

/// Fallback for everything that is not an API route.
///
/// Client routes get `index.html` with 200, files in the bundle directory are
/// served as-is, and anything else gets `index.html` with 404 so the client
/// router can render its not-found page.
#[instrument(skip(state, request), fields(path = %request.uri().path()))]
pub async fn serve_frontend(State(state): State<AppState>, request: Request) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    if is_app_path(request.uri().path()) {
        debug!("Client route, serving index.html");
        return index_response(&state, StatusCode::OK);
    }

    let response = match ServeDir::new(state.dist_dir.as_ref()).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        debug!("Unknown path, serving index.html with 404");
        return index_response(&state, StatusCode::NOT_FOUND);
    }

    response.into_response()
}

fn index_response(state: &AppState, status: StatusCode) -> Response {
    match &state.index_html {
        Some(html) => (status, Html(html.to_string())).into_response(),
        None => {
            warn!("Frontend bundle is missing, cannot serve index.html");
            let body = ErrorResponse {
                error: "Frontend bundle has not been built".to_string(),
                code: "FRONTEND_MISSING".to_string(),
                success: false,
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
