/// Client-side routes of the single-page app. The host server answers these
/// with `index.html`; the frontend `Route` enum must list the same paths.
pub const APP_PATHS: [&str; 5] = [
    "/",
    "/descriptive-analysis",
    "/predictive-analysis",
    "/insights",
    "/reports",
];

/// Trailing slashes are ignored, so `/insights/` is a known route too.
pub fn is_app_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    APP_PATHS.contains(&normalized)
}
