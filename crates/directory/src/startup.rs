use crate::{
    health_handler, home_handler, templates::ThemeStyles, theme::Theme, LaboratoryData,
};
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub laboratories: Arc<dyn LaboratoryData>,
    pub styles: Arc<ThemeStyles>,
}

/// Wire the data source and the theme into request state.
///
/// The theme stylesheet is rendered here, once for the process lifetime.
pub fn build_app_state(
    static_dir: String,
    laboratories: Arc<dyn LaboratoryData>,
    theme: &'static Theme,
) -> AppState {
    AppState {
        static_dir,
        laboratories,
        styles: Arc::new(ThemeStyles::new(theme)),
    }
}

pub fn app(app_state: AppState) -> Router {
    let serve_static = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .nest_service("/static", serve_static)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, {} code: {}, time: {}", path, response.status().as_str(), response_time);

    response
}
