use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use hyper::header::CACHE_CONTROL;

use super::PageError;
use crate::{templates::home_page, AppState};

/// Handler for the landing page (GET /)
///
/// Reads the store on every request and tells clients and proxies not to keep a copy.
pub async fn home_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, PageError> {
    let labs = state.laboratories.active_laboratories().await?;
    let page = home_page(&state.styles, &labs);
    Ok(([(CACHE_CONTROL, "no-store")], Html(page.into_string())))
}
