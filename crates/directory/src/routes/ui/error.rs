use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;

use crate::db;

/// Failure while building a page. Never retried; surfaces as a 500.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("data source failure: {0}")]
    DataSource(#[from] db::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("error rendering page: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Error - Laboratorios ITAM</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css">
</head>
<body>
    <section class="section">
        <div class="container">
            <div class="notification is-danger is-light">
                <h1 class="title">Servicio no disponible</h1>
                <p>No fue posible cargar el directorio de laboratorios. Intenta de nuevo más tarde.</p>
            </div>
        </div>
    </section>
</body>
</html>"#;
