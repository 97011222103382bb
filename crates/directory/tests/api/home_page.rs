use crate::helpers::{
    get_html, insert_event, insert_lab, insert_post, mock_lab, set_active, spawn_app,
    spawn_db_app, MockLaboratoryAccess,
};
use axum::http::StatusCode;
use directory::db::Error;
use hyper::header;
use std::sync::Arc;

/// The landing page renders one card per laboratory in the order the store returns
#[tokio::test]
async fn home_lists_laboratories_from_data_source() {
    let mut laboratories = MockLaboratoryAccess::new();
    laboratories
        .expect_active_laboratories()
        .times(1)
        .returning(|| {
            Ok(vec![
                mock_lab(3, "Ciencia de Datos", "datos"),
                mock_lab(1, "Robótica", "robotica"),
            ])
        });

    let test_app = spawn_app(Arc::new(laboratories)).await;
    let (status, headers, html) = get_html(&test_app.app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(html.contains("2 Laboratorios Disponibles"));
    assert!(html.contains("Directorio de Laboratorios"));

    let first = html.find(r#"href="/laboratorio/datos""#).unwrap();
    let second = html.find(r#"href="/laboratorio/robotica""#).unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn home_is_never_cached() {
    let mut laboratories = MockLaboratoryAccess::new();
    laboratories
        .expect_active_laboratories()
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(laboratories)).await;
    let (_, headers, _) = get_html(&test_app.app, "/").await;

    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
}

/// Each request reads the data source again
#[tokio::test]
async fn every_request_queries_the_data_source() {
    let mut laboratories = MockLaboratoryAccess::new();
    laboratories
        .expect_active_laboratories()
        .times(2)
        .returning(|| Ok(vec![mock_lab(1, "Robótica", "robotica")]));

    let test_app = spawn_app(Arc::new(laboratories)).await;
    get_html(&test_app.app, "/").await;
    let (status, _, html) = get_html(&test_app.app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("1 Laboratorio Disponible<"));
}

#[tokio::test]
async fn empty_directory_renders_zero_state() {
    let mut laboratories = MockLaboratoryAccess::new();
    laboratories
        .expect_active_laboratories()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(laboratories)).await;
    let (status, _, html) = get_html(&test_app.app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("0 Laboratorios Disponibles"));
    assert!(!html.contains("/laboratorio/"));
}

/// A failing data source becomes a generic server error page
#[tokio::test]
async fn data_source_failure_returns_server_error() {
    let mut laboratories = MockLaboratoryAccess::new();
    laboratories
        .expect_active_laboratories()
        .times(1)
        .returning(|| Err(Error::Query(sqlx::Error::PoolClosed)));

    let test_app = spawn_app(Arc::new(laboratories)).await;
    let (status, _, html) = get_html(&test_app.app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Servicio no disponible"));
    assert!(!html.contains("Laboratorios Disponibles"));
}

/// Full path through SQLite: filter, ordering, filtered counts and logos
#[tokio::test]
async fn home_renders_live_database_contents() {
    let test = spawn_db_app().await;
    let db = &test.db;

    let robotica = insert_lab(db, "Robótica", "robotica", Some("/logos/robotica.png")).await;
    let datos = insert_lab(db, "Ciencia de Datos", "datos", None).await;
    insert_post(db, robotica, true).await;
    insert_post(db, robotica, false).await;
    insert_post(db, robotica, false).await;
    insert_event(db, robotica, true).await;
    insert_event(db, datos, false).await;

    let (status, _, html) = get_html(&test.test_app.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("2 Laboratorios Disponibles"));

    let datos_pos = html.find("/laboratorio/datos").unwrap();
    let robotica_pos = html.find("/laboratorio/robotica").unwrap();
    assert!(datos_pos < robotica_pos);

    assert_eq!(html.matches("<img").count(), 1);
    assert!(html.contains(r#"src="/logos/robotica.png""#));

    // Datos card first: no visible posts or events
    let datos_card = &html[datos_pos..robotica_pos];
    assert!(datos_card.contains("0 publicaciones"));
    assert!(datos_card.contains("0 eventos"));
    let robotica_card = &html[robotica_pos..];
    assert!(robotica_card.contains("1 publicaciones"));
    assert!(robotica_card.contains("1 eventos"));

    test.cleanup().await;
}

#[tokio::test]
async fn deactivated_laboratory_disappears_on_next_request() {
    let test = spawn_db_app().await;
    let lab = insert_lab(&test.db, "Robótica", "robotica", None).await;

    let (_, _, html) = get_html(&test.test_app.app, "/").await;
    assert!(html.contains("1 Laboratorio Disponible<"));

    set_active(&test.db, lab, false).await;

    let (_, _, html) = get_html(&test.test_app.app, "/").await;
    assert!(html.contains("0 Laboratorios Disponibles"));
    assert!(!html.contains("/laboratorio/robotica"));

    test.cleanup().await;
}
