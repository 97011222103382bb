use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use directory::{
    app, build_app_state, db::Error, theme::Theme, Database, LaboratoryData, LaboratorySummary,
};
use hyper::{header, Method};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

mock! {
    pub LaboratoryAccess {}

    #[async_trait]
    impl LaboratoryData for LaboratoryAccess {
        async fn active_laboratories(&self) -> Result<Vec<LaboratorySummary>, Error>;
        async fn health_check(&self) -> Result<(), Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(laboratories: Arc<dyn LaboratoryData>) -> TestApp {
    let app_state = build_app_state("./static".to_string(), laboratories, Theme::itam());
    TestApp {
        app: app(app_state),
    }
}

/// App backed by a real SQLite database in a fresh temp directory
pub struct TestDbApp {
    pub test_app: TestApp,
    pub db: Database,
    dir: String,
}

impl TestDbApp {
    pub async fn cleanup(self) {
        self.db.close().await;
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub async fn spawn_db_app() -> TestDbApp {
    let dir = std::env::temp_dir()
        .join(format!("labs-directory-api-{}", Uuid::now_v7()))
        .to_string_lossy()
        .to_string();
    let db = Database::new(&dir)
        .await
        .expect("Failed to create test database");
    let test_app = spawn_app(Arc::new(db.clone())).await;

    TestDbApp { test_app, db, dir }
}

pub async fn get_html(app: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

pub fn mock_lab(id: i64, name: &str, slug: &str) -> LaboratorySummary {
    LaboratorySummary {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("Investigación en {}", name.to_lowercase()),
        logo: None,
        location: "Campus Río Hondo".to_string(),
        email: format!("{}@itam.mx", slug),
        posts_count: 0,
        events_count: 0,
    }
}

pub async fn insert_lab(db: &Database, name: &str, slug: &str, logo: Option<&str>) -> i64 {
    sqlx::query(
        "INSERT INTO laboratories (name, slug, description, logo, location, email, is_active)
         VALUES (?, ?, 'Descripción', ?, 'Campus Río Hondo', 'lab@itam.mx', 1)",
    )
    .bind(name)
    .bind(slug)
    .bind(logo)
    .execute(db.pool())
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn insert_post(db: &Database, lab_id: i64, published: bool) {
    sqlx::query("INSERT INTO posts (laboratory_id, title, published) VALUES (?, 'Nota', ?)")
        .bind(lab_id)
        .bind(published)
        .execute(db.pool())
        .await
        .unwrap();
}

pub async fn insert_event(db: &Database, lab_id: i64, is_public: bool) {
    sqlx::query("INSERT INTO events (laboratory_id, title, is_public) VALUES (?, 'Taller', ?)")
        .bind(lab_id)
        .bind(is_public)
        .execute(db.pool())
        .await
        .unwrap();
}

pub async fn set_active(db: &Database, lab_id: i64, active: bool) {
    sqlx::query("UPDATE laboratories SET is_active = ? WHERE id = ?")
        .bind(active)
        .bind(lab_id)
        .execute(db.pool())
        .await
        .unwrap();
}
