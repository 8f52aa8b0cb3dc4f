#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use reading_list::domain::entities::Book;
use reading_list::domain::repositories::BookRepository;
use reading_list::error::AppError;
use reading_list::infrastructure::persistence::InMemoryBookRepository;
use reading_list::routes::router;
use reading_list::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const SITE_URL: &str = "http://books.example.com";

/// Repository whose every call fails like an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl BookRepository for FailingRepository {
    async fn create(&self, _book: Book) -> Result<Book, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn get(&self, _id: &str) -> Result<Book, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn update(&self, _book: Book) -> Result<bool, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn delete(&self, _id: &str) -> Result<bool, AppError> {
        Err(AppError::storage("connection refused"))
    }
}

pub fn create_test_state(repository: Arc<dyn BookRepository>) -> AppState {
    AppState::new(repository, "test", "1.2.3", SITE_URL)
}

/// Test server over the full router backed by an empty in-memory store.
pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryBookRepository::new()))
}

pub fn make_server_with(repository: Arc<dyn BookRepository>) -> TestServer {
    let app = router(create_test_state(repository), "ui/static");
    TestServer::new(app).unwrap()
}

pub fn dune() -> Value {
    json!({
        "title": "Dune",
        "published": 1965,
        "pages": 412,
        "genres": ["Sci-Fi"],
        "rating": 4.8
    })
}

/// Creates a book through the API and returns its identifier.
pub async fn create_book(server: &TestServer, body: &Value) -> String {
    let response = server.post("/v1/books").json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["book"]["_id"]
        .as_str()
        .unwrap()
        .to_string()
}
