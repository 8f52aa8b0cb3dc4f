//! Reading list home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Book;
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the list of all books.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub books: Vec<Book>,
}

/// Renders every book as a table.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, PageError> {
    let books = state.book_service.get_all().await?;

    Ok(HomeTemplate { books })
}
