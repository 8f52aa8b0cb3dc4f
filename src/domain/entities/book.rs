//! Book entity representing one reading-list entry.

use chrono::{DateTime, Utc};

/// A book on the reading list.
///
/// `id` is the hex form of the store identifier and stays empty until the
/// record has been persisted. `created_at` is assigned once, on first
/// persistence, unless the caller already supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub title: String,
    pub published: i32,
    pub pages: i32,
    pub genres: Vec<String>,
    pub rating: f64,
    pub version: i32,
}

/// Input data for creating a new book.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub published: i32,
    pub pages: i32,
    pub genres: Vec<String>,
    pub rating: f64,
}

impl From<NewBook> for Book {
    fn from(input: NewBook) -> Self {
        Self {
            id: String::new(),
            created_at: None,
            title: input.title,
            published: input.published,
            pages: input.pages,
            genres: input.genres,
            rating: input.rating,
            version: 0,
        }
    }
}

/// Partial update for an existing book.
///
/// `None` fields are left unchanged. An empty `genres` list is treated the
/// same as an absent one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub published: Option<i32>,
    pub pages: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
}

impl BookPatch {
    /// Applies the patch to `book` in place.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(published) = self.published {
            book.published = published;
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
        if let Some(genres) = self.genres.filter(|g| !g.is_empty()) {
            book.genres = genres;
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
    }
}
