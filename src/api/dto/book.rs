//! DTOs for the book endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Book, BookPatch, NewBook};

/// Request body for `POST /v1/books`.
///
/// Absent and `null` fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateBookRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<CreateBookRequest> for NewBook {
    fn from(r: CreateBookRequest) -> Self {
        Self {
            title: r.title,
            published: r.published,
            pages: r.pages,
            genres: r.genres,
            rating: r.rating,
        }
    }
}

/// Request body for `PUT /v1/books/{id}`.
///
/// All fields are optional. Only provided fields are changed. An empty
/// `genres` list leaves the stored genres untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub published: Option<i32>,
    pub pages: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
}

impl From<UpdateBookRequest> for BookPatch {
    fn from(r: UpdateBookRequest) -> Self {
        Self {
            title: r.title,
            published: r.published,
            pages: r.pages,
            genres: r.genres,
            rating: r.rating,
        }
    }
}

/// JSON representation of a book.
#[derive(Debug, Serialize)]
pub struct BookItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    pub title: String,
    pub published: i32,
    pub pages: i32,
    pub genres: Vec<String>,
    pub rating: f64,
    pub version: i32,
}

impl From<Book> for BookItem {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            created_at: b.created_at,
            title: b.title,
            published: b.published,
            pages: b.pages,
            genres: b.genres,
            rating: b.rating,
            version: b.version,
        }
    }
}

/// `{"book": {...}}`
#[derive(Debug, Serialize)]
pub struct BookEnvelope {
    pub book: BookItem,
}

impl From<Book> for BookEnvelope {
    fn from(book: Book) -> Self {
        Self { book: book.into() }
    }
}

/// `{"books": [...]}`
#[derive(Debug, Serialize)]
pub struct BooksEnvelope {
    pub books: Vec<BookItem>,
}

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}
