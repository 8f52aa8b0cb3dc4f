//! Stored-document shape of a book and its mapping to the domain entity.
//!
//! Field names follow the lowercase keys already present in the `books`
//! collection (`createdat`, not `createdAt`).

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Book;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "createdat", default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published: i32,
    #[serde(default)]
    pub pages: i32,
    /// Older documents may hold `null` here.
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub version: i32,
}

impl BookDocument {
    pub fn new(id: ObjectId, book: &Book, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: Some(bson::DateTime::from_millis(created_at.timestamp_millis())),
            title: book.title.clone(),
            published: book.published,
            pages: book.pages,
            genres: Some(book.genres.clone()),
            rating: book.rating,
            version: book.version,
        }
    }
}

impl From<BookDocument> for Book {
    fn from(d: BookDocument) -> Self {
        Self {
            id: d.id.to_hex(),
            created_at: d
                .created_at
                .and_then(|t| DateTime::<Utc>::from_timestamp_millis(t.timestamp_millis())),
            title: d.title,
            published: d.published,
            pages: d.pages,
            genres: d.genres.unwrap_or_default(),
            rating: d.rating,
            version: d.version,
        }
    }
}

/// Builds the `$set` modification replacing every mutable field of `book`.
pub(crate) fn set_mutable_fields(book: Book) -> Document {
    doc! {
        "$set": {
            "title": book.title,
            "published": book.published,
            "pages": book.pages,
            "genres": book.genres,
            "rating": book.rating,
            "version": book.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_book() -> Book {
        Book {
            id: String::new(),
            created_at: None,
            title: "Unit Test".to_string(),
            published: 2022,
            pages: 200,
            genres: vec!["Horror".to_string()],
            rating: 2.2,
            version: 0,
        }
    }

    #[test]
    fn test_document_to_book() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let book: Book = BookDocument::new(id, &sample_book(), created).into();

        assert_eq!(book.id, "507f1f77bcf86cd799439011");
        assert_eq!(book.created_at, Some(created));
        assert_eq!(book.title, "Unit Test");
        assert_eq!(book.published, 2022);
        assert_eq!(book.pages, 200);
        assert_eq!(book.genres, vec!["Horror"]);
        assert_eq!(book.rating, 2.2);
    }

    #[test]
    fn test_decode_document_with_null_genres_and_int64_fields() {
        let id = ObjectId::new();
        let raw = doc! {
            "_id": id,
            "createdat": bson::DateTime::now(),
            "title": "Legacy",
            "published": 1999_i64,
            "pages": 321_i64,
            "genres": bson::Bson::Null,
            "rating": 3.5,
            "version": 1,
        };

        let decoded: BookDocument = bson::from_document(raw).unwrap();
        let book: Book = decoded.into();

        assert_eq!(book.id, id.to_hex());
        assert_eq!(book.published, 1999);
        assert_eq!(book.pages, 321);
        assert!(book.genres.is_empty());
        assert!(book.created_at.is_some());
    }

    #[test]
    fn test_decode_mistyped_field_fails() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": 5,
            "published": 1965,
            "pages": 412,
            "rating": 4.8,
        };

        assert!(bson::from_document::<BookDocument>(raw).is_err());
    }

    #[test]
    fn test_set_mutable_fields() {
        let update = set_mutable_fields(sample_book());
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("title").unwrap(), "Unit Test");
        assert_eq!(set.get_i32("published").unwrap(), 2022);
        assert_eq!(set.get_i32("pages").unwrap(), 200);
        assert_eq!(set.get_f64("rating").unwrap(), 2.2);
        assert_eq!(set.get_i32("version").unwrap(), 0);
        assert_eq!(set.get_array("genres").unwrap().len(), 1);
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("createdat"));
    }
}
