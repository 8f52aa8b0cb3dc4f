//! MongoDB implementation of the book repository.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::book_document::{BookDocument, set_mutable_fields};
use super::parse_object_id;
use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Upper bound for a single storage call.
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// MongoDB repository for book storage and retrieval.
///
/// Holds a typed collection handle; the client behind it is created once at
/// startup and shared. Every call runs under its own timeout, independent of
/// the HTTP request that triggered it.
#[derive(Clone)]
pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
    timeout: Duration,
}

impl MongoBookRepository {
    /// Creates a repository over `collection` in `db`.
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
            timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::time::timeout(self.timeout, op)
            .await
            .map_err(|_| AppError::Timeout(self.timeout))?
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn create(&self, mut book: Book) -> Result<Book, AppError> {
        let id = ObjectId::new();
        let created_at = book.created_at.unwrap_or_else(Utc::now);
        // Stored with millisecond precision.
        book.created_at = DateTime::from_timestamp_millis(created_at.timestamp_millis());
        let document = BookDocument::new(id, &book, created_at);

        let result = self
            .bounded(async {
                Ok::<_, AppError>(self.collection.insert_one(document).await?)
            })
            .await?;

        let inserted = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::storage("inserted id is not an ObjectId"))?;

        book.id = inserted.to_hex();
        Ok(book)
    }

    async fn get(&self, id: &str) -> Result<Book, AppError> {
        let oid = parse_object_id(id)?;

        let found = self
            .bounded(async {
                Ok::<_, AppError>(self.collection.find_one(doc! { "_id": oid }).await?)
            })
            .await?;

        found.map(Book::from).ok_or(AppError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let documents: Vec<BookDocument> = self
            .bounded(async {
                let cursor = self.collection.find(doc! {}).await?;
                Ok::<_, AppError>(cursor.try_collect().await?)
            })
            .await?;

        Ok(documents.into_iter().map(Book::from).collect())
    }

    async fn update(&self, book: Book) -> Result<bool, AppError> {
        let oid = parse_object_id(&book.id)?;
        let update = set_mutable_fields(book);

        let result = self
            .bounded(async {
                Ok::<_, AppError>(
                    self.collection
                        .update_one(doc! { "_id": oid }, update)
                        .await?,
                )
            })
            .await?;

        tracing::debug!(
            id = %oid,
            matched = result.matched_count,
            modified = result.modified_count,
            "book updated"
        );

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let oid = parse_object_id(id)?;

        let result = self
            .bounded(async {
                Ok::<_, AppError>(self.collection.delete_many(doc! { "_id": oid }).await?)
            })
            .await?;

        tracing::debug!(id = %oid, deleted = result.deleted_count, "book deleted");

        Ok(result.deleted_count > 0)
    }
}
