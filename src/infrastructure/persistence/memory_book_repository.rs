//! In-memory implementation of the book repository.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::parse_object_id;
use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Process-local book store.
///
/// Mirrors [`super::MongoBookRepository`]: same identifier rules, same
/// not-found and zero-match behavior, listing in insertion order.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<(ObjectId, Book)>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, mut book: Book) -> Result<Book, AppError> {
        let id = ObjectId::new();
        book.id = id.to_hex();
        book.created_at.get_or_insert_with(Utc::now);

        self.books.write().await.push((id, book.clone()));
        Ok(book)
    }

    async fn get(&self, id: &str) -> Result<Book, AppError> {
        let oid = parse_object_id(id)?;

        self.books
            .read()
            .await
            .iter()
            .find(|(key, _)| *key == oid)
            .map(|(_, book)| book.clone())
            .ok_or(AppError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .map(|(_, book)| book.clone())
            .collect())
    }

    async fn update(&self, book: Book) -> Result<bool, AppError> {
        let oid = parse_object_id(&book.id)?;
        let mut books = self.books.write().await;

        let Some((_, stored)) = books.iter_mut().find(|(key, _)| *key == oid) else {
            return Ok(false);
        };

        stored.title = book.title;
        stored.published = book.published;
        stored.pages = book.pages;
        stored.genres = book.genres;
        stored.rating = book.rating;
        stored.version = book.version;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let oid = parse_object_id(id)?;
        let mut books = self.books.write().await;

        let before = books.len();
        books.retain(|(key, _)| *key != oid);
        Ok(books.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book(title: &str) -> Book {
        Book {
            id: String::new(),
            created_at: None,
            title: title.to_string(),
            published: 2001,
            pages: 300,
            genres: vec!["Fantasy".to_string()],
            rating: 4.0,
            version: 0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let repo = InMemoryBookRepository::new();

        let created = repo.create(book("A")).await.unwrap();

        assert_eq!(created.id.len(), 24);
        assert!(created.created_at.is_some());
        assert_eq!(repo.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_timestamp() {
        let repo = InMemoryBookRepository::new();
        let supplied = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();

        let mut input = book("A");
        input.created_at = Some(supplied);
        let created = repo.create(input).await.unwrap();

        assert_eq!(created.created_at, Some(supplied));
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order() {
        let repo = InMemoryBookRepository::new();
        repo.create(book("First")).await.unwrap();
        repo.create(book("Second")).await.unwrap();
        repo.create(book("Third")).await.unwrap();

        let titles: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_get_unknown_id_not_found() {
        let repo = InMemoryBookRepository::new();

        let result = repo.get(&ObjectId::new().to_hex()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let repo = InMemoryBookRepository::new();
        let created = repo.create(book("Old")).await.unwrap();

        let mut changed = created.clone();
        changed.title = "New".to_string();
        changed.created_at = None;

        assert!(repo.update(changed).await.unwrap());

        let stored = repo.get(&created.id).await.unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_zero_matches() {
        let repo = InMemoryBookRepository::new();
        let mut missing = book("Ghost");
        missing.id = ObjectId::new().to_hex();

        assert!(!repo.update(missing.clone()).await.unwrap());
        assert!(!repo.delete(&missing.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_book() {
        let repo = InMemoryBookRepository::new();
        let created = repo.create(book("Gone")).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(matches!(
            repo.get(&created.id).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_malformed_ids_rejected() {
        let repo = InMemoryBookRepository::new();

        assert!(matches!(
            repo.get("nope").await,
            Err(AppError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repo.delete("").await,
            Err(AppError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repo.update(book("No id")).await,
            Err(AppError::InvalidIdentifier(_))
        ));
    }
}
