//! Process-local book repository. Each instance is an isolated store.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<String, Book>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn create(&self, book: &Book) -> Result<Book, AppError> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(book.isbn.clone()));
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(book.clone())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get(&self, isbn: &str) -> Result<Book, AppError> {
        self.books
            .read()
            .await
            .get(isbn)
            .cloned()
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    async fn update(&self, isbn: &str, book: &Book) -> Result<Book, AppError> {
        let mut books = self.books.write().await;
        let stored = books
            .get_mut(isbn)
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))?;
        *stored = Book {
            isbn: isbn.to_string(),
            ..book.clone()
        };
        Ok(stored.clone())
    }

    async fn remove(&self, isbn: &str) -> Result<(), AppError> {
        self.books
            .write()
            .await
            .remove(isbn)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            amazon_url: "http://a.co/eobPtX2".to_string(),
            author: "Matthew Lane".to_string(),
            language: "english".to_string(),
            pages: 264,
            publisher: "Princeton University Press".to_string(),
            title: "Power-Up: Unlocking the Hidden Mathematics in Video Games".to_string(),
            year: 2017,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = MemoryBookRepository::new();
        let created = repo.create(&book("0691161518")).await.unwrap();
        assert_eq!(repo.get("0691161518").await.unwrap(), created);
        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn duplicate_create_conflicts_without_overwrite() {
        let repo = MemoryBookRepository::new();
        repo.create(&book("0691161518")).await.unwrap();
        let mut other = book("0691161518");
        other.author = "Someone Else".to_string();
        let err = repo.create(&other).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref isbn) if isbn == "0691161518"));
        assert_eq!(repo.get("0691161518").await.unwrap().author, "Matthew Lane");
    }

    #[tokio::test]
    async fn missing_isbn_is_not_found_everywhere() {
        let repo = MemoryBookRepository::new();
        for err in [
            repo.get("404").await.unwrap_err(),
            repo.update("404", &book("404")).await.unwrap_err(),
            repo.remove("404").await.unwrap_err(),
        ] {
            assert!(matches!(err, AppError::NotFound(ref isbn) if isbn == "404"));
        }
    }

    #[tokio::test]
    async fn update_keeps_the_path_isbn() {
        let repo = MemoryBookRepository::new();
        repo.create(&book("0691161518")).await.unwrap();
        let mut changed = book("ignored");
        changed.publisher = "Test Update".to_string();
        let updated = repo.update("0691161518", &changed).await.unwrap();
        assert_eq!(updated.isbn, "0691161518");
        assert_eq!(updated.publisher, "Test Update");
        assert!(repo.get("ignored").await.is_err());
    }

    #[tokio::test]
    async fn remove_deletes_the_row() {
        let repo = MemoryBookRepository::new();
        repo.create(&book("0691161518")).await.unwrap();
        repo.remove("0691161518").await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
