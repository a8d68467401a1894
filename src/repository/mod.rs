//! Book persistence keyed by ISBN.
//!
//! Every operation is a single store statement. Absent rows surface as [`AppError::NotFound`],
//! duplicate keys on insert as [`AppError::Conflict`].

mod memory;
mod postgres;

pub use memory::MemoryBookRepository;
pub use postgres::PgBookRepository;

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Insert a new book. Fails with `Conflict` if the isbn is taken.
    async fn create(&self, book: &Book) -> Result<Book, AppError>;

    /// All books ordered by isbn.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    async fn get(&self, isbn: &str) -> Result<Book, AppError>;

    /// Replace every non-key field of the book stored under `isbn`. The isbn inside `book` is not written.
    async fn update(&self, isbn: &str, book: &Book) -> Result<Book, AppError>;

    async fn remove(&self, isbn: &str) -> Result<(), AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
