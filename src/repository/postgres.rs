//! PostgreSQL-backed book repository.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use crate::store::BOOKS_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-key violation on insert to `Conflict`; everything else stays a store error.
fn conflict_or_db(e: sqlx::Error, isbn: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(isbn.to_string()),
        _ => AppError::Db(e),
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, book: &Book) -> Result<Book, AppError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            BOOKS_TABLE, COLUMNS, COLUMNS
        );
        tracing::debug!(sql = %sql, isbn = %book.isbn, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(&book.isbn)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| conflict_or_db(e, &book.isbn))
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY isbn", COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, isbn: &str) -> Result<Book, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE isbn = $1", COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    async fn update(&self, isbn: &str, book: &Book) -> Result<Book, AppError> {
        let sql = format!(
            "UPDATE {} SET amazon_url = $1, author = $2, language = $3, pages = $4, publisher = $5, title = $6, year = $7 \
             WHERE isbn = $8 RETURNING {}",
            BOOKS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    async fn remove(&self, isbn: &str) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE isbn = $1 RETURNING isbn", BOOKS_TABLE);
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let deleted: Option<(String,)> = sqlx::query_as(&sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(isbn.to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
