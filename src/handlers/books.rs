//! Book handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Book, Violation};
use crate::response::{book_created, book_ok, books_ok, message_ok};
use crate::service::BookValidator;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

fn validated(body: &serde_json::Value) -> Result<Book, AppError> {
    BookValidator::validate(body).map_err(AppError::Validation)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.books.list().await?;
    Ok(books_ok(books))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let book = validated(&body)?;
    let book = state.books.create(&book).await?;
    tracing::info!(isbn = %book.isbn, "book created");
    Ok(book_created(book))
}

pub async fn read(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.books.get(&isbn).await?;
    Ok(book_ok(book))
}

/// Full replacement. The body isbn must match the path isbn.
pub async fn update(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let book = validated(&body)?;
    if book.isbn != isbn {
        return Err(AppError::Validation(vec![Violation::new(
            "isbn",
            "isbn in body must match isbn in path",
        )]));
    }
    let book = state.books.update(&isbn, &book).await?;
    tracing::info!(isbn = %isbn, "book updated");
    Ok(book_ok(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.books.remove(&isbn).await?;
    tracing::info!(isbn = %isbn, "book deleted");
    Ok(message_ok("Book deleted"))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
