//! Shared application state for all routes.

use crate::repository::BookRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(books: impl BookRepository) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}
