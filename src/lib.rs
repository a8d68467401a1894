//! Books API: CRUD over a PostgreSQL `books` table keyed by ISBN.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError};
pub use model::{Book, Violation};
pub use repository::{BookRepository, MemoryBookRepository, PgBookRepository};
pub use routes::{app, book_routes, common_routes};
pub use service::BookValidator;
pub use state::AppState;
pub use store::{ensure_books_table, ensure_database_exists};
