//! Book CRUD routes.

use crate::handlers::books::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list).post(create))
        .route("/books/:isbn", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
