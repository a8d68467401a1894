mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Max accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full service router: common routes, book routes, JSON 404 fallback, tracing and body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
