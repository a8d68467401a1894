//! Typed errors and HTTP mapping.

use crate::model::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation failed: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("There is no book with an isbn '{0}")]
    NotFound(String),
    #[error("A book with isbn '{0}' already exists")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("Not Found")]
    RouteNotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Store errors are reduced to a generic text.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Invalid book data".to_string(),
            AppError::BadRequest(reason) => reason.clone(),
            AppError::Config(_) | AppError::Db(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "internal error");
        }
        let message = self.public_message();
        let violations = match self {
            AppError::Validation(v) => Some(v),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                message,
                status: status.as_u16(),
                violations,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_the_isbn() {
        let (status, body) = render(AppError::NotFound("123".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"error": {"message": "There is no book with an isbn '123", "status": 404}})
        );
    }

    #[tokio::test]
    async fn conflict_is_a_bad_request() {
        let (status, body) = render(AppError::Conflict("0691161518".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], 400);
        assert!(body["error"]["message"].as_str().unwrap().contains("0691161518"));
    }

    #[tokio::test]
    async fn validation_carries_violations() {
        let err = AppError::Validation(vec![Violation::new("pages", "pages is required")]);
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid book data");
        assert_eq!(
            body["error"]["violations"],
            json!([{"field": "pages", "message": "pages is required"}])
        );
    }

    #[tokio::test]
    async fn store_errors_do_not_leak() {
        let (status, body) = render(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": {"message": "Internal server error", "status": 500}})
        );
    }
}
