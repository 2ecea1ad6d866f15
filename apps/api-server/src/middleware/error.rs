//! Error handling - maps request failures to HTTP responses.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::ErrorBody;
use std::fmt;

/// Application-level error type. Every variant but `Duplicate` answers with
/// a plain-text body.
#[derive(Debug)]
pub enum AppError {
    Unprocessable(String),
    BadRequest(String),
    Duplicate,
    NotFound(String),
    Timeout,
    Panic,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unprocessable(msg) => write!(f, "{}", msg),
            AppError::BadRequest(msg) => write!(f, "{}", msg),
            AppError::Duplicate => write!(f, "{}", DomainError::Duplicate),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Timeout => write!(f, "Request timed out"),
            AppError::Panic => write!(f, "Internal Server Error"),
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) | AppError::Duplicate => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Panic | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Duplicate => {
                HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                self.text_response()
            }
            _ => self.text_response(),
        }
    }
}

impl AppError {
    fn text_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingDateKey => AppError::BadRequest(err.to_string()),
            DomainError::InvalidDate(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate => AppError::Duplicate,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => {
                tracing::debug!("Duplicate date key: {}", msg);
                AppError::Duplicate
            }
            RepoError::Connection(msg) | RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_key_is_bad_request() {
        let err = AppError::from(DomainError::MissingDateKey);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Request body must contain valid year, month, and day"
        );
    }

    #[test]
    fn test_store_failures_are_internal() {
        let err = AppError::from(RepoError::Query("connection reset".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_duplicate_is_json_bad_request() {
        let response = AppError::from(RepoError::Duplicate("E11000".to_string())).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
