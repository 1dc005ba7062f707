/// Error types for the Yatube web service
///
/// Errors are converted to HTTP responses: `NotFound` renders the 404 page,
/// `LoginRequired` issues the login redirect, everything else becomes a plain
/// error page with the matching status code.
use actix_web::http::header::{self, ContentType};
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use askama::Template;
use thiserror::Error;

/// Result type for yatube operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Login required")]
    LoginRequired {
        /// Original path (with query string), already percent-encoded where
        /// needed, to be carried in the `next` parameter.
        next: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::LoginRequired { .. } => StatusCode::FOUND,
            AppError::Token(_) | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::LoginRequired { next } => HttpResponse::Found()
                .insert_header((header::LOCATION, format!("/auth/login/?next={}", next)))
                .finish(),
            AppError::NotFound(_) => {
                let page = crate::templates::NotFoundTemplate {
                    current_username: None,
                };
                match page.render() {
                    Ok(body) => HttpResponse::NotFound()
                        .content_type(ContentType::html())
                        .body(body),
                    Err(e) => {
                        tracing::error!("404 template rendering failed: {}", e);
                        HttpResponse::NotFound().finish()
                    }
                }
            }
            _ => {
                let status = self.status_code();
                if status.is_server_error() {
                    tracing::error!("request failed: {}", self);
                }
                HttpResponse::build(status)
                    .content_type(ContentType::html())
                    .body(format!(
                        "<!DOCTYPE html><html><body><h1>{} {}</h1></body></html>",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Error"),
                    ))
            }
        }
    }
}
