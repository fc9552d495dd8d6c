use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Product review not found: {0}")]
    ReviewNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::ReviewNotFound(id) => {
                AppError::NotFound(format!("Product review {} not found", id))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => {
                AppError::InternalServerError(format!("Database error: {}", msg))
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            // Missing resources answer with a bare 404, no JSON envelope.
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ProductError::ReviewNotFound(id) => {
                tracing::info!(review_id = id, "Product review not found");
                StatusCode::NOT_FOUND.into_response()
            }
            other => {
                let app_error: AppError = other.into();
                app_error.into_response()
            }
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
