//! Path parameter extractor with JSON error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Extractor for typed path parameters.
///
/// Works like [`axum::extract::Path`] but rejects unparsable segments with
/// 400 and the standard JSON error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedPath;
///
/// async fn get_product(ValidatedPath(id): ValidatedPath<i32>) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ValidatedPath(value))
    }
}
