//! Custom extractors for Axum handlers.
//!
//! Both extractors turn axum's plain-text rejections into the JSON
//! [`ErrorResponse`](crate::errors::ErrorResponse) envelope with status 400.

pub mod validated_json;
pub mod validated_path;

pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
