//! Common utilities for connecting to databases

pub mod error;
pub mod retry;

pub use error::DatabaseError;
pub use retry::{RetryConfig, retry_with_backoff};
