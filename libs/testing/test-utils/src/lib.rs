//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic catalog data derived from the test name
//! - `assertions`: assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("main");
//!     let rating = builder.rating();
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same titles, authors and ratings,
/// so a failing test reproduces exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Product title unique to this builder
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.title("main"), "test-product-7-main");
    /// ```
    pub fn title(&self, suffix: &str) -> String {
        format!("test-product-{}-{}", self.seed, suffix)
    }

    pub fn author(&self, suffix: &str) -> String {
        format!("test-author-{}-{}", self.seed, suffix)
    }

    /// Rating in `1..=5`
    pub fn rating(&self) -> i32 {
        (self.seed % 5) as i32 + 1
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a `Location` header points at `{collection}/{id}`
    pub fn assert_location(location: &str, collection: &str, id: i32) {
        let expected = format!("{}/{}", collection.trim_end_matches('/'), id);
        assert_eq!(location, expected, "unexpected Location header");
    }
}
