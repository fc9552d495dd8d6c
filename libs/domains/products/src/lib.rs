//! Products Domain
//!
//! Product catalog with customer reviews, served over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, input validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │   Mapper    │  ← entity → view model projections
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, input DTOs, view models
//! └─────────────┘
//! ```
//!
//! The repository has two implementations: [`InMemoryProductRepository`]
//! and [`PgProductRepository`] (Sea-ORM over PostgreSQL).
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository};
//!
//! let repository = InMemoryProductRepository::new();
//! let router = handlers::router(repository);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    AddProductInput, AddProductReviewInput, Product, ProductDetailsView, ProductListItemView,
    ProductReview, ProductReviewDetailsView, ProductReviewListItemView, UpdateProductInput,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
