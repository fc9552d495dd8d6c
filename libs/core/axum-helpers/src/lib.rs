//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: structured JSON error responses with error codes
//! - **[`extractors`]**: validated JSON bodies and typed path parameters
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let server = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, &server)?.merge(health_router(app_info!()));
//! create_production_app(router, &server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ValidatedJson, ValidatedPath};
