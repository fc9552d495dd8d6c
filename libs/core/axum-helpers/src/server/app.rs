use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router with documentation and common middleware.
///
/// Sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar) backed by
///   `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - JSON 404 fallback
/// - Request tracing, security headers, CORS and response compression
///
/// Health endpoints are merged by the app with
/// [`health_router`](super::health::health_router).
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = create_cors_layer(&server_config.cors_allowed_origins).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;
    info!(
        origins = ?server_config.cors_allowed_origins,
        "CORS configured"
    );

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before the server future resolves.
/// `cleanup` (closing the database pool, for instance) is bounded by
/// `shutdown_timeout`; if it overruns, shutdown proceeds with a warning.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = coordinator.clone();
    tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let cleanup_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator.wait().await;

            info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
            match tokio::time::timeout(shutdown_timeout, cleanup).await {
                Ok(_) => info!("Cleanup completed successfully"),
                Err(_) => tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                ),
            }
        })
    };

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown({
            let coordinator = coordinator.clone();
            async move { coordinator.wait().await }
        })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // A serve error ends the process without a signal; still release resources.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
