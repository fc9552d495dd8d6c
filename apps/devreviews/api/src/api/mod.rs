//! API routes module

pub mod health;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_products::{InMemoryProductRepository, PgProductRepository, handlers};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    let products = match &state.db {
        Some(db) => handlers::router(PgProductRepository::new(db.clone())),
        None => handlers::router(InMemoryProductRepository::new()),
    };

    Router::new().nest("/products", products)
}

/// The complete application: docs, `/api` routes, `/health` and `/ready`
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()));
    Ok(router)
}
