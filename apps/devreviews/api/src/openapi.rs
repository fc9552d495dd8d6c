//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the DevReviews API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevReviews API",
        version = "0.1.0",
        description = "Product catalog with customer reviews",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
