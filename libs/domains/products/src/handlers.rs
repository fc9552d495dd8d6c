use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson, ValidatedPath,
    errors::responses::{
        BadRequestJsonResponse, BadRequestPathResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use tracing::instrument;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::mapper::to_list_items;
use crate::models::{
    AddProductInput, AddProductReviewInput, Product, ProductDetailsView, ProductListItemView,
    ProductReview, ProductReviewDetailsView, ProductReviewListItemView, ReviewPath,
    UpdateProductInput,
};
use crate::repository::ProductRepository;

/// Tag for product endpoints
pub const PRODUCTS_TAG: &str = "products";
/// Tag for review endpoints
pub const REVIEWS_TAG: &str = "product-reviews";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        get_review,
        create_review,
    ),
    components(
        schemas(
            AddProductInput,
            UpdateProductInput,
            AddProductReviewInput,
            ProductListItemView,
            ProductDetailsView,
            ProductReviewListItemView,
            ProductReviewDetailsView,
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            BadRequestPathResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product catalog endpoints"),
        (name = REVIEWS_TAG, description = "Customer reviews of products")
    )
)]
pub struct ApiDoc;

type SharedRepository<R> = State<Arc<R>>;

/// Create the products router with all HTTP endpoints
///
/// Meant to be nested at `/products`; review routes hang off each product.
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    let shared_repository = Arc::new(repository);

    Router::new()
        .route("/", get(list_products::<R>).post(create_product::<R>))
        .route("/{id}", get(get_product::<R>).put(update_product::<R>))
        .route("/{product_id}/productreviews", post(create_review::<R>))
        .route("/{product_id}/productreviews/{id}", get(get_review::<R>))
        .with_state(shared_repository)
}

/// `Location` of a created resource: the collection path it was posted to plus its id
fn created_location(collection: &OriginalUri, id: i32) -> String {
    format!("{}/{}", collection.0.path().trim_end_matches('/'), id)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductListItemView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository))]
pub async fn list_products<R: ProductRepository>(
    State(repository): SharedRepository<R>,
) -> ProductResult<Json<Vec<ProductListItemView>>> {
    let products = repository.get_all().await?;
    Ok(Json(to_list_items(&products)))
}

/// Get a product with its reviews
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDetailsView),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository))]
pub async fn get_product<R: ProductRepository>(
    State(repository): SharedRepository<R>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> ProductResult<Json<ProductDetailsView>> {
    let product = repository
        .get_details_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    Ok(Json(ProductDetailsView::from(&product)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = AddProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductDetailsView,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository, uri, input))]
pub async fn create_product<R: ProductRepository>(
    State(repository): SharedRepository<R>,
    uri: OriginalUri,
    ValidatedJson(input): ValidatedJson<AddProductInput>,
) -> ProductResult<impl IntoResponse> {
    let mut product = Product::new(
        input.title.unwrap_or_default(),
        input.description.unwrap_or_default(),
        input.price,
    )?;

    repository.add(&mut product).await?;

    tracing::info!(
        product_id = product.id(),
        title = %product.title(),
        price = %product.price(),
        "Product added"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created_location(&uri, product.id()))],
        Json(ProductDetailsView::from(&product)),
    ))
}

/// Update a product's description and price
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductInput,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository, input))]
pub async fn update_product<R: ProductRepository>(
    State(repository): SharedRepository<R>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(input): ValidatedJson<UpdateProductInput>,
) -> ProductResult<StatusCode> {
    let mut product = repository
        .get_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    product.update(input.description.unwrap_or_default(), input.price);
    repository.update(&product).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a single review
///
/// The review is looked up by its own id; the product id in the path is
/// not used to scope the lookup.
#[utoipa::path(
    get,
    path = "/{product_id}/productreviews/{id}",
    tag = REVIEWS_TAG,
    params(ReviewPath),
    responses(
        (status = 200, description = "Review found", body = ProductReviewDetailsView),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository), fields(product_id = path.product_id, review_id = path.id))]
pub async fn get_review<R: ProductRepository>(
    State(repository): SharedRepository<R>,
    ValidatedPath(path): ValidatedPath<ReviewPath>,
) -> ProductResult<Json<ProductReviewDetailsView>> {
    let review = repository
        .get_review_by_id(path.id)
        .await?
        .ok_or(ProductError::ReviewNotFound(path.id))?;

    Ok(Json(ProductReviewDetailsView::from(&review)))
}

/// Add a review to a product
#[utoipa::path(
    post,
    path = "/{product_id}/productreviews",
    tag = REVIEWS_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = AddProductReviewInput,
    responses(
        (status = 201, description = "Review created", body = ProductReviewDetailsView,
            headers(("Location" = String, description = "URL of the new review"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(repository, uri, input))]
pub async fn create_review<R: ProductRepository>(
    State(repository): SharedRepository<R>,
    ValidatedPath(product_id): ValidatedPath<i32>,
    uri: OriginalUri,
    ValidatedJson(input): ValidatedJson<AddProductReviewInput>,
) -> ProductResult<impl IntoResponse> {
    let mut review = ProductReview::new(
        input.author.unwrap_or_default(),
        input.rating,
        input.comments.unwrap_or_default(),
        product_id,
    )?;

    repository.add_review(&mut review).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created_location(&uri, review.id()))],
        Json(ProductReviewDetailsView::from(&review)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn stored_shoe() -> Product {
        let mut product = Product::new("Shoe", "Good shoe", Decimal::from(150)).unwrap();
        product.id = 1;
        product
    }

    #[tokio::test]
    async fn test_list_storage_failure_is_500() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_all()
            .returning(|| Err(ProductError::Database("connection reset".to_string())));

        let response = router(repo)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_update_does_not_persist_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let response = router(repo)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/999999")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"description":"x","price":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_persists_new_values_only() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(stored_shoe())));
        repo.expect_update()
            .withf(|p| {
                p.id() == 1
                    && p.title() == "Shoe"
                    && p.description() == "Worn shoe"
                    && p.price() == Decimal::from(90)
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = router(repo)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/1")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"description":"Worn shoe","price":90}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_get_review_ignores_product_in_path() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_review_by_id()
            .withf(|id| *id == 7)
            .returning(|_| {
                let mut review = ProductReview::new("Ana", 4, "Comfy", 1).unwrap();
                review.id = 7;
                Ok(Some(review))
            });

        let response = router(repo)
            .oneshot(
                Request::builder()
                    .uri("/42/productreviews/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_review_storage_failure_is_500() {
        let mut repo = MockProductRepository::new();
        repo.expect_add_review()
            .returning(|_| Err(ProductError::Database("fk violation".to_string())));

        let response = router(repo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/404/productreviews")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"author":"Ana","rating":5,"comments":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_created_location_joins_collection_and_id() {
        let uri = OriginalUri("/api/products/".parse().unwrap());
        assert_eq!(created_location(&uri, 12), "/api/products/12");

        let uri = OriginalUri("/api/products/3/productreviews".parse().unwrap());
        assert_eq!(created_location(&uri, 5), "/api/products/3/productreviews/5");
    }
}
