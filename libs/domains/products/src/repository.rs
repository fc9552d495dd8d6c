use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductReview};

/// Repository trait for Product and ProductReview persistence
///
/// Absence is reported as `Ok(None)`; `Err` is reserved for storage failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, without reviews, in storage order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID, without reviews
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Get a product by ID with its reviews loaded
    async fn get_details_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a product and write the assigned ID back into it
    async fn add(&self, product: &mut Product) -> ProductResult<()>;

    /// Persist the current description and price of an existing product
    async fn update(&self, product: &Product) -> ProductResult<()>;

    /// Get a review by its own ID
    async fn get_review_by_id(&self, review_id: i32) -> ProductResult<Option<ProductReview>>;

    /// Insert a review and write the assigned ID back into it
    async fn add_review(&self, review: &mut ProductReview) -> ProductResult<()>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    reviews: BTreeMap<i32, ProductReview>,
    next_product_id: i32,
    next_review_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            reviews: BTreeMap::new(),
            next_product_id: 1,
            next_review_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are handed out sequentially starting at 1 under the write lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn get_details_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;

        let Some(product) = store.products.get(&id) else {
            return Ok(None);
        };

        let mut product = product.clone();
        product.reviews = store
            .reviews
            .values()
            .filter(|r| r.product_id == id)
            .cloned()
            .collect();

        Ok(Some(product))
    }

    async fn add(&self, product: &mut Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        product.id = store.next_product_id;
        store.next_product_id += 1;

        // Reviews live in their own table; a stored product never embeds them.
        let mut stored = product.clone();
        stored.reviews.clear();
        store.products.insert(stored.id, stored);
        Ok(())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        let stored = store
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        stored.update(product.description.clone(), product.price);

        tracing::info!(product_id = product.id, "Updated product");
        Ok(())
    }

    async fn get_review_by_id(&self, review_id: i32) -> ProductResult<Option<ProductReview>> {
        let store = self.store.read().await;
        Ok(store.reviews.get(&review_id).cloned())
    }

    async fn add_review(&self, review: &mut ProductReview) -> ProductResult<()> {
        let mut store = self.store.write().await;

        // Same contract as the product_reviews foreign key in Postgres.
        if !store.products.contains_key(&review.product_id) {
            return Err(ProductError::Database(format!(
                "product_reviews.product_id {} violates foreign key to products",
                review.product_id
            )));
        }

        review.id = store.next_review_id;
        store.next_review_id += 1;
        store.reviews.insert(review.id, review.clone());

        tracing::info!(
            review_id = review.id,
            product_id = review.product_id,
            "Created product review"
        );
        Ok(())
    }
}
