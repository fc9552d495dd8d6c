use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

use crate::{
    entity::{product_reviews, products},
    error::{ProductError, ProductResult},
    models::{Product, ProductReview},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository backed by Sea-ORM
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = products::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_details_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let Some(model) = products::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let reviews = model
            .find_related(product_reviews::Entity)
            .order_by_asc(product_reviews::Column::Id)
            .all(&self.db)
            .await?;

        let mut product: Product = model.into();
        product.reviews = reviews.into_iter().map(Into::into).collect();
        Ok(Some(product))
    }

    async fn add(&self, product: &mut Product) -> ProductResult<()> {
        let active_model = products::ActiveModel::from(&*product);
        let model = active_model.insert(&self.db).await?;

        // The column rounds to whole cents; keep the entity in step with the row.
        product.id = model.id;
        product.price = model.price;
        Ok(())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        // Title is immutable, so only description and price are written.
        let active_model = products::ActiveModel {
            id: Unchanged(product.id),
            title: NotSet,
            description: Set(product.description.clone()),
            price: Set(product.price),
        };

        match active_model.update(&self.db).await {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => return Err(ProductError::NotFound(product.id)),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(product_id = product.id, "Updated product");
        Ok(())
    }

    async fn get_review_by_id(&self, review_id: i32) -> ProductResult<Option<ProductReview>> {
        let model = product_reviews::Entity::find_by_id(review_id)
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn add_review(&self, review: &mut ProductReview) -> ProductResult<()> {
        let active_model = product_reviews::ActiveModel::from(&*review);
        let model = active_model.insert(&self.db).await?;

        review.id = model.id;

        tracing::info!(
            review_id = model.id,
            product_id = model.product_id,
            "Created product review"
        );
        Ok(())
    }
}
