use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

// ===== Products Entity =====

pub mod products {
    use super::*;

    /// Sea-ORM Entity for products table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "Text")]
        pub title: String,
        #[sea_orm(column_type = "Text")]
        pub description: String,
        #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
        pub price: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product_reviews::Entity")]
        Reviews,
    }

    impl Related<super::product_reviews::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Reviews.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    // Reviews are attached separately by the details lookup
    impl From<Model> for crate::models::Product {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                title: model.title,
                description: model.description,
                price: model.price,
                reviews: Vec::new(),
            }
        }
    }

    // Insert form: the id is left to the SERIAL column
    impl From<&crate::models::Product> for ActiveModel {
        fn from(product: &crate::models::Product) -> Self {
            ActiveModel {
                id: NotSet,
                title: Set(product.title.clone()),
                description: Set(product.description.clone()),
                price: Set(product.price),
            }
        }
    }
}

// ===== Product Reviews Entity =====

pub mod product_reviews {
    use super::*;

    /// Sea-ORM Entity for product_reviews table
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "product_reviews")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "Text")]
        pub author: String,
        pub rating: i32,
        #[sea_orm(column_type = "Text")]
        pub comments: String,
        pub product_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::products::Entity",
            from = "Column::ProductId",
            to = "super::products::Column::Id"
        )]
        Product,
    }

    impl Related<super::products::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Product.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::ProductReview {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                author: model.author,
                rating: model.rating,
                comments: model.comments,
                product_id: model.product_id,
            }
        }
    }

    impl From<&crate::models::ProductReview> for ActiveModel {
        fn from(review: &crate::models::ProductReview) -> Self {
            ActiveModel {
                id: NotSet,
                author: Set(review.author.clone()),
                rating: Set(review.rating),
                comments: Set(review.comments.clone()),
                product_id: Set(review.product_id),
            }
        }
    }
}
