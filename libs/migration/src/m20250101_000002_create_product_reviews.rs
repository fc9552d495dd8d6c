use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000001_create_products::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductReviews::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductReviews::Id))
                    .col(text(ProductReviews::Author))
                    .col(integer(ProductReviews::Rating))
                    .col(text(ProductReviews::Comments).default(""))
                    .col(integer(ProductReviews::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_reviews_product_id")
                            .from(ProductReviews::Table, ProductReviews::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Details lookups load reviews by product
        manager
            .create_index(
                Index::create()
                    .name("idx_product_reviews_product_id")
                    .table(ProductReviews::Table)
                    .col(ProductReviews::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductReviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProductReviews {
    Table,
    Id,
    Author,
    Rating,
    Comments,
    ProductId,
}
