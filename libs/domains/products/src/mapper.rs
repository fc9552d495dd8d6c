//! Projections from entities to response view models.

use crate::models::{
    Product, ProductDetailsView, ProductListItemView, ProductReview, ProductReviewDetailsView,
    ProductReviewListItemView,
};

impl From<&Product> for ProductListItemView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
        }
    }
}

impl From<&Product> for ProductDetailsView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            reviews: product.reviews.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ProductReview> for ProductReviewListItemView {
    fn from(review: &ProductReview) -> Self {
        Self {
            id: review.id,
            author: review.author.clone(),
            rating: review.rating,
        }
    }
}

impl From<&ProductReview> for ProductReviewDetailsView {
    fn from(review: &ProductReview) -> Self {
        Self {
            id: review.id,
            author: review.author.clone(),
            rating: review.rating,
            comments: review.comments.clone(),
        }
    }
}

/// Project a slice of products into list items, preserving order
pub fn to_list_items(products: &[Product]) -> Vec<ProductListItemView> {
    products.iter().map(Into::into).collect()
}
