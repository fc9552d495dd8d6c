use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Decimal places kept by the `price` column
const PRICE_SCALE: u32 = 2;

/// Largest amount `NUMERIC(12, 2)` holds
fn max_price() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Custom validator for prices: zero or positive, whole cents, and within
/// the range of the `price` column
fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(validator::ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(validator::ValidationError::new("price_precision"));
    }
    if *price > max_price() {
        return Err(validator::ValidationError::new("price_too_large"));
    }
    Ok(())
}

/// Product entity - an item in the catalog
///
/// The id is assigned by the repository on insert and is `0` until then.
/// Title is fixed at creation; only description and price change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(crate) id: i32,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) price: Decimal,
    pub(crate) reviews: Vec<ProductReview>,
}

impl Product {
    /// Create a new, not yet persisted product
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> ProductResult<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(ProductError::Validation("Title is required".to_string()));
        }

        Ok(Self {
            id: 0,
            title,
            description: description.into(),
            price,
            reviews: Vec::new(),
        })
    }

    /// Replace description and price in place
    pub fn update(&mut self, description: impl Into<String>, price: Decimal) {
        self.description = description.into();
        self.price = price;
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Reviews ordered by id; empty unless loaded through a details lookup
    pub fn reviews(&self) -> &[ProductReview] {
        &self.reviews
    }
}

/// Review left by a customer for a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReview {
    pub(crate) id: i32,
    pub(crate) author: String,
    pub(crate) rating: i32,
    pub(crate) comments: String,
    pub(crate) product_id: i32,
}

impl ProductReview {
    /// Create a new, not yet persisted review for `product_id`
    pub fn new(
        author: impl Into<String>,
        rating: i32,
        comments: impl Into<String>,
        product_id: i32,
    ) -> ProductResult<Self> {
        let author = author.into();
        if author.is_empty() {
            return Err(ProductError::Validation("Author is required".to_string()));
        }

        Ok(Self {
            id: 0,
            author,
            rating,
            comments: comments.into(),
            product_id,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn product_id(&self) -> i32 {
        self.product_id
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductInput {
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// DTO for creating a new product review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductReviewInput {
    pub author: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comments: Option<String>,
}

/// Path parameters for a single review
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ReviewPath {
    /// Product ID
    pub product_id: i32,
    /// Review ID
    pub id: i32,
}

/// Product as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListItemView {
    pub id: i32,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Product with its description and reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailsView {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub reviews: Vec<ProductReviewListItemView>,
}

/// Review as shown nested in product details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductReviewListItemView {
    pub id: i32,
    pub author: String,
    pub rating: i32,
}

/// Review with its comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductReviewDetailsView {
    pub id: i32,
    pub author: String,
    pub rating: i32,
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_requires_title() {
        let result = Product::new("", "Good shoe", Decimal::from(150));
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_product_keeps_given_fields() {
        let product = Product::new("Shoe", "Good shoe", Decimal::from(150)).unwrap();
        assert_eq!(product.id(), 0);
        assert_eq!(product.title(), "Shoe");
        assert_eq!(product.description(), "Good shoe");
        assert_eq!(product.price(), Decimal::from(150));
        assert!(product.reviews().is_empty());
    }

    #[test]
    fn test_update_changes_description_and_price_only() {
        let mut product = Product::new("Shoe", "Good shoe", Decimal::from(150)).unwrap();
        product.id = 3;

        product.update("Great shoe", Decimal::new(12050, 2));

        assert_eq!(product.id(), 3);
        assert_eq!(product.title(), "Shoe");
        assert_eq!(product.description(), "Great shoe");
        assert_eq!(product.price(), Decimal::new(12050, 2));
    }

    #[test]
    fn test_review_requires_author() {
        let result = ProductReview::new("", 5, "Nice", 1);
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_review_preserves_product_id() {
        let review = ProductReview::new("Ana", 4, "", 42).unwrap();
        assert_eq!(review.id(), 0);
        assert_eq!(review.product_id(), 42);
        assert_eq!(review.rating(), 4);
        assert_eq!(review.comments(), "");
    }

    #[test]
    fn test_review_constructor_does_not_bound_rating() {
        assert!(ProductReview::new("Ana", 9, "", 1).is_ok());
    }

    #[test]
    fn test_add_product_input_rejects_negative_price() {
        let input = AddProductInput {
            title: Some("Shoe".to_string()),
            description: None,
            price: Decimal::from(-1),
        };
        assert!(input.validate().is_err());

        let free = AddProductInput {
            price: Decimal::ZERO,
            ..input
        };
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_price_must_fit_column() {
        let input = UpdateProductInput {
            description: None,
            price: Decimal::new(1999, 2),
        };
        assert!(input.validate().is_ok());

        let trailing_zero = UpdateProductInput {
            price: Decimal::new(19990, 3),
            ..input.clone()
        };
        assert!(trailing_zero.validate().is_ok());

        let sub_cent = UpdateProductInput {
            price: Decimal::new(19999, 3),
            ..input.clone()
        };
        assert!(sub_cent.validate().is_err());

        let largest = UpdateProductInput {
            price: max_price(),
            ..input.clone()
        };
        assert!(largest.validate().is_ok());

        let too_large = UpdateProductInput {
            price: Decimal::from(10_000_000_000i64),
            ..input
        };
        assert!(too_large.validate().is_err());
    }

    #[test]
    fn test_review_input_rating_bounds() {
        let mut input = AddProductReviewInput {
            author: Some("Ana".to_string()),
            rating: 5,
            comments: None,
        };
        assert!(input.validate().is_ok());

        input.rating = 0;
        assert!(input.validate().is_err());

        input.rating = 6;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_price_deserializes_from_json_number() {
        let input: AddProductInput =
            serde_json::from_str(r#"{"title":"Shoe","description":"Good shoe","price":150}"#)
                .unwrap();
        assert_eq!(input.price, Decimal::from(150));
        assert_eq!(input.title.as_deref(), Some("Shoe"));
    }
}
