use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::debug;

use crate::database::models::{CreateProductDto, Product, ProductWithRating};
use crate::database::{DatabaseError, ProductStore, ReviewStore};
use crate::services::ReviewService;
use crate::types::PRODUCT_NOT_FOUND;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] DatabaseError),
}

/// Product CRUD plus the lazily computed review aggregate. Deleting a product
/// cascades into a bulk review delete so no orphaned reviews remain.
pub struct ProductService {
    products: Arc<dyn ProductStore>,
    reviews: Arc<dyn ReviewStore>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self { products, reviews }
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<Product, ProductError> {
        if dto.title.trim().is_empty() {
            return Err(ProductError::Invalid("title must not be empty"));
        }
        if dto.price < 0 {
            return Err(ProductError::Invalid("price must not be negative"));
        }

        let product = Product {
            id: ObjectId::new().to_hex(),
            title: dto.title,
            description: dto.description,
            price: dto.price,
            created_at: Utc::now(),
        };

        Ok(self.products.insert(product).await?)
    }

    /// Read model with the rating aggregate recomputed from the review
    /// collection on every call. Nothing is stored, so concurrent review
    /// creates never race a stored counter.
    pub async fn find_with_rating(&self, id: &str) -> Result<ProductWithRating, ProductError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(PRODUCT_NOT_FOUND))?;

        let (review_count, review_avg) = ReviewService::new(self.reviews.clone())
            .rating_summary(id)
            .await?;

        Ok(ProductWithRating {
            product,
            review_count,
            review_avg,
        })
    }

    /// Delete a product and all of its reviews. The review sweep tolerates
    /// zero matches; a product without reviews deletes cleanly.
    pub async fn delete(&self, id: &str) -> Result<Product, ProductError> {
        let product = self
            .products
            .delete_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(PRODUCT_NOT_FOUND))?;

        let swept = self.reviews.delete_by_product(id).await?;
        debug!("Deleted product {} and {} reviews", product.id, swept);

        Ok(product)
    }
}
