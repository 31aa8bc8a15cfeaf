use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::database::models::{CreateReviewDto, Review};
use crate::database::{DatabaseError, ReviewStore};
use crate::types::{PRODUCT_ID_NOT_FOUND, REVIEW_NOT_FOUND};

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<&'static str>),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] DatabaseError),
}

/// Orchestrates the review pipeline: validation, construction, persistence,
/// and the not-found mapping the endpoint layer relies on. Stateless; every
/// call is independent and store errors propagate without retries.
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new review. Violating payloads never reach the
    /// store. The product aggregate is not touched here; it is recomputed
    /// lazily on product reads.
    pub async fn create(&self, dto: CreateReviewDto) -> Result<Review, ReviewError> {
        let violations = dto.validate();
        if !violations.is_empty() {
            return Err(ReviewError::Validation(violations));
        }

        let review = Review {
            id: ObjectId::new().to_hex(),
            author_name: dto.author_name,
            title: dto.title,
            description: dto.description,
            rating: dto.rating,
            product_id: dto.product_id,
            created_at: Utc::now(),
        };

        Ok(self.store.insert(review).await?)
    }

    /// All reviews for a product in creation order. An empty result is
    /// reported as PRODUCT_ID_NOT_FOUND whether the product id is unknown or
    /// merely has no reviews; the two cases are deliberately conflated.
    pub async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.store.find_by_product(product_id).await?;
        if reviews.is_empty() {
            return Err(ReviewError::NotFound(PRODUCT_ID_NOT_FOUND));
        }
        Ok(reviews)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Review, ReviewError> {
        self.store
            .delete_by_id(id)
            .await?
            .ok_or(ReviewError::NotFound(REVIEW_NOT_FOUND))
    }

    /// Bulk delete; one store-level delete-many call. Zero matches is
    /// reported as PRODUCT_ID_NOT_FOUND (same conflation as reads).
    pub async fn delete_by_product(&self, product_id: &str) -> Result<u64, ReviewError> {
        let deleted = self.store.delete_by_product(product_id).await?;
        if deleted == 0 {
            return Err(ReviewError::NotFound(PRODUCT_ID_NOT_FOUND));
        }
        Ok(deleted)
    }

    /// Review count and mean rating for a product, mean None when it has no
    /// reviews. Backs the product read model; unlike `find_by_product` an
    /// empty set is not an error here, and only store failures propagate.
    pub async fn rating_summary(&self, product_id: &str) -> Result<(usize, Option<f64>), DatabaseError> {
        let reviews = self.store.find_by_product(product_id).await?;
        if reviews.is_empty() {
            return Ok((0, None));
        }
        let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
        Ok((reviews.len(), Some(sum as f64 / reviews.len() as f64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryReviewStore;
    use crate::types::{AUTHOR_NAME_LONG, RATING_COUNT};

    fn service() -> ReviewService {
        ReviewService::new(Arc::new(MemoryReviewStore::default()))
    }

    fn dto(product_id: &str, rating: i32) -> CreateReviewDto {
        CreateReviewDto {
            author_name: "name author".to_string(),
            title: "title review".to_string(),
            description: "description review".to_string(),
            rating,
            product_id: product_id.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let service = service();
        let review = service.create(dto("64f000000000000000000001", 5)).await.unwrap();
        assert_eq!(review.id.len(), 24);
        assert!(review.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(review.rating, 5);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_before_store() {
        let store = Arc::new(MemoryReviewStore::default());
        let service = ReviewService::new(store.clone());

        let mut bad = dto("64f000000000000000000001", 9);
        bad.author_name = "a".to_string();

        match service.create(bad).await {
            Err(ReviewError::Validation(messages)) => {
                assert_eq!(messages, vec![AUTHOR_NAME_LONG, RATING_COUNT]);
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.id)),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn find_by_product_preserves_insertion_order() {
        let service = service();
        let product = "64f000000000000000000001";
        let first = service.create(dto(product, 1)).await.unwrap();
        let second = service.create(dto(product, 5)).await.unwrap();

        let found = service.find_by_product(product).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, first.id);
        assert_eq!(found[1].id, second.id);
    }

    #[tokio::test]
    async fn empty_product_is_not_found() {
        let service = service();
        match service.find_by_product("64f000000000000000000009").await {
            Err(ReviewError::NotFound(msg)) => assert_eq!(msg, PRODUCT_ID_NOT_FOUND),
            other => panic!("expected not found, got {:?}", other.map(|v| v.len())),
        }
    }

    #[tokio::test]
    async fn delete_twice_reports_review_not_found() {
        let service = service();
        let review = service.create(dto("64f000000000000000000001", 3)).await.unwrap();

        let deleted = service.delete_by_id(&review.id).await.unwrap();
        assert_eq!(deleted.id, review.id);

        match service.delete_by_id(&review.id).await {
            Err(ReviewError::NotFound(msg)) => assert_eq!(msg, REVIEW_NOT_FOUND),
            other => panic!("expected not found, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test]
    async fn delete_by_product_removes_all_or_reports_not_found() {
        let service = service();
        let product = "64f000000000000000000001";
        service.create(dto(product, 4)).await.unwrap();
        service.create(dto(product, 2)).await.unwrap();

        assert_eq!(service.delete_by_product(product).await.unwrap(), 2);
        assert!(matches!(
            service.delete_by_product(product).await,
            Err(ReviewError::NotFound(PRODUCT_ID_NOT_FOUND))
        ));
    }

    #[tokio::test]
    async fn rating_summary_is_lazy_mean() {
        let service = service();
        let product = "64f000000000000000000001";
        assert_eq!(service.rating_summary(product).await.unwrap(), (0, None));

        service.create(dto(product, 4)).await.unwrap();
        service.create(dto(product, 5)).await.unwrap();
        assert_eq!(service.rating_summary(product).await.unwrap(), (2, Some(4.5)));
    }
}
