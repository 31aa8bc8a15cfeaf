use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in minor currency units
    pub price: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
}

/// Product read model with the lazily computed review aggregate attached.
/// The aggregate is never stored; it is recomputed from the review
/// collection on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithRating {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "reviewCount")]
    pub review_count: usize,
    /// Mean of all ratings for this product, None when it has no reviews
    #[serde(rename = "reviewAvg")]
    pub review_avg: Option<f64>,
}
