use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AUTHOR_NAME_LONG, AUTHOR_NAME_MAX, AUTHOR_NAME_MIN, DESCRIPTION_LONG, DESCRIPTION_MAX,
    DESCRIPTION_MIN, RATING_COUNT, RATING_MAX, RATING_MIN,
};

/// A persisted product review. Field names match the wire/store format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// 24-char hex ObjectId, generated at creation
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub rating: i32,
    /// Referenced product; never checked for existence at write time
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for POST /review/create, prior to validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewDto {
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub rating: i32,
    #[serde(rename = "productId")]
    pub product_id: String,
}

type Rule = fn(&CreateReviewDto) -> Option<&'static str>;

fn author_name_in_bounds(dto: &CreateReviewDto) -> Option<&'static str> {
    let len = dto.author_name.chars().count();
    (len < AUTHOR_NAME_MIN || len > AUTHOR_NAME_MAX).then_some(AUTHOR_NAME_LONG)
}

fn description_in_bounds(dto: &CreateReviewDto) -> Option<&'static str> {
    let len = dto.description.chars().count();
    (len < DESCRIPTION_MIN || len > DESCRIPTION_MAX).then_some(DESCRIPTION_LONG)
}

fn rating_in_bounds(dto: &CreateReviewDto) -> Option<&'static str> {
    (dto.rating < RATING_MIN || dto.rating > RATING_MAX).then_some(RATING_COUNT)
}

// Declaration order fixes the order of messages in the 400 body.
const RULES: [Rule; 3] = [author_name_in_bounds, description_in_bounds, rating_in_bounds];

impl CreateReviewDto {
    /// Evaluate every rule independently and collect all violations,
    /// first-declared-field first.
    pub fn validate(&self) -> Vec<&'static str> {
        RULES.iter().filter_map(|rule| rule(self)).collect()
    }
}
