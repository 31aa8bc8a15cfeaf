/// Shared constants used across the codebase

// Client-visible messages for the review surface. These are part of the API
// contract and must not be reworded.
pub const AUTHOR_NAME_LONG: &str = "AUTHOR_NAME_LONG";
pub const DESCRIPTION_LONG: &str = "DESCRIPTION_LONG";
pub const RATING_COUNT: &str = "RATING_COUNT";
pub const ID_VALIDATION_ERROR: &str = "ID_VALIDATION_ERROR";
pub const REVIEW_NOT_FOUND: &str = "REVIEW_NOT_FOUND";
pub const PRODUCT_ID_NOT_FOUND: &str = "PRODUCT_ID_NOT_FOUND";
pub const PRODUCT_NOT_FOUND: &str = "PRODUCT_NOT_FOUND";
pub const UNAUTHORIZED: &str = "Unauthorized";

// Auth surface messages.
pub const ALREADY_REGISTERED: &str = "ALREADY_REGISTERED";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const WRONG_PASSWORD: &str = "WRONG_PASSWORD";

// Review field bounds, inclusive. Lengths are counted in characters, not bytes.
pub const AUTHOR_NAME_MIN: usize = 2;
pub const AUTHOR_NAME_MAX: usize = 30;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 1000;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;
