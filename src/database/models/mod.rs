pub mod product;
pub mod review;
pub mod user;

pub use product::{CreateProductDto, Product, ProductWithRating};
pub use review::{CreateReviewDto, Review};
pub use user::{AuthDto, User, UserProfile};
