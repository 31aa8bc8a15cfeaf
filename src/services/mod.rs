pub mod auth_service;
pub mod product_service;
pub mod review_service;

pub use auth_service::{AuthError, AuthService, TokenResponse};
pub use product_service::{ProductError, ProductService};
pub use review_service::{ReviewError, ReviewService};
