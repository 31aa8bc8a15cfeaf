pub mod auth;
pub mod object_id;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use object_id::object_id_guard;
