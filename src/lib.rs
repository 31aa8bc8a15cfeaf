use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod testing;
pub mod types;

use database::{
    DatabaseError, DatabaseManager, MongoProductStore, MongoReviewStore, MongoUserStore,
    ProductStore, ReviewStore, UserStore,
};
use middleware::{jwt_auth_middleware, object_id_guard};

/// Store handles shared by every handler. Stores are the only cross-request
/// state; services are constructed per call.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn ReviewStore>,
    pub products: Arc<dyn ProductStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Wire the state against the configured MongoDB database
    pub async fn from_mongo() -> Result<Self, DatabaseError> {
        let db = DatabaseManager::database().await?;
        Ok(Self {
            reviews: Arc::new(MongoReviewStore::new(&db)),
            products: Arc::new(MongoProductStore::new(&db)),
            users: Arc::new(MongoUserStore::new(&db)),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(review_routes())
        .merge(product_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn review_routes() -> Router<AppState> {
    use handlers::{protected, public};

    // Creation is public; reads and deletes require a bearer token and
    // id-guarded path parameters. route_layer wraps inside-out, so the auth
    // guard added last runs first: auth -> id format -> handler.
    let protected_routes = Router::new()
        .route(
            "/review/byProduct/:productId",
            get(protected::reviews::by_product).delete(protected::reviews::delete_by_product),
        )
        .route("/review/:id", delete(protected::reviews::delete))
        .route_layer(axum::middleware::from_fn(object_id_guard))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware));

    Router::new()
        .route("/review/create", post(public::reviews::create))
        .merge(protected_routes)
}

fn product_routes() -> Router<AppState> {
    use handlers::{protected, public};

    let read = Router::new()
        .route("/product/:id", get(public::products::get))
        .route_layer(axum::middleware::from_fn(object_id_guard));

    let create = Router::new()
        .route("/product/create", post(protected::products::create))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware));

    let remove = Router::new()
        .route("/product/:id", delete(protected::products::delete))
        .route_layer(axum::middleware::from_fn(object_id_guard))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware));

    read.merge(create).merge(remove)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Catalog API",
        "version": version,
        "description": "Content/catalog backend - products, reviews, and JWT auth",
        "endpoints": {
            "auth": "/auth/register, /auth/login (public - token acquisition)",
            "reviews": "/review/create (public), /review/byProduct/:productId, /review/:id (protected)",
            "products": "/product/:id (public), /product/create, /product/:id (protected)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
