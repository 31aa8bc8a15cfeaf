use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::database::manager::DatabaseError;
use crate::database::models::{Product, Review, User};

/// Persistence seam for the review collection. Handlers and services only see
/// this trait; the MongoDB implementation below maps to/from the store's
/// native representation explicitly.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert a fully validated review. Store-level failures are fatal.
    async fn insert(&self, review: Review) -> Result<Review, DatabaseError>;

    /// Delete one review by id; None when no document matched.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Review>, DatabaseError>;

    /// Delete every review for a product in a single delete-many call.
    /// Returns the number of documents removed.
    async fn delete_by_product(&self, product_id: &str) -> Result<u64, DatabaseError>;

    /// All reviews for a product in insertion order (`_id` ascending).
    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, DatabaseError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: Product) -> Result<Product, DatabaseError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError>;
    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, DatabaseError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
}

pub(crate) fn parse_oid(id: &str) -> Result<ObjectId, DatabaseError> {
    ObjectId::parse_str(id).map_err(|_| DatabaseError::MalformedId(id.to_string()))
}

// --- reviews -----------------------------------------------------------------

pub struct MongoReviewStore {
    collection: Collection<Document>,
}

impl MongoReviewStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>("reviews"),
        }
    }
}

fn review_to_document(review: &Review) -> Result<Document, DatabaseError> {
    Ok(doc! {
        "_id": parse_oid(&review.id)?,
        "authorName": &review.author_name,
        "title": &review.title,
        "description": &review.description,
        "rating": review.rating,
        "productId": parse_oid(&review.product_id)?,
        "createdAt": bson::DateTime::from_chrono(review.created_at),
    })
}

fn review_from_document(doc: &Document) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: doc.get_object_id("_id")?.to_hex(),
        author_name: doc.get_str("authorName")?.to_string(),
        title: doc.get_str("title")?.to_string(),
        description: doc.get_str("description")?.to_string(),
        rating: doc.get_i32("rating")?,
        product_id: doc.get_object_id("productId")?.to_hex(),
        created_at: doc.get_datetime("createdAt")?.to_chrono(),
    })
}

#[async_trait]
impl ReviewStore for MongoReviewStore {
    async fn insert(&self, review: Review) -> Result<Review, DatabaseError> {
        let document = review_to_document(&review)?;
        self.collection.insert_one(document, None).await?;
        Ok(review)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Review>, DatabaseError> {
        let filter = doc! { "_id": parse_oid(id)? };
        let deleted = self.collection.find_one_and_delete(filter, None).await?;
        deleted.as_ref().map(review_from_document).transpose()
    }

    async fn delete_by_product(&self, product_id: &str) -> Result<u64, DatabaseError> {
        let filter = doc! { "productId": parse_oid(product_id)? };
        let result = self.collection.delete_many(filter, None).await?;
        Ok(result.deleted_count)
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, DatabaseError> {
        let filter = doc! { "productId": parse_oid(product_id)? };
        // ObjectIds are monotonic per process, so _id order is insertion order
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let documents: Vec<Document> = self
            .collection
            .find(filter, options)
            .await?
            .try_collect()
            .await?;
        documents.iter().map(review_from_document).collect()
    }
}

// --- products ----------------------------------------------------------------

pub struct MongoProductStore {
    collection: Collection<Document>,
}

impl MongoProductStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>("products"),
        }
    }
}

fn product_to_document(product: &Product) -> Result<Document, DatabaseError> {
    Ok(doc! {
        "_id": parse_oid(&product.id)?,
        "title": &product.title,
        "description": &product.description,
        "price": product.price,
        "createdAt": bson::DateTime::from_chrono(product.created_at),
    })
}

fn product_from_document(doc: &Document) -> Result<Product, DatabaseError> {
    Ok(Product {
        id: doc.get_object_id("_id")?.to_hex(),
        title: doc.get_str("title")?.to_string(),
        description: doc.get_str("description")?.to_string(),
        price: doc.get_i64("price")?,
        created_at: doc.get_datetime("createdAt")?.to_chrono(),
    })
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn insert(&self, product: Product) -> Result<Product, DatabaseError> {
        let document = product_to_document(&product)?;
        self.collection.insert_one(document, None).await?;
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError> {
        let filter = doc! { "_id": parse_oid(id)? };
        let found = self.collection.find_one(filter, None).await?;
        found.as_ref().map(product_from_document).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError> {
        let filter = doc! { "_id": parse_oid(id)? };
        let deleted = self.collection.find_one_and_delete(filter, None).await?;
        deleted.as_ref().map(product_from_document).transpose()
    }
}

// --- users -------------------------------------------------------------------

pub struct MongoUserStore {
    collection: Collection<Document>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>("users"),
        }
    }
}

fn user_to_document(user: &User) -> Result<Document, DatabaseError> {
    Ok(doc! {
        "_id": parse_oid(&user.id)?,
        "email": &user.email,
        "passwordHash": &user.password_hash,
        "createdAt": bson::DateTime::from_chrono(user.created_at),
    })
}

fn user_from_document(doc: &Document) -> Result<User, DatabaseError> {
    Ok(User {
        id: doc.get_object_id("_id")?.to_hex(),
        email: doc.get_str("email")?.to_string(),
        password_hash: doc.get_str("passwordHash")?.to_string(),
        created_at: doc.get_datetime("createdAt")?.to_chrono(),
    })
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        let document = user_to_document(&user)?;
        self.collection.insert_one(document, None).await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let found = self.collection.find_one(doc! { "email": email }, None).await?;
        found.as_ref().map(user_from_document).transpose()
    }
}
