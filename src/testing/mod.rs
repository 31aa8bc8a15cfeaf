//! In-memory store implementations for tests. They mirror the MongoDB
//! stores' observable behavior: id format is enforced on insert the same way
//! the document mapping does, finds are insertion-ordered, deletes return the
//! removed document, and bulk deletes report counts.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Product, Review, User};
use crate::database::repository::{parse_oid, ProductStore, ReviewStore, UserStore};

#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn is_empty(&self) -> bool {
        self.reviews.lock().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn insert(&self, review: Review) -> Result<Review, DatabaseError> {
        // Same format check the Mongo document mapping performs
        parse_oid(&review.id)?;
        parse_oid(&review.product_id)?;
        self.reviews.lock().unwrap().push(review.clone());
        Ok(review)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Review>, DatabaseError> {
        let mut reviews = self.reviews.lock().unwrap();
        let position = reviews.iter().position(|r| r.id == id);
        Ok(position.map(|i| reviews.remove(i)))
    }

    async fn delete_by_product(&self, product_id: &str) -> Result<u64, DatabaseError> {
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.product_id != product_id);
        Ok((before - reviews.len()) as u64)
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Review>, DatabaseError> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews.iter().filter(|r| r.product_id == product_id).cloned().collect())
    }
}

#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: Product) -> Result<Product, DatabaseError> {
        parse_oid(&product.id)?;
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, DatabaseError> {
        let mut products = self.products.lock().unwrap();
        let position = products.iter().position(|p| p.id == id);
        Ok(position.map(|i| products.remove(i)))
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        parse_oid(&user.id)?;
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}
