//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::domain::carts::{CartsApplication, PgCartsRepository};

use super::db::TestDb;

/// A carts application wired to its own isolated database.
pub struct TestContext {
    pub db: TestDb,
    pub carts: CartsApplication,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let repository = PgCartsRepository::new(db.pool().clone());

        Self {
            carts: CartsApplication::new(Arc::new(repository)),
            db,
        }
    }
}
