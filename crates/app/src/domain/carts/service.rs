//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{Cart, CartItem},
    repository::CartsRepository,
};

/// Cart operations on top of a [`CartsRepository`].
///
/// Only `add_item` does work of its own: the item is validated before anything
/// is written. Everything else goes straight to the repository.
#[derive(Clone)]
pub struct CartsApplication {
    repository: Arc<dyn CartsRepository>,
}

impl CartsApplication {
    #[must_use]
    pub fn new(repository: Arc<dyn CartsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CartsService for CartsApplication {
    async fn create(&self) -> Result<Cart, CartsServiceError> {
        self.repository.create().await
    }

    async fn get(&self, cart_id: &str) -> Result<Cart, CartsServiceError> {
        self.repository.get(cart_id).await
    }

    async fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), CartsServiceError> {
        if let Err(error) = item.validate() {
            debug!(cart_id, item_id = %item.id, "rejected invalid cart item: {error}");

            return Err(error.into());
        }

        self.repository.add_item(cart_id, item).await
    }

    async fn remove_item(&self, cart_id: &str, item_id: &str) -> Result<(), CartsServiceError> {
        self.repository.remove_item(cart_id, item_id).await
    }

    async fn remove(&self, cart_id: &str) -> Result<(), CartsServiceError> {
        self.repository.remove(cart_id).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new, empty cart.
    async fn create(&self) -> Result<Cart, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get(&self, cart_id: &str) -> Result<Cart, CartsServiceError>;

    /// Add an item to the given cart, validating it first.
    async fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), CartsServiceError>;

    /// Remove every item with the given id from the cart.
    async fn remove_item(&self, cart_id: &str, item_id: &str) -> Result<(), CartsServiceError>;

    /// Removes the cart with the given id.
    async fn remove(&self, cart_id: &str) -> Result<(), CartsServiceError>;
}
