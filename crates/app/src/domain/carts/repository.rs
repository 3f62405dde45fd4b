//! Carts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};
use tracing::debug;
use uuid::Uuid;

use crate::domain::carts::{
    errors::{CartsServiceError, expect_single_match},
    models::{Cart, CartItem},
};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const CREATE_CART_SQL: &str = include_str!("sql/create_cart.sql");
const DELETE_CART_SQL: &str = include_str!("sql/delete_cart.sql");
const ADD_CART_ITEM_SQL: &str = include_str!("sql/add_cart_item.sql");
const REMOVE_CART_ITEM_SQL: &str = include_str!("sql/remove_cart_item.sql");

/// Persistence of cart documents.
///
/// Updates must touch exactly one cart: no match is [`CartsServiceError::NotFound`],
/// more than one is [`CartsServiceError::Inconsistency`].
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Store a new empty cart under a freshly generated id.
    async fn create(&self) -> Result<Cart, CartsServiceError>;

    /// Fetch a cart with all of its items.
    async fn get(&self, cart_id: &str) -> Result<Cart, CartsServiceError>;

    /// Append an item to the end of the cart.
    async fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), CartsServiceError>;

    /// Drop every item with the given id from the cart.
    async fn remove_item(&self, cart_id: &str, item_id: &str) -> Result<(), CartsServiceError>;

    /// Mark the cart as removed.
    async fn remove(&self, cart_id: &str) -> Result<(), CartsServiceError>;
}

/// `PostgreSQL` backed carts, one row per cart with items in a JSONB array.
#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    pool: PgPool,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn create(&self) -> Result<Cart, CartsServiceError> {
        let id = Uuid::now_v7().to_string();

        let cart = query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(&id)
            .fetch_one(&self.pool)
            .await?;

        debug!(cart_id = %cart.id, "cart created");

        Ok(cart)
    }

    async fn get(&self, cart_id: &str) -> Result<Cart, CartsServiceError> {
        let cart = query_as::<Postgres, Cart>(GET_CART_SQL)
            .bind(cart_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(cart)
    }

    async fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), CartsServiceError> {
        let rows_affected = query(ADD_CART_ITEM_SQL)
            .bind(cart_id)
            .bind(Json(&item))
            .execute(&self.pool)
            .await?
            .rows_affected();

        expect_single_match(cart_id, rows_affected)?;

        debug!(cart_id, item_id = %item.id, "cart item added");

        Ok(())
    }

    async fn remove_item(&self, cart_id: &str, item_id: &str) -> Result<(), CartsServiceError> {
        let rows_affected = query(REMOVE_CART_ITEM_SQL)
            .bind(cart_id)
            .bind(item_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        expect_single_match(cart_id, rows_affected)?;

        debug!(cart_id, item_id, "cart item removed");

        Ok(())
    }

    async fn remove(&self, cart_id: &str) -> Result<(), CartsServiceError> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        expect_single_match(cart_id, rows_affected)?;

        debug!(cart_id, "cart removed");

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(items) = row.try_get::<Json<Vec<CartItem>>, _>("items")?;

        Ok(Self {
            id: row.try_get("id")?,
            items,
            transportation_fee: row.try_get("transportation_fee")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
