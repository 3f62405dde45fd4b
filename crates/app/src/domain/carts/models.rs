//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    pub items: Vec<CartItem>,
    pub transportation_fee: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Cart {
    /// Sum of item prices and sum of item discounts, in that order.
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        self.items
            .iter()
            .fold((0.0, 0.0), |(price, discount), item| {
                (price + item.price, discount + item.discount)
            })
    }
}

/// CartItem Model
///
/// Items are embedded in the cart document, so this is also the stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price after the item discount.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.price - self.discount
    }
}
