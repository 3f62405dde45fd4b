//! Cart JSON shapes

use serde::{Deserialize, Serialize};

use cart_app::domain::carts::models::{Cart, CartItem};

/// Cart Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CartResponse {
    /// Cart ID
    pub id: String,

    /// Items in the order they were added
    pub items: Vec<CartItemJson>,

    /// Transportation fee
    pub transportation_fee: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            items: cart.items.into_iter().map(CartItemJson::from).collect(),
            transportation_fee: cart.transportation_fee,
        }
    }
}

/// A cart item as sent and received over the wire.
///
/// Absent fields decode as empty or zero so item validation can name them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CartItemJson {
    /// Discount taken off the price
    pub discount: f64,

    /// Item ID, chosen by the client
    pub id: String,

    /// Display name
    pub name: String,

    /// Price before discount
    pub price: f64,

    /// Quantity
    pub quantity: u32,
}

impl From<CartItem> for CartItemJson {
    fn from(item: CartItem) -> Self {
        Self {
            discount: item.discount,
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<CartItemJson> for CartItem {
    fn from(item: CartItemJson) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            discount: item.discount,
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{make_cart, make_item};

    use super::*;

    #[test]
    fn cart_serializes_without_timestamps() -> TestResult {
        let mut cart = make_cart("cart-1");
        cart.items.push(make_item("sku-1"));
        cart.transportation_fee = 4.5;

        let value = serde_json::to_value(CartResponse::from(cart))?;

        assert_eq!(
            value,
            json!({
                "id": "cart-1",
                "items": [{
                    "discount": 2.0,
                    "id": "sku-1",
                    "name": "Widget",
                    "price": 10.0,
                    "quantity": 1,
                }],
                "transportation_fee": 4.5,
            })
        );

        Ok(())
    }

    #[test]
    fn empty_cart_serializes_empty_items() -> TestResult {
        let value = serde_json::to_value(CartResponse::from(make_cart("cart-1")))?;

        assert_eq!(value.get("items"), Some(&Value::Array(Vec::new())));

        Ok(())
    }

    #[test]
    fn missing_item_fields_default() -> TestResult {
        let item: CartItemJson = serde_json::from_value(json!({ "id": "sku-1" }))?;

        assert_eq!(
            item,
            CartItemJson {
                id: "sku-1".to_string(),
                ..CartItemJson::default()
            }
        );

        Ok(())
    }
}
