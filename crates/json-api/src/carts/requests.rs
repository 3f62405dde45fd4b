//! Cart request contracts

use salvo::Request;
use serde::Deserialize;

use cart_app::domain::carts::models::CartItem;

use crate::{
    carts::models::CartItemJson,
    requests::{RequestContract, RequestError, json_body, query, require},
};

/// Requests addressing a whole cart.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct CartIdRequest {
    pub cart_id: String,
}

impl RequestContract for CartIdRequest {
    fn decode(req: &mut Request, _body: Option<&[u8]>) -> Result<Self, RequestError> {
        query(req)
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("cart_id", &self.cart_id)
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct AddCartItemRequest {
    pub cart_id: String,
    pub item: CartItem,
}

impl RequestContract for AddCartItemRequest {
    const READS_BODY: bool = true;

    fn decode(req: &mut Request, body: Option<&[u8]>) -> Result<Self, RequestError> {
        let CartIdRequest { cart_id } = query(req)?;
        let item: CartItemJson = json_body(body)?;

        Ok(Self {
            cart_id,
            item: item.into(),
        })
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("cart_id", &self.cart_id)?;

        self.item.validate()?;

        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct RemoveCartItemRequest {
    pub cart_id: String,
    pub cart_item_id: String,
}

impl RequestContract for RemoveCartItemRequest {
    fn decode(req: &mut Request, _body: Option<&[u8]>) -> Result<Self, RequestError> {
        query(req)
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("cart_id", &self.cart_id)?;
        require("cart_item_id", &self.cart_item_id)
    }
}
