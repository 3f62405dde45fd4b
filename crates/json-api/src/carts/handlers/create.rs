//! Create Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    carts::models::CartResponse, errors::ApiError, extensions::*, reply::JsonReply, state::State,
};

/// Create Cart Handler
///
/// Creates an empty cart and returns it.
#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<JsonReply<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state.app.carts.create().await?;

    res.add_header(LOCATION, format!("/cart?cart_id={}", cart.id), true)
        .or_500("failed to set location header")?;

    Ok(JsonReply::created(cart.into()))
}
