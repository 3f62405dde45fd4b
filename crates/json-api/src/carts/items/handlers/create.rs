//! Add Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::requests::AddCartItemRequest, errors::ApiError, extensions::*, state::State};

/// Add Cart Item Handler
///
/// Appends the JSON item in the body to the cart named by `cart_id`.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let AddCartItemRequest { cart_id, item } = state.decoder.decode(req).await?;

    state.app.carts.add_item(&cart_id, item).await?;

    Ok(StatusCode::NO_CONTENT)
}
