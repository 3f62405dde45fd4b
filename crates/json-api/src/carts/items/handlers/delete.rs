//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::requests::RemoveCartItemRequest, errors::ApiError, extensions::*, state::State,
};

/// Remove Cart Item Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: RemoveCartItemRequest = state.decoder.decode(req).await?;

    state
        .app
        .carts
        .remove_item(&request.cart_id, &request.cart_item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
