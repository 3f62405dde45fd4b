//! Delete Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::requests::CartIdRequest, errors::ApiError, extensions::*, state::State};

/// Delete Cart Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CartIdRequest = state.decoder.decode(req).await?;

    state.app.carts.remove(&request.cart_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
