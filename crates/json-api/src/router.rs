//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{carts, healthcheck, observability, state::State};

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(carts_router())
}

pub(crate) fn carts_router() -> Router {
    Router::with_path("cart")
        .get(carts::get::handler)
        .post(carts::create::handler)
        .delete(carts::delete::handler)
        .push(
            Router::with_path("items")
                .post(carts::items::create::handler)
                .delete(carts::items::delete::handler),
        )
}
