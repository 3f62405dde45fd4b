//! Test helpers.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use cart_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, CartItem},
    },
};

use crate::{requests::RequestDecoder, state::State};

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(
        AppContext::new(Arc::new(carts)),
        RequestDecoder::default(),
        Duration::from_secs(1),
    ))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn make_cart(id: &str) -> Cart {
    Cart {
        id: id.to_string(),
        items: Vec::new(),
        transportation_fee: 0.0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_item(id: &str) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: "Widget".to_string(),
        price: 10.0,
        discount: 2.0,
        quantity: 1,
    }
}
