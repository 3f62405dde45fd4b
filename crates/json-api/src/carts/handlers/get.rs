//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{models::CartResponse, requests::CartIdRequest},
    errors::ApiError,
    extensions::*,
    reply::JsonReply,
    state::State,
};

/// Get Cart Handler
///
/// Returns the cart named by the `cart_id` query parameter.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonReply<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CartIdRequest = state.decoder.decode(req).await?;

    let cart = state.app.carts.get(&request.cart_id).await?;

    Ok(JsonReply::ok(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        carts::models::CartItemJson,
        errors::ErrorBody,
        test_helpers::{carts_service, make_cart, make_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        let mut cart = make_cart("cart-1");
        cart.items.push(make_item("sku-1"));

        carts
            .expect_get()
            .once()
            .withf(|cart_id| cart_id == "cart-1")
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::get("http://example.com/cart?cart_id=cart-1")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, "cart-1");
        assert_eq!(body.items, vec![CartItemJson::from(make_item("sku-1"))]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_id_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get().never();

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            ErrorBody {
                code: 2,
                reason: "invalid request: cart_id cannot be empty".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/cart?cart_id=nope")
            .send(&make_service(carts))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.code, 2);
        assert_eq!(body.reason, "cart not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_failure_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(sqlx::Error::PoolClosed)));

        let mut res = TestClient::get("http://example.com/cart?cart_id=cart-1")
            .send(&make_service(carts))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.code, 1);
        assert_eq!(body.reason, "failed to process request: storage error");

        Ok(())
    }
}
