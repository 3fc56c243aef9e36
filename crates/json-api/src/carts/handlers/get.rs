//! Get Cart Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prato_app::{
    auth::models::Role,
    domain::carts::models::{CartView, CartViewLine},
};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The cart lines, resolved against the live catalog
    pub lines: Vec<CartLineResponse>,

    /// Sum of all line totals, in minor currency units
    pub total: u64,

    /// Sum of all line quantities
    pub item_count: u32,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the product
    pub product_uuid: Uuid,

    /// The product name
    pub name: String,

    /// The current unit price, in minor currency units
    pub unit_price: u64,

    /// Quantity of the product in the cart
    pub quantity: u32,

    /// Unit price multiplied by quantity
    pub line_total: u64,
}

impl From<CartView> for CartResponse {
    fn from(cart: CartView) -> Self {
        let item_count = cart.item_count();

        CartResponse {
            lines: cart.lines.into_iter().map(CartLineResponse::from).collect(),
            total: cart.total,
            item_count,
        }
    }
}

impl From<CartViewLine> for CartLineResponse {
    fn from(line: CartViewLine) -> Self {
        Self {
            product_uuid: line.product.uuid.into(),
            name: line.product.name,
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

/// Get Cart Handler
///
/// Returns the authenticated customer's cart, priced at current catalog
/// values.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _principal = depot.principal_with_role_or_403(Role::Customer)?;
    let session = depot.session_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(session, Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use prato_app::domain::{
        carts::{CartsServiceError, MockCartsService, models::CartView},
        catalog::models::ProductUuid,
    };

    use crate::test_helpers::{carts_service, test_customer, test_restaurant};

    use super::{super::tests::*, *};

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, test_customer(), Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_priced_cart() -> TestResult {
        let uuid = ProductUuid::new();
        let view = make_cart_view(uuid, 12_50, 2);

        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .withf(|session, _| *session == TEST_SESSION_UUID)
            .return_once(move |_, _| Ok(view));

        repo.expect_add_item().never();
        repo.expect_remove_item().never();
        repo.expect_item_count().never();
        repo.expect_clear().never();

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.lines.len(), 1, "expected one cart line");
        assert_eq!(response.lines[0].product_uuid, uuid.into_uuid());
        assert_eq!(response.lines[0].line_total, 25_00);
        assert_eq!(response.total, 25_00);
        assert_eq!(response.item_count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart_returns_empty_lines() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_get_cart().once().return_once(|_, _| {
            Ok(CartView {
                lines: vec![],
                total: 0,
            })
        });

        repo.expect_add_item().never();
        repo.expect_remove_item().never();
        repo.expect_item_count().never();
        repo.expect_clear().never();

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.lines.is_empty(), "expected no cart lines");
        assert_eq!(response.total, 0);
        assert_eq!(response.item_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_vanished_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .return_once(move |_, _| Err(CartsServiceError::ProductNotFound(uuid)));

        repo.expect_add_item().never();
        repo.expect_remove_item().never();
        repo.expect_item_count().never();
        repo.expect_clear().never();

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_as_restaurant_returns_403() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_get_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();
        repo.expect_item_count().never();
        repo.expect_clear().never();

        let res = TestClient::get("http://example.com/cart")
            .send(&carts_service(
                repo,
                test_restaurant(),
                Router::with_path("cart").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
