//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prato_app::domain::orders::models::{Order, OrderLine};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The customer the order belongs to
    pub customer_uuid: Uuid,

    /// Current order status
    pub status: String,

    /// Order total in minor currency units, fixed at checkout
    pub total: u64,

    /// The order lines
    pub lines: Vec<OrderLineResponse>,

    /// The date and time the order was placed
    pub created_at: String,
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// The unique identifier of the order line
    pub uuid: Uuid,

    /// The product the line refers to
    pub product_uuid: Uuid,

    /// Quantity ordered
    pub quantity: u32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            customer_uuid: order.customer_uuid.into(),
            status: order.status.to_string(),
            total: order.total,
            lines: order.lines.into_iter().map(OrderLineResponse::from).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            uuid: line.uuid.into(),
            product_uuid: line.product_uuid.into(),
            quantity: line.quantity,
        }
    }
}

/// Get Order Handler
///
/// Returns one order with its lines. Customers can only fetch their own
/// orders; an order belonging to someone else reads as not found.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .get_order(&principal, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use prato_app::domain::orders::{
        MockOrdersService, OrdersServiceError, models::OrderUuid,
    };

    use crate::test_helpers::{orders_service, test_customer, test_restaurant};

    use super::{super::tests::make_order, *};

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(
            repo,
            test_customer(),
            Router::with_path("orders/{order}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, 25_00);

        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .withf(move |caller, o| *caller == test_customer() && *o == uuid)
            .return_once(move |_, _| Ok(order));

        repo.expect_checkout().never();
        repo.expect_list_orders().never();
        repo.expect_update_status().never();

        let response: OrderResponse =
            TestClient::get(format!("http://example.com/orders/{uuid}"))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.status, "placed");
        assert_eq!(response.total, 25_00);
        assert_eq!(response.lines.len(), 1, "expected one order line");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_404() -> TestResult {
        let uuid = OrderUuid::new();

        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        repo.expect_checkout().never();
        repo.expect_list_orders().never();
        repo.expect_update_status().never();

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_forwards_restaurant_principal() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, 25_00);

        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .withf(move |caller, o| *caller == test_restaurant() && *o == uuid)
            .return_once(move |_, _| Ok(order));

        repo.expect_checkout().never();
        repo.expect_list_orders().never();
        repo.expect_update_status().never();

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&orders_service(
                repo,
                test_restaurant(),
                Router::with_path("orders/{order}").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_get_order().never();
        repo.expect_checkout().never();
        repo.expect_list_orders().never();
        repo.expect_update_status().never();

        let res = TestClient::get("http://example.com/orders/123")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
