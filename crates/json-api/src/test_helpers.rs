//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use prato_app::{
    auth::{
        MockAuthService,
        models::{Principal, PrincipalUuid, Role},
    },
    context::AppContext,
    domain::{
        carts::MockCartsService, catalog::MockCatalogService, orders::MockOrdersService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: PrincipalUuid = PrincipalUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_RESTAURANT_UUID: PrincipalUuid =
    PrincipalUuid::from_uuid(Uuid::from_u128(1));

pub(crate) fn test_customer() -> Principal {
    Principal::new(TEST_CUSTOMER_UUID, Role::Customer)
}

pub(crate) fn test_restaurant() -> Principal {
    Principal::new(TEST_RESTAURANT_UUID, Role::Restaurant)
}

/// Middleware that stands in for bearer auth by injecting a fixed principal.
pub(crate) struct InjectPrincipal(pub(crate) Principal);

#[salvo::async_trait]
impl Handler for InjectPrincipal {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_principal(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_create_product().never();
    catalog.expect_update_product().never();
    catalog.expect_delete_product().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_get_cart().never();
    carts.expect_item_count().never();
    carts.expect_clear().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_get_order().never();
    orders.expect_list_orders().never();
    orders.expect_update_status().never();

    orders
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn state(
    catalog: MockCatalogService,
    carts: MockCartsService,
    orders: MockOrdersService,
    auth: MockAuthService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
        orders: Arc::new(orders),
        auth: Arc::new(auth),
    }))
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    state(
        catalog,
        strict_carts_mock(),
        strict_orders_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    state(
        strict_catalog_mock(),
        carts,
        strict_orders_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    state(
        strict_catalog_mock(),
        strict_carts_mock(),
        orders,
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(
        strict_catalog_mock(),
        strict_carts_mock(),
        strict_orders_mock(),
        auth,
    )
}

fn service_with(state: Arc<State>, principal: Principal, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(InjectPrincipal(principal))
            .push(route),
    )
}

pub(crate) fn catalog_service(
    catalog: MockCatalogService,
    principal: Principal,
    route: Router,
) -> Service {
    service_with(state_with_catalog(catalog), principal, route)
}

pub(crate) fn carts_service(
    carts: MockCartsService,
    principal: Principal,
    route: Router,
) -> Service {
    service_with(state_with_carts(carts), principal, route)
}

pub(crate) fn orders_service(
    orders: MockOrdersService,
    principal: Principal,
    route: Router,
) -> Service {
    service_with(state_with_orders(orders), principal, route)
}
