//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prato_app::auth::models::Role;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,

    /// Quantity to add; defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Cart Item Count Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemCountResponse {
    /// Total item count in the cart after the change
    pub item_count: u32,
}

/// Add Cart Item Handler
///
/// Adds a quantity of a product to the customer's cart, merging into any
/// existing line for the same product.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Requires the customer role"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemCountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _principal = depot.principal_with_role_or_403(Role::Customer)?;
    let session = depot.session_uuid_or_401()?;
    let request = json.into_inner();

    let product = request.product_uuid;

    let item_count = state
        .app
        .carts
        .add_item(session, product.into(), request.quantity)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/items/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartItemCountResponse { item_count }))
}
