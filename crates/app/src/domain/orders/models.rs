//! Order Models

use jiff::Timestamp;

use crate::{
    auth::models::PrincipalUuid,
    domain::{catalog::models::ProductUuid, orders::status::OrderStatus},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// An immutable snapshot of a purchase: the total is fixed at checkout time
/// and never recomputed from the catalog. Only `status` moves afterwards.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer_uuid: PrincipalUuid,
    pub status: OrderStatus,
    pub total: u64,
    pub lines: Vec<OrderLine>,
    pub created_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLine>;

/// OrderLine Model
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub uuid: OrderLineUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}
