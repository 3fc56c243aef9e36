//! Cart Handlers

pub(crate) mod add_item;
pub(crate) mod get;
pub(crate) mod remove_item;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use uuid::Uuid;

    use prato_app::domain::{
        carts::models::{CartView, CartViewLine, SessionUuid},
        catalog::models::{Product, ProductUuid},
    };

    pub(super) const TEST_SESSION_UUID: SessionUuid = SessionUuid::from_uuid(Uuid::nil());

    pub(super) fn make_product(uuid: ProductUuid, price: u64) -> Product {
        Product {
            uuid,
            name: "Classic Burger".to_string(),
            price,
            category: "Burgers".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    pub(super) fn make_cart_view(uuid: ProductUuid, price: u64, quantity: u32) -> CartView {
        let line_total = price * u64::from(quantity);

        CartView {
            lines: vec![CartViewLine {
                product: make_product(uuid, price),
                quantity,
                line_total,
            }],
            total: line_total,
        }
    }
}
