//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use prato_app::domain::catalog::models::{Product, ProductUuid};

    pub(super) fn make_product(uuid: ProductUuid) -> Product {
        Product {
            uuid,
            name: "Classic Burger".to_string(),
            price: 25_90,
            category: "Burgers".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }
}
