//! Cart Models

use rustc_hash::FxHashMap;

use crate::{domain::catalog::models::{Product, ProductUuid}, uuids::TypedUuid};

/// Marker type for session identifiers.
#[derive(Debug)]
pub struct Session;

/// Session UUID — the key a cart lives under in the session store. One cart
/// per principal; the principal's UUID doubles as its session key.
pub type SessionUuid = TypedUuid<Session>;

/// One product selection in a cart.
///
/// No price or name snapshot is kept here: the cart view and checkout both
/// re-price against the live catalog, so the only state worth carrying is
/// the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// The ephemeral pre-purchase selection for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: FxHashMap<ProductUuid, u32>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities, for UI badges.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().sum()
    }

    /// Add `quantity` of a product, merging into an existing line.
    pub fn add(&mut self, product: ProductUuid, quantity: u32) {
        *self.lines.entry(product).or_insert(0) += quantity;
    }

    /// Remove a product's line entirely. Idempotent: removing an absent
    /// product is a no-op, never an error.
    pub fn remove(&mut self, product: ProductUuid) {
        self.lines.remove(&product);
    }

    /// Lines in a stable order (by product UUID, which is time-ordered).
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self
            .lines
            .iter()
            .map(|(&product_uuid, &quantity)| CartLine {
                product_uuid,
                quantity,
            })
            .collect();

        lines.sort_by_key(|line| line.product_uuid);

        lines
    }
}

/// A cart line resolved against the live catalog for display.
#[derive(Debug, Clone)]
pub struct CartViewLine {
    pub product: Product,
    pub quantity: u32,
    /// Live catalog price × quantity. Display only; the authoritative price
    /// read happens inside the checkout transaction.
    pub line_total: u64,
}

/// The cart paired with resolved products and live-priced totals.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartViewLine>,
    pub total: u64,
}

impl CartView {
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_same_product_merges_quantities() {
        let mut cart = Cart::new();
        let product = ProductUuid::new();

        cart.add(product, 1);
        cart.add(product, 2);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        let product = ProductUuid::new();

        cart.add(product, 1);
        cart.remove(product);
        cart.remove(product);

        assert!(cart.is_empty());
    }

    #[test]
    fn lines_are_sorted_by_product_uuid() {
        let mut cart = Cart::new();

        let first = ProductUuid::new();
        let second = ProductUuid::new();

        cart.add(second, 1);
        cart.add(first, 1);

        let lines = cart.lines();

        assert_eq!(lines[0].product_uuid, first.min(second));
        assert_eq!(lines[1].product_uuid, first.max(second));
    }
}
