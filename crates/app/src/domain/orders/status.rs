//! Order status state machine.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Lifecycle of an order, advanced by the restaurant.
///
/// The only legal moves are `placed → preparing → out_for_delivery`; there
/// is no reverse or sideways transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
    Preparing,
    OutForDelivery,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
        }
    }

    /// The single status this one may advance to, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Placed => Some(Self::Preparing),
            Self::Preparing => Some(Self::OutForDelivery),
            Self::OutForDelivery => None,
        }
    }

    #[must_use]
    pub fn can_advance_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unrecognized order status: {0}")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "preparing" => Ok(Self::Preparing),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_round_trip_through_str() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
        ] {
            let parsed: OrderStatus = status.as_str().parse().expect("status should parse");

            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unrecognized_status_fails_to_parse() {
        assert!("delivered".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn only_forward_transitions_are_allowed() {
        assert!(OrderStatus::Placed.can_advance_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_advance_to(OrderStatus::OutForDelivery));

        // No skipping ahead.
        assert!(!OrderStatus::Placed.can_advance_to(OrderStatus::OutForDelivery));

        // No reverting.
        assert!(!OrderStatus::Preparing.can_advance_to(OrderStatus::Placed));
        assert!(!OrderStatus::OutForDelivery.can_advance_to(OrderStatus::Preparing));

        // No self-loops.
        assert!(!OrderStatus::Placed.can_advance_to(OrderStatus::Placed));
    }

    #[test]
    fn out_for_delivery_is_terminal() {
        assert_eq!(OrderStatus::OutForDelivery.next(), None);
    }
}
