//! Order filtering.
//!
//! The dashboard narrows the order table by a free-text search and a status
//! selector. Both tests are pure and total: any search string is valid, and
//! filtering never reorders its input.

use crate::order::{Order, OrderStatus};

/// Status selector for the order table.
///
/// `All` is the neutral selector that admits every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Admit orders of every status.
    #[default]
    All,
    /// Admit only orders with the given status.
    Only(OrderStatus),
}

impl StatusFilter {
    /// All selector positions, in cycling order.
    pub const CYCLE: [Self; 5] = [
        Self::All,
        Self::Only(OrderStatus::Pending),
        Self::Only(OrderStatus::InTransit),
        Self::Only(OrderStatus::Delivered),
        Self::Only(OrderStatus::Cancelled),
    ];

    /// Whether an order status passes this selector.
    #[must_use]
    pub fn admits(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }

    /// The next selector position, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    /// The previous selector position, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(index + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Display label for the selector widget.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }
}

/// The live filter state: search text plus status selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderQuery {
    /// Free-text search, matched case-insensitively against the order id,
    /// customer name, and destination. Empty matches everything.
    pub search: String,
    /// Status selector.
    pub status: StatusFilter,
}

impl OrderQuery {
    /// Create a query.
    #[must_use]
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Whether an order passes both the search and the status test.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.matches_search(order) && self.status.admits(order.status)
    }

    fn matches_search(&self, order: &Order) -> bool {
        let needle = self.search.to_lowercase();
        order.id.to_lowercase().contains(&needle)
            || order.customer.to_lowercase().contains(&needle)
            || order.destination.to_lowercase().contains(&needle)
    }

    /// The matching subsequence of `orders`, in input order.
    #[must_use]
    pub fn filter<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}
