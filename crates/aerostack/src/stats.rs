//! Aggregate order statistics.

use serde::Serialize;

use crate::order::{Order, OrderStatus};

/// Counters backing the dashboard stat cards.
///
/// Always computed over the full, unfiltered order sequence, independent of
/// the active table filter. Cancelled orders count toward `total` but have no
/// surfaced counter of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    /// Count of all orders.
    pub total: usize,
    /// Count of orders currently in transit.
    pub in_transit: usize,
    /// Count of orders awaiting pickup.
    pub pending: usize,
    /// Count of delivered orders.
    pub delivered: usize,
}

impl OrderStats {
    /// Compute the counters in a single pass over the order sequence.
    #[must_use]
    pub fn collect<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total += 1;
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::InTransit => stats.in_transit += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => {}
            }
        }
        stats
    }
}
