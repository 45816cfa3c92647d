//! Search over the order collection.
//!
//! Kept as a pure function over a slice so the store actor and the tests
//! share one implementation; the actor clones the matches into the reply.

use crate::model::Order;

/// Case-insensitive substring match against id and customer, plus a direct
/// substring match against the phone. An empty term matches everything.
/// Relative order of the input is preserved.
pub fn search<'a>(orders: &'a [Order], term: &str) -> Vec<&'a Order> {
    if term.is_empty() {
        return orders.iter().collect();
    }
    let needle = term.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            order.id().to_lowercase().contains(&needle)
                || order.customer().to_lowercase().contains(&needle)
                || order.phone().contains(term)
        })
        .collect()
}
