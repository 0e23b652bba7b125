//! The lookup seam orders resolve customers through.

use crate::model::{Customer, CustomerId};
use std::sync::Arc;

/// Read-only lookup for registered customers.
///
/// [`CustomerRegistry`](crate::registry::CustomerRegistry) implements this,
/// and so does the test double in [`mock`](crate::mock). Orders depend on
/// this seam rather than on a concrete store, which is what lets tests swap
/// the store out.
pub trait CustomerSource: Send + Sync {
    /// Returns the shared [`Customer`] for `id`, if one is registered.
    fn find(&self, id: &CustomerId) -> Option<Arc<Customer>>;
}
