//! # Customer Registry
//!
//! This module defines [`CustomerRegistry`], the create-or-fetch store for
//! [`Customer`] entities.
//!
//! # Architecture Note
//! The registry is the sole owner of every customer reached through it: the
//! store maps ids to `Arc<Customer>` and lookups hand out shares of the same
//! allocation, never copies. That is what makes "registering twice returns
//! the *same* customer" hold as pointer identity rather than mere value
//! equality.
//!
//! Handles are cheap to clone. Every clone shares the same backing store, so
//! a registry can be handed to each consumer that needs one and they all see
//! the same customers.

use crate::model::{Customer, CustomerId};
use crate::source::CustomerSource;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

type Store = HashMap<CustomerId, Arc<Customer>>;

/// An identity-keyed, create-or-fetch store for customers.
///
/// All operations are total: [`register`](CustomerRegistry::register) always
/// yields a customer, [`find`](CustomerRegistry::find) signals absence with
/// `None`, and [`reset`](CustomerRegistry::reset) simply empties the store.
/// The backing map sits behind a mutex so a registry shared across threads
/// stays consistent.
#[derive(Clone, Default)]
pub struct CustomerRegistry {
    customers: Arc<Mutex<Store>>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the customer registered under `id`, minting one first if the
    /// id is new.
    ///
    /// Registering the same id twice returns the identical instance, not an
    /// equal copy.
    pub fn register(&self, id: impl Into<CustomerId>) -> Arc<Customer> {
        let id = id.into();
        let mut customers = self.lock();

        if let Some(existing) = customers.get(&id) {
            debug!(%id, "Register hit");
            return Arc::clone(existing);
        }

        let customer = Arc::new(Customer::new(id.clone()));
        customers.insert(id.clone(), Arc::clone(&customer));
        info!(%id, size = customers.len(), "Registered");
        customer
    }

    /// Returns the customer registered under `id`, or `None`. No side
    /// effects.
    pub fn find(&self, id: &CustomerId) -> Option<Arc<Customer>> {
        let customers = self.lock();
        let customer = customers.get(id).map(Arc::clone);
        debug!(%id, found = customer.is_some(), "Find");
        customer
    }

    /// Discards every registered customer.
    ///
    /// Safe to call repeatedly; a reset registry behaves exactly like a new
    /// one, and ids registered afterwards get fresh instances.
    pub fn reset(&self) {
        let mut customers = self.lock();
        let dropped = customers.len();
        customers.clear();
        info!(dropped, "Reset");
    }

    /// Number of registered customers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A poisoned lock still guards a valid map; recover it so register
        // and find stay total.
        self.customers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CustomerSource for CustomerRegistry {
    fn find(&self, id: &CustomerId) -> Option<Arc<Customer>> {
        CustomerRegistry::find(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent() {
        let registry = CustomerRegistry::new();
        let first = registry.register("123");
        let second = registry.register("123");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_sets_the_customer_id() {
        let registry = CustomerRegistry::new();
        let customer = registry.register("123");
        assert_eq!(customer.id(), &CustomerId::from("123"));
    }

    #[test]
    fn reset_clears_the_store() {
        let registry = CustomerRegistry::new();
        registry.register("123");
        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.find(&CustomerId::from("123")).is_none());
    }
}
