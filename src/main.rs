//! # Customer Registry Demo
//!
//! Wires a registry and a couple of orders together end to end:
//! 1. Register a customer (twice, to show create-or-fetch).
//! 2. Resolve an order through the registry.
//! 3. Resolve an order that owns its customer outright.

use customer_registry::tracing::setup_tracing;
use customer_registry::{CustomerRegistry, Order, OrderCreate, OrderError};
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> Result<(), OrderError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting customer registry demo");

    let registry = CustomerRegistry::new();

    {
        let _span = tracing::info_span!("customer_registration").entered();
        info!("Registering demo customer");
        let alice = registry.register("alice");
        let again = registry.register("alice");
        info!(
            customer = %alice.id(),
            shared = Arc::ptr_eq(&alice, &again),
            "Customer registered"
        );
    }

    let _span = tracing::info_span!("order_processing").entered();

    let order = Order::with_source(
        OrderCreate {
            number: "1001".into(),
            customer: "alice".into(),
        },
        Arc::new(registry.clone()),
    )?;

    match order.customer() {
        Some(customer) => {
            info!(order = %order.number(), customer = %customer.id(), "Order resolved its customer")
        }
        None => warn!(order = %order.number(), "Order customer is not registered"),
    }

    // A walk-in order carries its own customer instead of consulting the registry.
    let walk_in = Order::owned(OrderCreate {
        number: "1002".into(),
        customer: "bob".into(),
    })?;
    if let Some(customer) = walk_in.customer() {
        info!(order = %walk_in.number(), customer = %customer.id(), "Owned order resolved its customer");
    }

    registry.reset();
    info!(remaining = registry.len(), "Registry reset");

    info!("Demo completed successfully");
    Ok(())
}
