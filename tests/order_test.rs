use customer_registry::mock::MockCustomerSource;
use customer_registry::{CustomerRegistry, Order, OrderCreate, OrderError};
use std::sync::Arc;

fn order_params(number: &str, customer: &str) -> OrderCreate {
    OrderCreate {
        number: number.to_string(),
        customer: customer.to_string(),
    }
}

/// End-to-end flow: register a customer, then build an order that resolves
/// it through the registry.
#[test]
fn order_resolves_customer_through_registry() {
    let registry = CustomerRegistry::new();
    let registered = registry.register("456");

    let order = Order::with_source(order_params("123", "456"), Arc::new(registry.clone()))
        .expect("valid order params");

    let customer = order.customer().expect("customer was registered");
    assert_eq!(customer.id().as_str(), "456");
    assert!(
        Arc::ptr_eq(&customer, &registered),
        "order should resolve the registry's instance"
    );
}

/// Direct-ownership variant: the order carries its own customer.
#[test]
fn owned_order_has_a_customer() {
    let order = Order::owned(order_params("123", "456")).expect("valid order params");

    let customer = order.customer().expect("owned orders always resolve");
    assert_eq!(customer.id().as_str(), "456");
    assert_eq!(order.number().as_str(), "123");
    assert_eq!(order.customer_id().as_str(), "456");
}

/// An owned customer is stable across accesses.
#[test]
fn owned_order_returns_the_same_instance_on_every_access() {
    let order = Order::owned(order_params("123", "456")).expect("valid order params");
    let first = order.customer().expect("owned orders always resolve");
    let second = order.customer().expect("owned orders always resolve");
    assert!(Arc::ptr_eq(&first, &second));
}

/// Lookup orders surface absence instead of failing.
#[test]
fn unregistered_customer_resolves_to_none() {
    let registry = CustomerRegistry::new();
    let order =
        Order::with_source(order_params("123", "456"), Arc::new(registry)).expect("valid order params");
    assert!(order.customer().is_none());
}

/// Lookup happens on every access: registrations and resets made after the
/// order was built are visible through it.
#[test]
fn lookup_consults_the_source_on_every_access() {
    let registry = CustomerRegistry::new();
    let order = Order::with_source(order_params("123", "456"), Arc::new(registry.clone()))
        .expect("valid order params");

    assert!(order.customer().is_none());

    let registered = registry.register("456");
    let resolved = order.customer().expect("customer is registered now");
    assert!(Arc::ptr_eq(&resolved, &registered));

    registry.reset();
    assert!(
        order.customer().is_none(),
        "reset should be visible through the order"
    );
}

#[test]
fn order_requires_a_number() {
    let result = Order::owned(order_params("", "456"));
    assert_eq!(result.unwrap_err(), OrderError::MissingNumber);
}

#[test]
fn order_requires_a_customer_id() {
    let registry = CustomerRegistry::new();
    let result = Order::with_source(order_params("123", ""), Arc::new(registry));
    assert_eq!(result.unwrap_err(), OrderError::MissingCustomer);
}

/// Order resolution driven by a mocked source, no registry on the lookup
/// path. The mock serves a hit and then a miss, and `verify` confirms both
/// expectations were consumed.
#[test]
fn order_resolves_through_a_mocked_source() {
    // A registry is only used to mint the customer the mock will serve.
    let minting = CustomerRegistry::new();
    let alice = minting.register("456");

    let mut mock = MockCustomerSource::new();
    mock.expect_find("456").return_some(Arc::clone(&alice));
    mock.expect_find("456").return_none();

    let order =
        Order::with_source(order_params("123", "456"), mock.source()).expect("valid order params");

    let resolved = order.customer().expect("first lookup should hit");
    assert!(Arc::ptr_eq(&resolved, &alice));
    assert!(order.customer().is_none(), "second lookup should miss");

    mock.verify();
}
