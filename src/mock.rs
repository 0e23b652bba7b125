//! # Mock Customer Source
//!
//! [`MockCustomerSource`] implements the same [`CustomerSource`] seam as the
//! real registry but answers from a queue of expectations instead of a
//! store. It lets tests drive order resolution deterministically, including
//! absent results and hit-then-miss sequences that are awkward to stage with
//! a real registry.
//!
//! # Example
//! ```rust
//! use customer_registry::mock::MockCustomerSource;
//! use customer_registry::{CustomerRegistry, Order, OrderCreate};
//! use std::sync::Arc;
//!
//! let registry = CustomerRegistry::new();
//! let alice = registry.register("alice");
//!
//! let mut mock = MockCustomerSource::new();
//! mock.expect_find("alice").return_some(Arc::clone(&alice));
//!
//! let order = Order::with_source(
//!     OrderCreate {
//!         number: "1001".into(),
//!         customer: "alice".into(),
//!     },
//!     mock.source(),
//! )
//! .unwrap();
//!
//! assert!(Arc::ptr_eq(&order.customer().unwrap(), &alice));
//! mock.verify(); // Ensures all expectations were met
//! ```

use crate::model::{Customer, CustomerId};
use crate::source::CustomerSource;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A single expected `find` call and its canned response.
struct FindExpectation {
    id: CustomerId,
    response: Option<Arc<Customer>>,
}

/// A [`CustomerSource`] double with expectation tracking.
///
/// Expectations are consumed in FIFO order; a `find` with no expectation
/// left, or against the wrong id, panics the test.
#[derive(Clone, Default)]
pub struct MockCustomerSource {
    expectations: Arc<Mutex<VecDeque<FindExpectation>>>,
}

impl MockCustomerSource {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a source handle for wiring into an order. The handle shares
    /// this mock's expectation queue.
    pub fn source(&self) -> Arc<dyn CustomerSource> {
        Arc::new(self.clone())
    }

    /// Expects a `find` for `id`.
    pub fn expect_find(&mut self, id: impl Into<CustomerId>) -> FindExpectationBuilder {
        FindExpectationBuilder {
            id: id.into(),
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                expectations.len()
            );
        }
    }
}

impl CustomerSource for MockCustomerSource {
    fn find(&self, id: &CustomerId) -> Option<Arc<Customer>> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(expectation) => {
                assert_eq!(&expectation.id, id, "find expectation mismatch");
                expectation.response
            }
            None => panic!("Unexpected find for {id}: no expectations left"),
        }
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder {
    id: CustomerId,
    expectations: Arc<Mutex<VecDeque<FindExpectation>>>,
}

impl FindExpectationBuilder {
    /// Sets the expectation to resolve to `customer`.
    pub fn return_some(self, customer: Arc<Customer>) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(FindExpectation {
            id: self.id,
            response: Some(customer),
        });
    }

    /// Sets the expectation to resolve to nothing.
    pub fn return_none(self) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(FindExpectation {
            id: self.id,
            response: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_expectations_in_order() {
        let customer = Arc::new(Customer::new(CustomerId::from("1")));
        let mut mock = MockCustomerSource::new();
        mock.expect_find("1").return_some(Arc::clone(&customer));
        mock.expect_find("1").return_none();

        let source = mock.source();
        let id = CustomerId::from("1");
        assert!(Arc::ptr_eq(&source.find(&id).unwrap(), &customer));
        assert!(source.find(&id).is_none());
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_panics_on_unmet_expectations() {
        let mut mock = MockCustomerSource::new();
        mock.expect_find("1").return_none();
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected find")]
    fn find_without_expectation_panics() {
        let mock = MockCustomerSource::new();
        mock.source().find(&CustomerId::from("1"));
    }

    #[test]
    #[should_panic(expected = "find expectation mismatch")]
    fn find_against_the_wrong_id_panics() {
        let mut mock = MockCustomerSource::new();
        mock.expect_find("1").return_none();
        mock.source().find(&CustomerId::from("2"));
    }
}
