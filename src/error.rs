//! Error types for order construction.

use thiserror::Error;

/// Errors that can occur when building an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order number was missing or empty.
    #[error("Order validation error: order number is required")]
    MissingNumber,

    /// The customer id was missing or empty.
    #[error("Order validation error: customer id is required")]
    MissingCustomer,
}
