//! # Customer Registry
//!
//! An in-memory, identity-keyed store for customer entities, plus an order
//! entity that resolves its customer either by owning it outright or by
//! looking it up on every access.
//!
//! ## 🚀 Core Components
//!
//! - **[registry]**: [`CustomerRegistry`], the create-or-fetch store. It is
//!   the sole minting authority for the customers it holds and hands out
//!   shared references, never copies.
//! - **[model]**: the [`Customer`] and [`Order`] entities and their typed
//!   identifiers.
//! - **[source]**: the [`CustomerSource`] seam orders resolve customers
//!   through.
//!
//! ## 📚 Quick Start
//!
//! ```rust
//! use customer_registry::{CustomerRegistry, Order, OrderCreate};
//! use std::sync::Arc;
//!
//! let registry = CustomerRegistry::new();
//! let alice = registry.register("alice");
//!
//! let order = Order::with_source(
//!     OrderCreate {
//!         number: "1001".into(),
//!         customer: "alice".into(),
//!     },
//!     Arc::new(registry.clone()),
//! )
//! .unwrap();
//!
//! let resolved = order.customer().expect("registered above");
//! assert!(Arc::ptr_eq(&resolved, &alice));
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`mock`] for a [`CustomerSource`] double that answers lookups from an
//! expectation queue instead of a real store.

pub mod error;
pub mod mock;
pub mod model;
pub mod registry;
pub mod source;
pub mod tracing;

// Re-export core types for convenience
pub use error::OrderError;
pub use model::{Customer, CustomerId, Order, OrderCreate, OrderNumber};
pub use registry::CustomerRegistry;
pub use source::CustomerSource;
