//! Pure data structures: the [`Customer`] and [`Order`] entities and their
//! typed identifiers.

pub mod customer;
pub mod order;

pub use customer::*;
pub use order::*;
