use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for customers. The key is opaque; no format is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered customer.
///
/// A customer carries identity and nothing else. Instances are minted by
/// [`CustomerRegistry::register`](crate::registry::CustomerRegistry::register)
/// or owned directly by an [`Order`](crate::model::Order), and are shared by
/// reference from then on: the type implements neither `Clone` nor
/// `PartialEq`, so "the same customer" always means the same instance.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
}

impl Customer {
    pub(crate) fn new(id: CustomerId) -> Self {
        Self { id }
    }

    /// The identity this customer was registered under.
    pub fn id(&self) -> &CustomerId {
        &self.id
    }
}
