use crate::error::OrderError;
use crate::model::customer::{Customer, CustomerId};
use crate::source::CustomerSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(pub String);

impl OrderNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

impl From<String> for OrderNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub number: String,
    /// Identifier of the customer the order belongs to.
    pub customer: String,
}

impl OrderCreate {
    fn into_parts(self) -> Result<(OrderNumber, CustomerId), OrderError> {
        if self.number.is_empty() {
            return Err(OrderError::MissingNumber);
        }
        if self.customer.is_empty() {
            return Err(OrderError::MissingCustomer);
        }
        Ok((OrderNumber(self.number), CustomerId(self.customer)))
    }
}

/// How an [`Order`] obtains its customer.
enum CustomerResolver {
    /// The order owns its customer outright.
    Owned(Arc<Customer>),
    /// The customer is looked up through a [`CustomerSource`] on every access.
    Lookup(Arc<dyn CustomerSource>),
}

impl fmt::Debug for CustomerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(customer) => f.debug_tuple("Owned").field(customer).finish(),
            Self::Lookup(_) => f.write_str("Lookup"),
        }
    }
}

/// Represents a customer order.
///
/// An order holds its number and the id of its customer, plus the strategy
/// used to resolve that id into a [`Customer`]: built with [`Order::owned`]
/// it carries its own instance, built with [`Order::with_source`] it defers
/// to the source on every [`Order::customer`] call.
#[derive(Debug)]
pub struct Order {
    number: OrderNumber,
    customer_id: CustomerId,
    resolver: CustomerResolver,
}

impl Order {
    /// Creates an order that owns its customer outright.
    pub fn owned(params: OrderCreate) -> Result<Self, OrderError> {
        let (number, customer_id) = params.into_parts()?;
        let customer = Arc::new(Customer::new(customer_id.clone()));
        Ok(Self {
            number,
            customer_id,
            resolver: CustomerResolver::Owned(customer),
        })
    }

    /// Creates an order that resolves its customer through `source`.
    ///
    /// Resolution is lazy: nothing is looked up here, so an order may be
    /// created before its customer is registered.
    pub fn with_source(
        params: OrderCreate,
        source: Arc<dyn CustomerSource>,
    ) -> Result<Self, OrderError> {
        let (number, customer_id) = params.into_parts()?;
        Ok(Self {
            number,
            customer_id,
            resolver: CustomerResolver::Lookup(source),
        })
    }

    pub fn number(&self) -> &OrderNumber {
        &self.number
    }

    /// Identifier of the customer this order belongs to.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Resolves the customer through the configured strategy.
    ///
    /// Owned orders always resolve. Lookup orders consult their source on
    /// every call, without caching, and surface `None` when the customer is
    /// not registered.
    pub fn customer(&self) -> Option<Arc<Customer>> {
        match &self.resolver {
            CustomerResolver::Owned(customer) => Some(Arc::clone(customer)),
            CustomerResolver::Lookup(source) => source.find(&self.customer_id),
        }
    }
}
