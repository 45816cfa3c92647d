//! The order entity and its intake DTO.
//!
//! [`Order`] keeps `items` and `total` private so the invariant
//! `total == sum(quantity * price)` cannot be broken from outside: the total
//! is computed once from the validated draft and only re-derived, never set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::OrderStatus;

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Why an intake payload was rejected before reaching the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("customer name is empty")]
    EmptyCustomer,
    #[error("phone is empty")]
    EmptyPhone,
    #[error("order has no items")]
    NoItems,
    #[error("item has an empty name")]
    EmptyItemName,
    #[error("item {0:?} has zero quantity")]
    ZeroQuantity(String),
    #[error("item {0:?} has a negative price")]
    NegativePrice(String),
}

/// An Order-shaped intake payload, as produced by the generator or a future
/// real order channel. Carries everything except the identifier, which is
/// assigned by the store's sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<LineItem>,
    pub notes: String,
    pub placed_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Rejects malformed payloads before insertion.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer.trim().is_empty() {
            return Err(ValidationError::EmptyCustomer);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }
        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(ValidationError::EmptyItemName);
            }
            if item.quantity == 0 {
                return Err(ValidationError::ZeroQuantity(item.name.clone()));
            }
            if item.price < 0.0 {
                return Err(ValidationError::NegativePrice(item.name.clone()));
            }
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// A single customer purchase tracked through fulfillment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer: String,
    phone: String,
    address: String,
    items: Vec<LineItem>,
    total: f64,
    status: OrderStatus,
    order_time: DateTime<Utc>,
    notes: String,
}

impl Order {
    /// Builds an order from a validated draft. Status starts at `NEW` and
    /// the total is computed from the items.
    pub fn from_draft(id: impl Into<String>, draft: OrderDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        let total = draft.total();
        Ok(Self {
            id: id.into(),
            customer: draft.customer,
            phone: draft.phone,
            address: draft.address,
            total,
            items: draft.items,
            status: OrderStatus::New,
            order_time: draft.placed_at,
            notes: draft.notes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn order_time(&self) -> DateTime<Utc> {
        self.order_time
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Status mutation is reserved to the store, which enforces the state
    /// machine before calling this.
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub(crate) fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }
}
