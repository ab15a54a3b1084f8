//! Tool services.
//!
//! Each service is stateless apart from the store it reads or writes. Store
//! failures never escape a service: they are logged and turned into a
//! human-readable `{"message": ...}` payload, which the caller receives in the
//! same envelope shape as a successful result.

pub mod budget;
pub mod inventory;

use serde::{Deserialize, Serialize};

pub use budget::{BudgetQueryService, PartyWriteService};
pub use inventory::{InventoryQueryService, RentalPriceService};

pub const GET_BUDGET_FAILED: &str = "Error getting budget";
pub const SAVE_PARTY_SUCCEEDED: &str = "Party saved successfully";
pub const SAVE_PARTY_FAILED: &str = "Error saving party";
pub const GET_INVENTORY_FAILED: &str = "Error getting inventory";

/// `{"message": ...}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Payload of a tool call: either the requested data or a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Data(T),
    Message(Message),
}

impl<T> Reply<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Reply::Message(Message::new(message))
    }
}
