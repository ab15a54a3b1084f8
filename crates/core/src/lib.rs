//! `soiree-core`: shared building blocks for the planning-tools backend.
//!
//! This crate contains **pure** primitives (no IO): table keys, stored items,
//! the injectable clock and the domain error model.

pub mod clock;
pub mod error;
pub mod item;
pub mod key;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use item::{Attributes, Item};
pub use key::{PartitionKey, SortKey, Year};
