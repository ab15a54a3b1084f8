//! Rentable-item inventory domain module.
//!
//! Pure record mapping for the fixed `INVENTORY` partition, plus the static
//! rental price list (no IO).

pub mod item;
pub mod pricing;

pub use item::{inventory_partition, InventoryItemView, InventoryRecord, INVENTORY_PARTITION};
pub use pricing::{rental_prices, RentalPrice};
