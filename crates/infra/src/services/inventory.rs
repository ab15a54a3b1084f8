use tracing::{error, instrument};

use soiree_inventory::{rental_prices, InventoryItemView, RentalPrice};

use crate::stores::InventoryStore;
use crate::table_store::TableStore;

use super::{Reply, GET_INVENTORY_FAILED};

/// Lists rentable items on hand.
#[derive(Debug, Clone)]
pub struct InventoryQueryService<S> {
    inventory: InventoryStore<S>,
}

impl<S> InventoryQueryService<S>
where
    S: TableStore,
{
    pub fn new(inventory: InventoryStore<S>) -> Self {
        Self { inventory }
    }

    /// One `{name, quantity}` per stocked item; an empty list when nothing is
    /// stocked. A failed read yields the error message payload.
    #[instrument(skip(self))]
    pub async fn get_inventory(&self) -> Reply<Vec<InventoryItemView>> {
        match self.inventory.list().await {
            Ok(records) => Reply::Data(records.into_iter().map(InventoryItemView::from).collect()),
            Err(err) => {
                error!(error = %err, "failed to read inventory");
                Reply::message(GET_INVENTORY_FAILED)
            }
        }
    }
}

/// Serves the static rental price list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RentalPriceService;

impl RentalPriceService {
    pub fn get_rental_prices(&self) -> Vec<RentalPrice> {
        rental_prices()
    }
}
