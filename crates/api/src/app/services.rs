use std::sync::Arc;

use soiree_core::{Clock, SystemClock};
use soiree_infra::{
    action_dispatcher::ActionDispatcher,
    config::{AppConfig, StorageBackend},
    seed::BootstrapSeeder,
    stores::{InventoryStore, LedgerStore},
    table_store::{InMemoryTableStore, PostgresTableStore, TableStore, TableStoreError},
};

/// Type-erased table store shared by both typed stores.
pub type SharedStore = Arc<dyn TableStore>;

pub struct AppServices {
    pub dispatcher: ActionDispatcher<SharedStore>,
    pub seeder: BootstrapSeeder<SharedStore>,
}

impl AppServices {
    pub fn new(store: SharedStore, config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let ledger = LedgerStore::new(store.clone(), config.budget_table.clone());
        let inventory = InventoryStore::new(store, config.logistics_table.clone());

        Self {
            seeder: BootstrapSeeder::new(ledger.clone(), inventory.clone()),
            dispatcher: ActionDispatcher::new(ledger, inventory, clock),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(Arc::new(InMemoryTableStore::new()), config, clock)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.dispatcher.clock()
    }
}

/// Wire services for the configured backend.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, TableStoreError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match &config.backend {
        StorageBackend::InMemory => {
            tracing::warn!("DATABASE_URL not set; using in-memory tables");
            Ok(AppServices::in_memory(config, clock))
        }
        StorageBackend::Postgres { database_url } => {
            let store = PostgresTableStore::connect(database_url).await?;
            tracing::info!("connected to postgres table store");
            Ok(AppServices::new(Arc::new(store), config, clock))
        }
    }
}
