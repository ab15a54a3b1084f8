//! Infrastructure layer: table storage, stores, tool services, dispatch, config.

pub mod action_dispatcher;
pub mod config;
pub mod seed;
pub mod services;
pub mod stores;
pub mod table_store;
