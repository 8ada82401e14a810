//! Core inventory logic for the game inventory manager.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::game::{parse_price, GameId, GameTitle};
pub use repo::inventory_repo::Inventory;
pub use rust_decimal::Decimal;
pub use service::inventory_service::InventoryService;
pub use storage::{CsvFileStore, InventoryStore, StorageError, StorageOp, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
