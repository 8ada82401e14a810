//! Inventory session service.
//!
//! # Responsibility
//! - Own the session's `Inventory` together with its `InventoryStore`.
//! - Provide load/save entry points that move whole snapshots.
//!
//! # Invariants
//! - A failed load leaves the current inventory untouched.
//! - Save writes records in insertion order.
//! - The service never prompts; confirmation gates belong to the caller.

use crate::repo::inventory_repo::Inventory;
use crate::storage::{InventoryStore, StorageResult};
use log::{info, warn};
use std::path::Path;

/// Use-case wrapper for one inventory session.
pub struct InventoryService<S: InventoryStore> {
    inventory: Inventory,
    store: S,
}

impl<S: InventoryStore> InventoryService<S> {
    /// Creates a service with an empty inventory.
    pub fn new(store: S) -> Self {
        Self {
            inventory: Inventory::new(),
            store,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Replaces the inventory with the snapshot stored at `path`.
    ///
    /// Returns the number of records installed.
    ///
    /// # Errors
    /// - Returns the store's I/O error unchanged; the inventory is not modified.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> StorageResult<usize> {
        let path = path.as_ref();
        let games = match self.store.load(path) {
            Ok(games) => games,
            Err(err) => {
                warn!(
                    "event=inventory_load module=service status=error not_found={} error={}",
                    err.is_not_found(),
                    err
                );
                return Err(err);
            }
        };

        let count = games.len();
        let replaced = self.inventory.len();
        self.inventory.replace_all(games);
        info!(
            "event=inventory_load module=service status=ok records={count} replaced={replaced}"
        );
        Ok(count)
    }

    /// Writes the current inventory to `path`.
    ///
    /// Returns the number of records written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> StorageResult<usize> {
        let games = self.inventory.get_all();
        if let Err(err) = self.store.save(path.as_ref(), &games) {
            warn!("event=inventory_save module=service status=error error={err}");
            return Err(err);
        }

        info!(
            "event=inventory_save module=service status=ok records={}",
            games.len()
        );
        Ok(games.len())
    }
}
