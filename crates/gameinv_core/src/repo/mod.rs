//! Repository layer over the in-memory inventory.
//!
//! # Responsibility
//! - Own the authoritative, ordered set of game titles for one session.
//! - Report duplicate and not-found outcomes as plain `bool` results.
//!
//! # Invariants
//! - `add` never admits a second record with an existing `GameId`.
//! - Insertion order is preserved for listing and saving.

pub mod inventory_repo;
