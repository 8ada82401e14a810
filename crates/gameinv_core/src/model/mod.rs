//! Inventory domain model.
//!
//! # Responsibility
//! - Define the record shape shared by repository, storage and CLI layers.
//!
//! # Invariants
//! - Every record is identified by a caller-assigned `GameId`.
//! - A record's `GameId` never changes after construction.

pub mod game;
