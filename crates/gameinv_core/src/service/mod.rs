//! Session-level use-case services.
//!
//! # Responsibility
//! - Pair the in-memory inventory with a storage backend for load/save.
//! - Keep the CLI decoupled from file format details.

pub mod inventory_service;
