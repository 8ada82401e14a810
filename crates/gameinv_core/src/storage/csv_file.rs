//! Comma-delimited file store.
//!
//! # Responsibility
//! - Read and write `id,title,manufacturer,listPrice,stock` lines.
//!
//! # Invariants
//! - No header line, no quoting. A comma inside a text field corrupts that line.
//! - Blank and malformed lines are dropped silently; only an aggregate skip
//!   count is logged.
//! - Every saved record ends with `\n`.

use super::{InventoryStore, StorageError, StorageOp, StorageResult};
use crate::model::game::{parse_price, GameTitle};
use log::{debug, error, info};
use std::path::Path;
use std::time::Instant;

/// Number of comma-separated fields in one record line.
pub const FIELDS_PER_RECORD: usize = 5;

/// File-backed store using the five-field line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileStore;

impl CsvFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl InventoryStore for CsvFileStore {
    fn load(&self, path: &Path) -> StorageResult<Vec<GameTitle>> {
        let started_at = Instant::now();
        let text = std::fs::read_to_string(path).map_err(|err| {
            error!(
                "event=store_load module=storage status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            StorageError::io(StorageOp::Load, path, err)
        })?;

        let games = parse_records(&text);
        info!(
            "event=store_load module=storage status=ok records={} duration_ms={}",
            games.len(),
            started_at.elapsed().as_millis()
        );
        Ok(games)
    }

    fn save(&self, path: &Path, games: &[GameTitle]) -> StorageResult<()> {
        let started_at = Instant::now();
        std::fs::write(path, format_records(games)).map_err(|err| {
            error!(
                "event=store_save module=storage status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            StorageError::io(StorageOp::Save, path, err)
        })?;

        info!(
            "event=store_save module=storage status=ok records={} duration_ms={}",
            games.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Parses every well-formed line of `text`, in order.
pub fn parse_records(text: &str) -> Vec<GameTitle> {
    let mut games = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(game) => games.push(game),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("event=records_parse module=storage status=partial skipped_lines={skipped}");
    }
    games
}

/// Formats `games` as one line each, in order.
pub fn format_records(games: &[GameTitle]) -> String {
    games
        .iter()
        .map(|game| {
            format!(
                "{},{},{},{},{}\n",
                game.id(),
                game.title,
                game.manufacturer,
                game.list_price,
                game.stock
            )
        })
        .collect()
}

fn parse_line(line: &str) -> Option<GameTitle> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_RECORD {
        return None;
    }

    let id = fields[0].trim().parse::<i32>().ok()?;
    let list_price = parse_price(fields[3].trim())?;
    let stock = fields[4].trim().parse::<i32>().ok()?;

    Some(GameTitle::new(id, fields[1], fields[2], list_price, stock))
}
