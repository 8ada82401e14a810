//! Console presentation helpers.
//!
//! # Responsibility
//! - Render the menu, messages and the inventory table.
//!
//! # Invariants
//! - Functions are stateless and only see plain data passed by the caller.

use gameinv_core::{Decimal, GameTitle};
use std::io::{self, Write};

const RULE_WIDTH: usize = 100;

pub const MENU_TITLE: &str = "----- Game Inventory Management System -----";

const MENU_ITEMS: [&str; 8] = [
    "1. Load data from file",
    "2. Save data to file",
    "3. Add a new game",
    "4. Remove a game",
    "5. Increase stock",
    "6. Decrease stock",
    "7. List all games",
    "8. Exit",
];

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for item in MENU_ITEMS {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

pub fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

pub fn write_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

pub fn write_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "Error: {message}")
}

/// Writes the fixed-width listing followed by the total inventory value.
pub fn write_inventory_table(
    out: &mut impl Write,
    games: &[GameTitle],
    total_value: Decimal,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<5} {:<30} {:<20} {:<12} {:<8}",
        "ID", "Title", "Manufacturer", "List Price", "Stock"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for game in games {
        writeln!(out, "{}", format_row(game))?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Total Inventory Value: {total_value}")
}

/// One table row; stock is right-aligned, every other column left-aligned.
pub fn format_row(game: &GameTitle) -> String {
    format!(
        "{:<5} {:<30} {:<20} {:<12} {:>8}",
        game.id(),
        game.title,
        game.manufacturer,
        game.list_price.to_string(),
        game.stock
    )
}
