//! Game title record.
//!
//! # Responsibility
//! - Define one stocked game title and its valuation helper.
//!
//! # Invariants
//! - `id` is read-only once constructed.
//! - `list_price` and `stock` are unvalidated: negative values are kept as-is.
//! - `stock_value()` is never negative for a non-negative price.
//! - Valuation reports overflow as `None` instead of panicking.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Caller-assigned identifier for a game title.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GameId = i32;

/// One inventory record.
///
/// `stock` may be negative to track back-orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTitle {
    id: GameId,
    /// Display name. Not required to be unique.
    pub title: String,
    pub manufacturer: String,
    /// Keeps the scale it was parsed with (`14.50`).
    pub list_price: Decimal,
    pub stock: i32,
}

impl GameTitle {
    pub fn new(
        id: GameId,
        title: impl Into<String>,
        manufacturer: impl Into<String>,
        list_price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            manufacturer: manufacturer.into(),
            list_price,
            stock,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the sellable value of this title.
    ///
    /// Zero or negative stock contributes nothing, not a negative amount.
    /// Returns `None` when `stock * list_price` exceeds the `Decimal` range.
    pub fn stock_value(&self) -> Option<Decimal> {
        if self.stock > 0 {
            Decimal::from(self.stock).checked_mul(self.list_price)
        } else {
            Some(Decimal::ZERO)
        }
    }

    /// Case-insensitive title comparison.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title
            .chars()
            .flat_map(char::to_lowercase)
            .eq(title.chars().flat_map(char::to_lowercase))
    }
}

/// Parses a plain decimal literal: optional sign, digits, at most one `.`.
///
/// Digit separators, exponents and out-of-range values are rejected.
pub fn parse_price(text: &str) -> Option<Decimal> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    Decimal::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_price, GameTitle};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn price(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn stock_value_multiplies_positive_stock() {
        let game = GameTitle::new(1, "Chess", "Acme", price("9.99"), 5);
        assert_eq!(game.stock_value(), Some(price("49.95")));
    }

    #[test]
    fn stock_value_overflow_is_none() {
        let game = GameTitle::new(1, "Whale", "Acme", Decimal::MAX, 2);
        assert_eq!(game.stock_value(), None);

        let single = GameTitle::new(2, "Whale", "Acme", Decimal::MAX, 1);
        assert_eq!(single.stock_value(), Some(Decimal::MAX));
    }

    #[test]
    fn stock_value_ignores_zero_and_negative_stock() {
        let empty = GameTitle::new(1, "Go", "Acme", price("14.50"), 0);
        let backordered = GameTitle::new(2, "Shogi", "Acme", price("20.00"), -3);

        assert_eq!(empty.stock_value(), Some(Decimal::ZERO));
        assert_eq!(backordered.stock_value(), Some(Decimal::ZERO));
    }

    #[test]
    fn matches_title_ignores_case() {
        let game = GameTitle::new(7, "Ticket to Ride", "Days of Wonder", price("44.99"), 2);

        assert!(game.matches_title("ticket TO ride"));
        assert!(!game.matches_title("Ticket to Ride Europe"));
    }

    #[test]
    fn parse_price_accepts_plain_literals() {
        assert_eq!(parse_price("14.50").unwrap().to_string(), "14.50");
        assert_eq!(parse_price("-2.5"), Some(price("-2.5")));
        assert_eq!(
            parse_price("79228162514264337593543950335"),
            Some(Decimal::MAX)
        );
    }

    #[test]
    fn parse_price_rejects_separators_and_junk() {
        for text in ["9_9.9_9", "1e3", "1.2.3", "", "-", ".", "12a", "--1", " 1"] {
            assert_eq!(parse_price(text), None, "`{text}` should be rejected");
        }
        assert_eq!(parse_price("79228162514264337593543950336"), None);
    }
}
