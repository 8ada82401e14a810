//! In-memory inventory repository.
//!
//! # Responsibility
//! - Provide add/remove/stock-adjust/query/replace operations over game titles.
//!
//! # Invariants
//! - Failed operations leave the collection untouched.
//! - `get_all` returns a detached copy; mutating it never affects the repository.
//! - `replace_all` trusts its input and does not re-check id uniqueness.
//! - Stock arithmetic wraps instead of panicking; there is no floor at zero.
//! - Valuation never panics; overflow surfaces as `None`.

use crate::model::game::{GameId, GameTitle};
use rust_decimal::Decimal;

/// Ordered collection of game titles owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    games: Vec<GameTitle>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `game` unless its id is already present.
    ///
    /// Returns `false` for a duplicate id.
    pub fn add(&mut self, game: GameTitle) -> bool {
        if self.position_of(game.id()).is_some() {
            return false;
        }
        self.games.push(game);
        true
    }

    /// Builds a record from its fields and adds it; same contract as [`Inventory::add`].
    pub fn add_new(
        &mut self,
        id: GameId,
        title: impl Into<String>,
        manufacturer: impl Into<String>,
        list_price: Decimal,
        stock: i32,
    ) -> bool {
        self.add(GameTitle::new(id, title, manufacturer, list_price, stock))
    }

    pub fn remove_by_id(&mut self, id: GameId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.games.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first title matching `title` case-insensitively.
    ///
    /// When several records share a title, only the earliest inserted one is
    /// removed; later ones stay.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        match self.games.iter().position(|game| game.matches_title(title)) {
            Some(index) => {
                self.games.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn increase_stock(&mut self, id: GameId, amount: i32) -> bool {
        self.adjust_stock(id, |stock| stock.wrapping_add(amount))
    }

    /// Subtracts `amount` from stock. Stock may go negative for back-orders;
    /// callers needing a floor must check before calling.
    pub fn decrease_stock(&mut self, id: GameId, amount: i32) -> bool {
        self.adjust_stock(id, |stock| stock.wrapping_sub(amount))
    }

    pub fn get(&self, id: GameId) -> Option<&GameTitle> {
        self.games.iter().find(|game| game.id() == id)
    }

    /// Returns a detached copy of all titles in insertion order.
    pub fn get_all(&self) -> Vec<GameTitle> {
        self.games.clone()
    }

    /// Sums `stock * list_price` over titles with positive stock.
    ///
    /// Returns `None` when a product or the running sum leaves the `Decimal`
    /// range.
    pub fn total_value(&self) -> Option<Decimal> {
        self.games
            .iter()
            .try_fold(Decimal::ZERO, |total, game| total.checked_add(game.stock_value()?))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Installs `games` as the new authoritative state.
    ///
    /// Duplicate ids in `games` are inherited as-is.
    pub fn replace_all(&mut self, games: Vec<GameTitle>) {
        self.games = games;
    }

    fn position_of(&self, id: GameId) -> Option<usize> {
        self.games.iter().position(|game| game.id() == id)
    }

    fn adjust_stock(&mut self, id: GameId, apply: impl FnOnce(i32) -> i32) -> bool {
        match self.games.iter_mut().find(|game| game.id() == id) {
            Some(game) => {
                game.stock = apply(game.stock);
                true
            }
            None => false,
        }
    }
}
