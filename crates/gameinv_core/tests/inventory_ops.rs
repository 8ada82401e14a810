use gameinv_core::{Decimal, GameTitle, Inventory};
use std::str::FromStr;

fn price(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn chess_and_go() -> Inventory {
    let mut inventory = Inventory::new();
    assert!(inventory.add_new(1, "Chess", "Acme", price("9.99"), 5));
    assert!(inventory.add_new(2, "Go", "Acme", price("14.50"), 0));
    inventory
}

#[test]
fn add_rejects_duplicate_id_without_mutation() {
    let mut inventory = Inventory::new();
    assert!(inventory.add_new(1, "Chess", "Acme", price("9.99"), 5));

    let added = inventory.add(GameTitle::new(1, "Other", "Elsewhere", price("1.00"), 1));
    assert!(!added);
    assert_eq!(inventory.len(), 1);

    let games = inventory.get_all();
    assert_eq!(games.iter().filter(|game| game.id() == 1).count(), 1);
    assert_eq!(games[0].title, "Chess");
}

#[test]
fn add_preserves_insertion_order() {
    let mut inventory = Inventory::new();
    for id in [30, 10, 20] {
        assert!(inventory.add_new(id, format!("Game {id}"), "Acme", price("1.00"), 1));
    }

    let ids: Vec<i32> = inventory.get_all().iter().map(GameTitle::id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn remove_by_id_on_empty_or_unknown_id_fails() {
    let mut empty = Inventory::new();
    assert!(!empty.remove_by_id(1));
    assert!(empty.is_empty());

    let mut inventory = chess_and_go();
    assert!(!inventory.remove_by_id(99));
    assert_eq!(inventory.len(), 2);

    assert!(inventory.remove_by_id(1));
    assert_eq!(inventory.len(), 1);
    assert!(inventory.get(1).is_none());
}

#[test]
fn remove_by_title_is_case_insensitive() {
    let mut inventory = chess_and_go();

    assert!(!inventory.remove_by_title("Checkers"));
    assert!(inventory.remove_by_title("gO"));
    assert_eq!(inventory.len(), 1);
    assert!(inventory.get(2).is_none());
}

#[test]
fn increase_then_decrease_restores_stock() {
    let mut inventory = chess_and_go();

    assert!(inventory.increase_stock(1, 12));
    assert_eq!(inventory.get(1).unwrap().stock, 17);
    assert!(inventory.decrease_stock(1, 12));
    assert_eq!(inventory.get(1).unwrap().stock, 5);
}

#[test]
fn stock_adjustment_on_unknown_id_fails() {
    let mut inventory = chess_and_go();
    let before = inventory.get_all();

    assert!(!inventory.increase_stock(42, 1));
    assert!(!inventory.decrease_stock(42, 1));
    assert_eq!(inventory.get_all(), before);
}

#[test]
fn decrease_may_go_negative_and_drops_out_of_total_value() {
    let mut inventory = chess_and_go();
    assert_eq!(inventory.total_value(), Some(price("49.95")));

    assert!(inventory.decrease_stock(1, 8));
    assert_eq!(inventory.get(1).unwrap().stock, -3);
    assert_eq!(inventory.total_value(), Some(Decimal::ZERO));
}

#[test]
fn total_value_counts_only_positive_stock() {
    let inventory = chess_and_go();
    assert_eq!(inventory.total_value(), Some(price("49.95")));
}

#[test]
fn total_value_is_order_independent() {
    let games = vec![
        GameTitle::new(1, "Chess", "Acme", price("9.99"), 5),
        GameTitle::new(2, "Go", "Acme", price("14.50"), 3),
        GameTitle::new(3, "Shogi", "Acme", price("20.00"), -1),
        GameTitle::new(4, "Xiangqi", "Acme", price("0.25"), 4),
    ];
    let mut forward = Inventory::new();
    forward.replace_all(games.clone());
    let mut backward = Inventory::new();
    backward.replace_all(games.into_iter().rev().collect());

    assert_eq!(forward.total_value(), Some(price("94.45")));
    assert_eq!(forward.total_value(), backward.total_value());
}

#[test]
fn get_all_returns_detached_copy() {
    let inventory = chess_and_go();

    let mut copy = inventory.get_all();
    copy[0].stock = 1_000;
    copy[0].title = "Mutated".to_string();
    copy.clear();

    assert_eq!(inventory.len(), 2);
    let original = inventory.get(1).unwrap();
    assert_eq!(original.stock, 5);
    assert_eq!(original.title, "Chess");
}

#[test]
fn clear_and_replace_all_swap_state() {
    let mut inventory = chess_and_go();

    inventory.clear();
    assert!(inventory.is_empty());
    assert_eq!(inventory.total_value(), Some(Decimal::ZERO));

    inventory.replace_all(vec![GameTitle::new(9, "Hive", "Gen42", price("30.00"), 2)]);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.total_value(), Some(price("60.00")));
}

#[test]
fn total_value_overflow_is_reported_not_panicked() {
    let mut inventory = Inventory::new();
    inventory.replace_all(gameinv_core::storage::parse_records(
        "1,Whale,Acme,79228162514264337593543950335,2\n",
    ));

    let outcome = std::panic::catch_unwind(|| inventory.total_value());
    assert_eq!(outcome.ok(), Some(None));
}

#[test]
fn total_value_is_restored_once_overflowing_stock_drops() {
    let mut inventory = chess_and_go();
    assert!(inventory.add_new(3, "Whale", "Acme", Decimal::MAX, 2));
    assert_eq!(inventory.total_value(), None);

    assert!(inventory.decrease_stock(3, 2));
    assert_eq!(inventory.total_value(), Some(price("49.95")));
}
