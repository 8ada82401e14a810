use gameinv_core::{parse_price, Decimal, GameTitle};
use std::str::FromStr;

#[test]
fn new_keeps_fields_as_given() {
    let game = GameTitle::new(-4, "", "Nobody", Decimal::from_str("-1.5").unwrap(), -10);

    assert_eq!(game.id(), -4);
    assert_eq!(game.title, "");
    assert_eq!(game.manufacturer, "Nobody");
    assert_eq!(game.list_price, Decimal::from_str("-1.5").unwrap());
    assert_eq!(game.stock, -10);
}

#[test]
fn clone_is_detached_from_original() {
    let game = GameTitle::new(2, "Go", "Acme", parse_price("14.50").unwrap(), 3);

    let mut copy = game.clone();
    copy.stock = 0;
    copy.title.push_str(" Deluxe");

    assert_eq!(game.stock, 3);
    assert_eq!(game.title, "Go");
    assert_ne!(copy, game);
}

#[test]
fn near_max_price_values_without_panicking() {
    let whale = GameTitle::new(1, "Whale", "Acme", Decimal::MAX, 2);
    assert_eq!(whale.stock_value(), None);

    let backordered = GameTitle::new(2, "Whale", "Acme", Decimal::MAX, -2);
    assert_eq!(backordered.stock_value(), Some(Decimal::ZERO));
}
