#![cfg(test)]
use huizen_common::HuizenError;
use huizen_common::config::Config;
use huizen_common::models::house::House;
use huizen_common::models::room::Room;
use huizen_core::catalog;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn family_house() -> House {
    let mut house: House = House::new("Family House", dec!(300)).unwrap();
    house.add_room(Room::new("Living room", dec!(5.2), dec!(5.1), dec!(5.5)).unwrap());
    house.add_room(Room::new("Bedroom", dec!(4.8), dec!(4.6), dec!(4.9)).unwrap());
    house.add_room(Room::new("Bathroom", dec!(5.9), dec!(2.5), dec!(3.1)).unwrap());
    house
}

/// Walks the Family House through every rounding stage.
#[test]
fn family_house_staged_totals() {
    let house: House = family_house();

    let volumes: Vec<Decimal> = house.rooms().iter().map(Room::volume).collect();
    assert_eq!(volumes, [dec!(145.86), dec!(108.19), dec!(45.73)]);

    assert_eq!(house.total_volume(), Ok(dec!(299.78)));
    assert_eq!(house.total_price_excl(), Ok(dec!(89934.00)));
    assert_eq!(house.btw_amount(), Ok(dec!(18886.14)));
    assert_eq!(house.total_price_incl(), Ok(dec!(108820.14)));
}

#[test]
fn staged_rounding_differs_from_single_rounding() {
    let mut house: House = House::new("Drift", dec!(1)).unwrap();
    house.add_room(Room::new("Box", dec!(0.5), dec!(0.5), dec!(0.25)).unwrap());

    // 0.0625 rounds to 0.06 before any price is applied.
    assert_eq!(house.total_volume(), Ok(dec!(0.06)));
    assert_eq!(house.total_price_excl(), Ok(dec!(0.06)));
    // 0.06 * 0.21 = 0.0126
    assert_eq!(house.btw_amount(), Ok(dec!(0.01)));
    assert_eq!(house.total_price_incl(), Ok(dec!(0.07)));
}

#[test]
fn total_volume_sums_rounded_room_volumes() {
    let mut house: House = House::new("Halves", dec!(10)).unwrap();
    // Each room is 0.125 m³ and rounds up to 0.13 on its own.
    for name in ["A", "B", "C"] {
        house.add_room(Room::new(name, dec!(0.5), dec!(0.5), dec!(0.5)).unwrap());
    }
    assert_eq!(house.total_volume(), Ok(dec!(0.39)));
    assert_eq!(house.total_price_excl(), Ok(dec!(3.90)));
}

#[test]
fn derived_values_are_recomputed() {
    let mut house: House = family_house();
    let before: Decimal = house.total_price_incl().unwrap();

    house.add_room(Room::new("Storage", dec!(1), dec!(1), dec!(1)).unwrap());

    assert_eq!(house.total_volume(), Ok(dec!(300.78)));
    assert!(house.total_price_incl().unwrap() > before);
}

#[test]
fn invalid_input_never_builds() {
    assert!(matches!(
        Room::new("Wall", dec!(3), dec!(0), dec!(2)),
        Err(HuizenError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Room::from_f64("Wall", -3.0, 1.0, 2.0),
        Err(HuizenError::InvalidDimension { .. })
    ));
    assert!(matches!(
        House::new("Gift", Decimal::ZERO),
        Err(HuizenError::InvalidPrice { .. })
    ));
    assert!(matches!(
        House::from_f64("Gift", -1.0),
        Err(HuizenError::InvalidPrice { .. })
    ));
}

#[test]
fn catalog_totals() {
    let houses: Vec<House> = catalog::houses(&Config::default()).unwrap();
    let totals: Vec<(&str, Decimal)> = houses
        .iter()
        .map(|house| (house.name(), house.total_price_incl().unwrap()))
        .collect();

    assert_eq!(
        totals,
        [
            ("Family House", dec!(108820.14)),
            ("Luxury Villa", dec!(343385.90)),
            ("Small Cottage", dec!(18594.68)),
        ]
    );
    assert_eq!(houses[0], family_house());
}

#[test]
fn room_volume_overflow_is_rejected() {
    let err: HuizenError = Room::from_f64("Hangar", 1e10, 1e10, 1e10).unwrap_err();
    assert!(matches!(err, HuizenError::Overflow { figure: "volume", .. }));
}

#[test]
fn house_price_overflow_is_an_error() {
    let mut house: House = House::new("Estate", dec!(1e15)).unwrap();
    house.add_room(Room::new("Grounds", dec!(1e15), dec!(1), dec!(1)).unwrap());

    assert_eq!(house.total_volume(), Ok(dec!(1e15)));
    assert!(matches!(
        house.total_price_excl(),
        Err(HuizenError::Overflow {
            figure: "total price excl. BTW",
            ..
        })
    ));
    assert!(house.btw_amount().is_err());
    assert!(house.total_price_incl().is_err());
    assert!(house.totals().is_err());
}
