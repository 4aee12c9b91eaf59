//! # House Catalog
//!
//! The houses and rooms this program reports on, in report order.

use huizen_common::config::Config;
use huizen_common::error::{HuizenError, Result};
use huizen_common::models::house::House;
use huizen_common::models::room::Room;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

/// Name, length, width and height of a room.
type RoomEntry = (&'static str, Decimal, Decimal, Decimal);

struct Listing {
    name: &'static str,
    price_per_cubic_meter: Decimal,
    rooms: &'static [RoomEntry],
}

const LISTINGS: &[Listing] = &[
    Listing {
        name: "Family House",
        price_per_cubic_meter: dec!(300),
        rooms: &[
            ("Living room", dec!(5.2), dec!(5.1), dec!(5.5)),
            ("Bedroom", dec!(4.8), dec!(4.6), dec!(4.9)),
            ("Bathroom", dec!(5.9), dec!(2.5), dec!(3.1)),
        ],
    },
    Listing {
        name: "Luxury Villa",
        price_per_cubic_meter: dec!(500),
        rooms: &[
            ("Living room", dec!(8.0), dec!(6.0), dec!(5.5)),
            ("Master Bedroom", dec!(6.5), dec!(5.5), dec!(4.9)),
            ("Bathroom", dec!(4.0), dec!(3.0), dec!(3.2)),
            ("Guest Room", dec!(5.0), dec!(4.0), dec!(4.5)),
        ],
    },
    Listing {
        name: "Small Cottage",
        price_per_cubic_meter: dec!(150),
        rooms: &[
            ("Living room", dec!(4.0), dec!(3.5), dec!(3.8)),
            ("Bedroom", dec!(3.5), dec!(3.0), dec!(3.5)),
            ("Bathroom", dec!(2.5), dec!(2.0), dec!(2.5)),
        ],
    },
];

/// Builds every catalog house, taxed at `cfg.tax_percentage`.
pub fn houses(cfg: &Config) -> Result<Vec<House>> {
    let houses = LISTINGS
        .iter()
        .map(|listing| build(listing, cfg))
        .collect::<Result<Vec<House>>>()?;

    info!("Loaded {} house(s) from the catalog", houses.len());
    Ok(houses)
}

/// Builds the catalog house called `name`. Matching ignores ASCII case.
pub fn find(name: &str, cfg: &Config) -> Result<House> {
    let listing = LISTINGS
        .iter()
        .find(|listing| listing.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| HuizenError::UnknownHouse {
            name: name.to_string(),
            known: names().collect::<Vec<_>>().join(", "),
        })?;

    build(listing, cfg)
}

/// Names of the catalog houses, in report order.
pub fn names() -> impl Iterator<Item = &'static str> {
    LISTINGS.iter().map(|listing| listing.name)
}

fn build(listing: &Listing, cfg: &Config) -> Result<House> {
    let mut house = House::new(listing.name, listing.price_per_cubic_meter)?
        .with_tax_percentage(cfg.tax_percentage);

    for &(name, length, width, height) in listing.rooms {
        house.add_room(Room::new(name, length, width, height)?);
    }
    Ok(house)
}
