#![cfg(test)]
use huizen_common::config::Config;
use huizen_common::models::house::House;
use huizen_common::models::room::Room;
use huizen_core::{catalog, report};
use rust_decimal_macros::dec;

const FAMILY_HOUSE_REPORT: &str = "\
🏠 Huis: Family House
------------------------------
Kamers:
• Living room - L: 5.20m, B: 5.10m, H: 5.50m, Inhoud: 145.86 m³
• Bedroom - L: 4.80m, B: 4.60m, H: 4.90m, Inhoud: 108.19 m³
• Bathroom - L: 5.90m, B: 2.50m, H: 3.10m, Inhoud: 45.73 m³
------------------------------
Totale inhoud: 299.78 m³
Prijs per m³: €300.00
Totaal excl. BTW: €89,934.00
BTW (21%): €18,886.14
💰 Totaal incl. BTW: €108,820.14
";

const SMALL_COTTAGE_REPORT: &str = "\
🏠 Huis: Small Cottage
------------------------------
Kamers:
• Living room - L: 4.00m, B: 3.50m, H: 3.80m, Inhoud: 53.20 m³
• Bedroom - L: 3.50m, B: 3.00m, H: 3.50m, Inhoud: 36.75 m³
• Bathroom - L: 2.50m, B: 2.00m, H: 2.50m, Inhoud: 12.50 m³
------------------------------
Totale inhoud: 102.45 m³
Prijs per m³: €150.00
Totaal excl. BTW: €15,367.50
BTW (21%): €3,227.18
💰 Totaal incl. BTW: €18,594.68
";

#[test]
fn family_house_report_text() {
    let house: House = catalog::find("Family House", &Config::default()).unwrap();
    assert_eq!(report::render(&house).unwrap(), FAMILY_HOUSE_REPORT);
}

#[test]
fn full_catalog_report() {
    let houses: Vec<House> = catalog::houses(&Config::default()).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    report::write_all(&houses, &mut buf).unwrap();
    let text: String = String::from_utf8(buf).unwrap();

    assert!(text.starts_with(FAMILY_HOUSE_REPORT));
    assert!(text.ends_with(SMALL_COTTAGE_REPORT));
    assert_eq!(text.matches("🏠 Huis: ").count(), 3);
    assert!(text.contains("Totaal excl. BTW: €283,790.00\n"));
    assert!(text.contains("BTW (21%): €59,595.90\n"));
}

#[test]
fn report_preserves_insertion_order() {
    let mut house: House = House::new("Order", dec!(100)).unwrap();
    for name in ["Zolder", "Attic", "Middle"] {
        house.add_room(Room::new(name, dec!(1), dec!(1), dec!(1)).unwrap());
    }

    let text: String = report::render(&house).unwrap();
    let zolder = text.find("• Zolder").unwrap();
    let attic = text.find("• Attic").unwrap();
    let middle = text.find("• Middle").unwrap();
    assert!(zolder < attic && attic < middle);
}

#[test]
fn rendering_leaves_the_house_untouched() {
    let house: House = catalog::find("Luxury Villa", &Config::default()).unwrap();
    let copy: House = house.clone();

    let first: String = report::render(&house).unwrap();
    let second: String = report::render(&house).unwrap();

    assert_eq!(first, second);
    assert_eq!(house, copy);
}
