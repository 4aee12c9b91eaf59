//! # House Report
//!
//! Renders the fixed-layout summary of a house:
//!
//! ```text
//! 🏠 Huis: Small Cottage
//! ------------------------------
//! Kamers:
//! • Living room - L: 4.00m, B: 3.50m, H: 3.80m, Inhoud: 53.20 m³
//! ...
//! ------------------------------
//! Totale inhoud: 102.45 m³
//! Prijs per m³: €150.00
//! Totaal excl. BTW: €15,367.50
//! BTW (21%): €3,227.18
//! 💰 Totaal incl. BTW: €18,594.68
//! ```
//!
//! Rendering only reads the house. All totals are computed before the first
//! line is written, so a house whose figures overflow produces no output.

use std::io::{self, Write};

use huizen_common::decimal::{format_amount, format_percentage};
use huizen_common::models::house::{House, Totals};
use huizen_common::models::room::Room;
use tracing::debug;

pub const SEPARATOR: &str = "------------------------------";
pub const CURRENCY: &str = "€";
pub const LENGTH_UNIT: &str = "m";
pub const VOLUME_UNIT: &str = "m³";

/// Writes the report block of one house to `out`.
pub fn write_details<W: Write>(house: &House, out: &mut W) -> anyhow::Result<()> {
    let totals: Totals = house.totals()?;
    debug!(
        "Rendering house '{}' with {} room(s)",
        house.name(),
        house.rooms().len()
    );

    writeln!(out, "🏠 Huis: {}", house.name())?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Kamers:")?;
    for room in house.rooms() {
        writeln!(out, "{}", room_line(room))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    writeln!(
        out,
        "Totale inhoud: {} {VOLUME_UNIT}",
        format_amount(totals.volume)
    )?;
    writeln!(
        out,
        "Prijs per {VOLUME_UNIT}: {CURRENCY}{}",
        format_amount(house.price_per_cubic_meter())
    )?;
    writeln!(
        out,
        "Totaal excl. BTW: {CURRENCY}{}",
        format_amount(totals.price_excl)
    )?;
    writeln!(
        out,
        "BTW ({}%): {CURRENCY}{}",
        format_percentage(house.tax_percentage()),
        format_amount(totals.btw)
    )?;
    writeln!(
        out,
        "💰 Totaal incl. BTW: {CURRENCY}{}",
        format_amount(totals.price_incl)
    )?;
    Ok(())
}

/// Writes the blocks of several houses, separated by an empty line.
pub fn write_all<'a, W, I>(houses: I, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a House>,
{
    for (idx, house) in houses.into_iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        write_details(house, out)?;
    }
    Ok(())
}

/// Prints the report of one house to stdout.
pub fn show_details(house: &House) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_details(house, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Renders the report of one house into a string.
pub fn render(house: &House) -> anyhow::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_details(house, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn room_line(room: &Room) -> String {
    format!(
        "• {} - L: {}{LENGTH_UNIT}, B: {}{LENGTH_UNIT}, H: {}{LENGTH_UNIT}, Inhoud: {} {VOLUME_UNIT}",
        room.name(),
        format_amount(room.length()),
        format_amount(room.width()),
        format_amount(room.height()),
        format_amount(room.volume()),
    )
}
