use colored::*;
use huizen_common::config::Config;
use huizen_common::decimal::{format_amount, format_percentage};
use huizen_common::models::house::House;
use huizen_core::catalog;
use huizen_core::report::CURRENCY;

use crate::terminal::{colors, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let houses: Vec<House> = catalog::houses(cfg)?;

    print::header("houses", cfg.quiet);

    let key_width: usize = print::key_width(houses.iter().map(House::name));

    for house in &houses {
        let price: ColoredString =
            format!("{CURRENCY}{}", format_amount(house.total_price_incl()?)).color(colors::ACCENT);
        print::aligned_line(house.name(), key_width, price);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::print_status(format!(
            "{} house(s), prices include {}% BTW",
            houses.len().to_string().color(colors::ACCENT),
            format_percentage(cfg.tax_percentage)
        ));
    }
    Ok(())
}
