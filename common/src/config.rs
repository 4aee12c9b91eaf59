use rust_decimal::Decimal;

use crate::models::house::DEFAULT_TAX_PERCENTAGE;

pub struct Config {
    /// Suppresses decorations around the reports.
    ///
    /// The report blocks themselves are always printed.
    pub quiet: u8,
    /// Number of `-v` flags given on the command line.
    pub verbose: u8,
    /// Tax percentage applied to every catalog house.
    pub tax_percentage: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            verbose: 0,
            tax_percentage: DEFAULT_TAX_PERCENTAGE,
        }
    }
}
