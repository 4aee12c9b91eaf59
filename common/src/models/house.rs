use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::decimal::{self, round2};
use crate::error::{HuizenError, Result};
use crate::models::room::Room;

/// Dutch BTW rate applied when no other percentage is given.
pub const DEFAULT_TAX_PERCENTAGE: Decimal = dec!(21.0);

/// A named house priced per cubic meter of its rooms.
///
/// Rooms keep the order in which they were added. Every total is recomputed
/// from the current rooms and rounded to two decimals at each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    name: String,
    price_per_cubic_meter: Decimal,
    tax_percentage: Decimal,
    rooms: Vec<Room>,
}

impl House {
    /// Creates an empty house taxed at [`DEFAULT_TAX_PERCENTAGE`].
    ///
    /// Fails when the price per cubic meter is not strictly positive.
    pub fn new(name: impl Into<String>, price_per_cubic_meter: Decimal) -> Result<Self> {
        let name: String = name.into();

        if price_per_cubic_meter <= Decimal::ZERO {
            warn!("Rejected house '{name}': price per m³ is {price_per_cubic_meter}");
            return Err(HuizenError::price(&name, price_per_cubic_meter));
        }

        debug!("Created house '{name}' at {price_per_cubic_meter} per m³");
        Ok(Self {
            name,
            price_per_cubic_meter,
            tax_percentage: DEFAULT_TAX_PERCENTAGE,
            rooms: Vec::new(),
        })
    }

    /// Same as [`House::new`] for callers holding floats. NaN and infinities are rejected.
    pub fn from_f64(name: impl Into<String>, price_per_cubic_meter: f64) -> Result<Self> {
        let name: String = name.into();
        match decimal::from_f64(price_per_cubic_meter) {
            Some(price) => Self::new(name, price),
            None => {
                warn!("Rejected house '{name}': price per m³ is {price_per_cubic_meter}");
                Err(HuizenError::price(&name, price_per_cubic_meter))
            }
        }
    }

    /// Replaces the tax percentage. The value is not range checked.
    pub fn with_tax_percentage(mut self, tax_percentage: Decimal) -> Self {
        self.tax_percentage = tax_percentage;
        self
    }

    /// Appends a room. Duplicates are allowed and there is no limit.
    pub fn add_room(&mut self, room: Room) {
        debug!("Added room '{}' to house '{}'", room.name(), self.name);
        self.rooms.push(room);
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_per_cubic_meter(&self) -> Decimal {
        self.price_per_cubic_meter
    }

    pub fn tax_percentage(&self) -> Decimal {
        self.tax_percentage
    }

    /// Sum of the rounded room volumes.
    pub fn total_volume(&self) -> Result<Decimal> {
        self.rooms
            .iter()
            .try_fold(Decimal::ZERO, |total, room| total.checked_add(room.volume()))
            .map(round2)
            .ok_or_else(|| self.overflow("total volume"))
    }

    pub fn total_price_excl(&self) -> Result<Decimal> {
        self.price_excl_for(self.total_volume()?)
    }

    /// BTW over the rounded price excluding tax.
    pub fn btw_amount(&self) -> Result<Decimal> {
        self.btw_for(self.total_price_excl()?)
    }

    /// Rounded price excluding tax plus the rounded BTW amount.
    pub fn total_price_incl(&self) -> Result<Decimal> {
        let excl = self.total_price_excl()?;
        self.incl_for(excl, self.btw_for(excl)?)
    }

    /// All derived figures, computed once in stage order.
    pub fn totals(&self) -> Result<Totals> {
        let volume = self.total_volume()?;
        let price_excl = self.price_excl_for(volume)?;
        let btw = self.btw_for(price_excl)?;
        let price_incl = self.incl_for(price_excl, btw)?;

        debug!("Totals for '{}': {volume} m³, {price_incl} incl. BTW", self.name);
        Ok(Totals {
            volume,
            price_excl,
            btw,
            price_incl,
        })
    }

    fn price_excl_for(&self, volume: Decimal) -> Result<Decimal> {
        volume
            .checked_mul(self.price_per_cubic_meter)
            .map(round2)
            .ok_or_else(|| self.overflow("total price excl. BTW"))
    }

    fn btw_for(&self, price_excl: Decimal) -> Result<Decimal> {
        self.tax_percentage
            .checked_div(dec!(100))
            .and_then(|rate| price_excl.checked_mul(rate))
            .map(round2)
            .ok_or_else(|| self.overflow("BTW amount"))
    }

    fn incl_for(&self, price_excl: Decimal, btw: Decimal) -> Result<Decimal> {
        price_excl
            .checked_add(btw)
            .map(round2)
            .ok_or_else(|| self.overflow("total price incl. BTW"))
    }

    fn overflow(&self, figure: &'static str) -> HuizenError {
        warn!("House '{}': {figure} overflows", self.name);
        HuizenError::overflow(format!("house '{}'", self.name), figure)
    }
}

/// The derived figures of a [`House`], each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub volume: Decimal,
    pub price_excl: Decimal,
    pub btw: Decimal,
    pub price_incl: Decimal,
}
