use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::decimal::{self, round2};
use crate::error::{Dimension, HuizenError, Result};

/// A rectangular room, measured in meters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    length: Decimal,
    width: Decimal,
    height: Decimal,
    volume: Decimal,
}

impl Room {
    /// Creates a room after checking that every dimension is strictly positive.
    ///
    /// Dimensions are checked in the order length, width, height and the first
    /// one that fails is named in the error. A room whose volume does not fit
    /// in a `Decimal` is rejected with [`HuizenError::Overflow`].
    pub fn new(
        name: impl Into<String>,
        length: Decimal,
        width: Decimal,
        height: Decimal,
    ) -> Result<Self> {
        let name: String = name.into();

        for (dimension, value) in [
            (Dimension::Length, length),
            (Dimension::Width, width),
            (Dimension::Height, height),
        ] {
            if value <= Decimal::ZERO {
                warn!("Rejected room '{name}': {dimension} is {value}");
                return Err(HuizenError::dimension(&name, dimension, value));
            }
        }

        let Some(product) = length
            .checked_mul(width)
            .and_then(|area| area.checked_mul(height))
        else {
            warn!("Rejected room '{name}': volume of {length} x {width} x {height} overflows");
            return Err(HuizenError::overflow(format!("room '{name}'"), "volume"));
        };

        debug!("Created room '{name}' ({length} x {width} x {height})");
        Ok(Self {
            name,
            length,
            width,
            height,
            volume: round2(product),
        })
    }

    /// Same as [`Room::new`] for callers holding floats. NaN and infinities are rejected.
    pub fn from_f64(name: impl Into<String>, length: f64, width: f64, height: f64) -> Result<Self> {
        let name: String = name.into();
        let length = to_dimension(&name, Dimension::Length, length)?;
        let width = to_dimension(&name, Dimension::Width, width)?;
        let height = to_dimension(&name, Dimension::Height, height)?;
        Self::new(name, length, width, height)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> Decimal {
        self.length
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Length x width x height in m³, rounded to two decimals.
    pub fn volume(&self) -> Decimal {
        self.volume
    }
}

fn to_dimension(room: &str, dimension: Dimension, value: f64) -> Result<Decimal> {
    decimal::from_f64(value).ok_or_else(|| {
        warn!("Rejected room '{room}': {dimension} is {value}");
        HuizenError::dimension(room, dimension, value)
    })
}
