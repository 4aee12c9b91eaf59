use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuizenError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuizenError {
    /// A room dimension was zero, negative or not a finite number.
    #[error("room '{room}': {dimension} must be a positive number, got {value}")]
    InvalidDimension {
        room: String,
        dimension: Dimension,
        value: String,
    },
    /// The price per cubic meter of a house was zero, negative or not a finite number.
    #[error("house '{house}': price per m³ must be greater than 0, got {value}")]
    InvalidPrice { house: String, value: String },
    /// A derived figure does not fit in a `Decimal`.
    #[error("{subject}: {figure} overflows")]
    Overflow {
        subject: String,
        figure: &'static str,
    },
    #[error("no house named '{name}' in the catalog (known: {known})")]
    UnknownHouse { name: String, known: String },
}

/// The three measured sides of a [`Room`](crate::models::room::Room).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Width,
    Height,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Height => "height",
        };
        f.write_str(name)
    }
}

impl HuizenError {
    pub(crate) fn dimension(room: &str, dimension: Dimension, value: impl Display) -> Self {
        Self::InvalidDimension {
            room: room.to_string(),
            dimension,
            value: value.to_string(),
        }
    }

    pub(crate) fn price(house: &str, value: impl Display) -> Self {
        Self::InvalidPrice {
            house: house.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn overflow(subject: String, figure: &'static str) -> Self {
        Self::Overflow { subject, figure }
    }
}
