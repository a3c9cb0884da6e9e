//! Fixed-point ringgit amount with 2 decimal places.
//!
//! Uses `rust_decimal` internally with scale enforcement so that folding
//! interest into the inbound column never loses cents.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places.
///
/// Statement cells arrive as text with thousands separators and blanks
/// standing in for zero; [`Amount::parse_cell`] handles both.
///
/// # Examples
///
/// ```
/// use gxbank_exporter::Amount;
///
/// let amount = Amount::parse_cell(Some("1,200.5")).unwrap();
/// assert_eq!(amount.to_string(), "1200.50");
/// assert_eq!(Amount::parse_cell(None).unwrap(), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Parses a statement money cell.
    ///
    /// An absent or blank cell is the literal value zero; thousands-separator
    /// commas are removed before parsing.
    pub fn parse_cell(cell: Option<&str>) -> std::result::Result<Self, rust_decimal::Error> {
        let text = cell.unwrap_or("").trim();
        if text.is_empty() {
            return Ok(Amount::ZERO);
        }
        let cleaned = text.replace(',', "");
        Decimal::from_str(&cleaned).map(Amount::new)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}
