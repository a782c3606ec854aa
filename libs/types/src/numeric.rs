//! Integer price and quantity types
//!
//! Binary contracts pay out 100 cents, so a price is an integer number of
//! cents in `0..=100`. Price 0 marks a market order. Quantities count
//! whole contracts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::errors::ValidationError;

/// Price in cents, `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(u8);

impl Price {
    /// Sentinel price of a market order
    pub const MARKET: Price = Price(0);

    /// Highest representable price (a certain outcome)
    pub const MAX_CENTS: u8 = 100;

    /// Validate a raw cent value
    pub fn try_new(cents: i64) -> Result<Self, ValidationError> {
        if !(0..=i64::from(Self::MAX_CENTS)).contains(&cents) {
            return Err(ValidationError::PriceOutOfRange(cents));
        }
        Ok(Self(cents as u8))
    }

    pub fn cents(&self) -> u8 {
        self.0
    }

    /// Price 0 is reserved for market orders
    pub fn is_market(&self) -> bool {
        self.0 == 0
    }

    /// Price expressed in dollars (60 cents -> 0.60)
    pub fn as_dollars(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        i64::from(price.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}c", self.0)
    }
}

/// Number of contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    pub const fn new(contracts: u64) -> Self {
        Self(contracts)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Validate a raw order size (at least one contract)
    pub fn try_new(contracts: i64) -> Result<Self, ValidationError> {
        if contracts < 1 {
            return Err(ValidationError::InvalidQuantity(contracts));
        }
        Ok(Self(contracts as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    /// Accepts zero (fill state) but rejects negatives
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidQuantity(value))
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// Saturates at `u64::MAX`
    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// Saturates at zero; callers compare before subtracting
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity(self.0.saturating_sub(rhs.0))
    }
}

impl std::iter::Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), Add::add)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
