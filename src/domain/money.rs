use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so that every amount flowing through the
/// pricing engine has already been checked for sign. Arithmetic is checked:
/// overflow or a negative result is an `InvalidInput` error, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(CheckoutError::InvalidInput(format!(
                "amount must not be negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, CheckoutError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| overflow("addition"))
    }

    /// Subtracts `rhs`; the result must stay non-negative.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, CheckoutError> {
        let value = self
            .0
            .checked_sub(rhs.0)
            .ok_or_else(|| overflow("subtraction"))?;
        Self::new(value)
    }

    /// Scales by a non-negative factor such as a tax rate.
    pub fn checked_mul(self, factor: Decimal) -> Result<Self, CheckoutError> {
        let value = self
            .0
            .checked_mul(factor)
            .ok_or_else(|| overflow("multiplication"))?;
        Self::new(value)
    }

    /// Rounds to cents, the granularity used for display.
    pub fn to_cents(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Money {
    type Error = CheckoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(CheckoutError::InvalidInput(format!(
                "amount must be finite, got {value}"
            )));
        }
        let decimal = Decimal::try_from(value)
            .map_err(|e| CheckoutError::InvalidInput(format!("amount {value}: {e}")))?;
        Self::new(decimal)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::new(value).map_err(serde::de::Error::custom)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.to_cents())
    }
}

fn overflow(operation: &str) -> CheckoutError {
    CheckoutError::InvalidInput(format!("amount out of range, {operation} overflowed"))
}

/// A percentage in the closed range [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            Err(CheckoutError::InvalidInput(format!(
                "discount percentage must be within [0, 100], got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The share of `amount` this percentage represents.
    pub fn of(&self, amount: Money) -> Result<Money, CheckoutError> {
        amount.checked_mul(self.0 / Decimal::ONE_HUNDRED)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Percentage::new(value).map_err(serde::de::Error::custom)
    }
}
