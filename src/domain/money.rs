//! `Money`: a newtype over [`rust_decimal::Decimal`] for the benefit math.
//!
//! The responsibility engine clamps at zero (a payer never owes the patient
//! money) and quotes in whole cents, so saturating subtraction and half-up
//! cent rounding live here rather than being re-derived at each call site.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary value in dollars. Serializes transparently as its inner decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Subtraction that never dips below zero; the engine never owes the
    /// patient a negative balance.
    pub fn saturating_sub(self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < Decimal::ZERO {
            Money::ZERO
        } else {
            Money(diff)
        }
    }

    /// Takes `percent` (0-100) of this amount.
    pub fn percent(self, percent: Decimal) -> Money {
        Money(self.0 * percent / Decimal::from(100))
    }

    /// Rounds to whole cents, half away from zero, quoted at two decimal
    /// places.
    pub fn round_to_cents(self) -> Money {
        let mut cents = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        Money(cents)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
