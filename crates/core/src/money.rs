//! Monetary amounts.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

const CENTAVOS_PER_PESO: u64 = 100;

/// Non-negative amount in the smallest currency unit (centavos).
///
/// Unsigned on purpose: prices and totals can't go below zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    pub const fn from_pesos(pesos: u64) -> Self {
        Self(pesos * CENTAVOS_PER_PESO)
    }

    pub const fn centavos(self) -> u64 {
        self.0
    }

    /// Unit price times quantity. Saturates instead of wrapping.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "${}.{:02}",
            self.0 / CENTAVOS_PER_PESO,
            self.0 % CENTAVOS_PER_PESO
        )
    }
}
