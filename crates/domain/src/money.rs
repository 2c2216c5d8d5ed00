//! Exact currency arithmetic.

use serde::{Deserialize, Serialize};

/// Money amount represented in integer fen to avoid floating point drift.
///
/// Cart totals must be exact for integer/decimal prices, so arithmetic
/// never leaves the integer domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in fen (e.g. 800 = ¥8.00)
    fen: i64,
}

impl Money {
    /// Creates a money amount from fen.
    pub fn from_fen(fen: i64) -> Self {
        Self { fen }
    }

    /// Creates a money amount from a whole yuan value.
    pub fn from_yuan(yuan: i64) -> Self {
        Self { fen: yuan * 100 }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { fen: 0 }
    }

    /// Returns the amount in fen.
    pub fn fen(&self) -> i64 {
        self.fen
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.fen == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            fen: self.fen * i64::from(quantity),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fen < 0 {
            write!(f, "-¥{}.{:02}", (self.fen / 100).abs(), (self.fen % 100).abs())
        } else {
            write!(f, "¥{}.{:02}", self.fen / 100, self.fen % 100)
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            fen: self.fen + rhs.fen,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.fen += rhs.fen;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, amount| acc + amount)
    }
}
