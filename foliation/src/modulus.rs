//! Selection of the modulus in which subset sums are tracked.
//!
//! Sums are never stored exactly: each one is folded into its residue modulo `m`.
//! A small `m` keeps the layers small but lets two different sums share a residue,
//! in which case a query may report a subset that does not actually reach the target.
//! The [`Precision`] attached to a resolved modulus tells whether this can happen.

use crate::error::{FoliationError, Result};
use crate::Value;
use std::fmt::{Display, Formatter};

/// Remainder of a sum modulo the working modulus, always in `[0, m)`.
pub type Residue = u64;

/// Multiplier applied to the number of elements by the heuristic policy.
pub const HEURISTIC_FACTOR: Value = 100;

/// A strictly positive modulus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modulus {
    m: u64,
}

impl Modulus {
    /// The modulus under which every sum shares the same residue.
    pub const ONE: Modulus = Modulus { m: 1 };

    pub fn new(m: Value) -> Result<Modulus> {
        if m <= 0 {
            Err(FoliationError::NonPositiveModulus { modulus: m })
        } else {
            Ok(Modulus { m: m as u64 })
        }
    }

    pub fn value(self) -> Value {
        // constructed from a positive i64, cannot overflow
        self.m as Value
    }

    /// Residue of `v`, normalized into `[0, m)` for negative values as well.
    pub fn residue(self, v: Value) -> Residue {
        v.rem_euclid(self.m as Value) as Residue
    }

    /// Residue of `a + b` given the residues of `a` and `b`.
    pub fn add(self, a: Residue, b: Residue) -> Residue {
        debug_assert!(a < self.m && b < self.m);
        // a, b < m <= i64::MAX hence the sum fits in a u64
        let sum = a + b;
        if sum >= self.m {
            sum - self.m
        } else {
            sum
        }
    }

    /// Whether this modulus separates all candidate sums of the given range.
    pub fn precision_for(self, range: &SumRange) -> Precision {
        if (self.m as i128) >= range.span() {
            Precision::Exact
        } else {
            Precision::Modular
        }
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.m)
    }
}

/// Whether residues can be trusted as exact sums.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Precision {
    /// No two distinct subset sums (nor a subset sum and the target) share a residue.
    Exact,
    /// Distinct sums may collide: positive answers may be spurious.
    Modular,
}

impl Precision {
    pub fn is_exact(self) -> bool {
        self == Precision::Exact
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Exact => write!(f, "exact"),
            Precision::Modular => write!(f, "modular"),
        }
    }
}

/// Smallest interval containing the target and every achievable subset sum of an instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SumRange {
    pub lo: i128,
    pub hi: i128,
}

impl SumRange {
    pub fn of(values: &[Value], target: Value) -> SumRange {
        let negatives: i128 = values.iter().filter(|&&v| v < 0).map(|&v| v as i128).sum();
        let positives: i128 = values.iter().filter(|&&v| v > 0).map(|&v| v as i128).sum();
        let target = target as i128;
        SumRange {
            lo: negatives.min(target),
            hi: positives.max(target),
        }
    }

    /// Number of distinct integers in the range.
    /// A modulus at least this large maps every one of them to a distinct residue.
    pub fn span(&self) -> i128 {
        self.hi - self.lo + 1
    }
}

/// Heuristic modulus: `min(target + 1, n * 100)`, clamped to be at least 1.
///
/// Memory stays proportional to `n` but nothing guarantees the absence of collisions:
/// in particular any negative target yields `m = 1`, under which every subset matches.
pub fn heuristic(n: usize, target: Value) -> Modulus {
    let by_target = target.saturating_add(1);
    let by_size = Value::try_from(n)
        .unwrap_or(Value::MAX)
        .saturating_mul(HEURISTIC_FACTOR);
    Modulus {
        m: by_target.min(by_size).max(1) as u64,
    }
}

/// Smallest modulus under which residues are exact sums for these values and target.
///
/// Saturates at `i64::MAX` when the range of sums is wider than that, in which case the
/// resulting modulus is not exact.
pub fn covering(values: &[Value], target: Value) -> Modulus {
    let span = SumRange::of(values, target).span();
    let m = Value::try_from(span).unwrap_or(Value::MAX);
    Modulus { m: m.max(1) as u64 }
}

/// How a query obtains its modulus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ModulusPolicy {
    /// See [`heuristic`].
    #[default]
    Heuristic,
    /// See [`covering`].
    Covering,
    /// A modulus given by the caller.
    Fixed(Value),
}

impl ModulusPolicy {
    pub fn resolve(self, values: &[Value], target: Value) -> Result<Modulus> {
        match self {
            ModulusPolicy::Heuristic => Ok(heuristic(values.len(), target)),
            ModulusPolicy::Covering => Ok(covering(values, target)),
            ModulusPolicy::Fixed(m) => Modulus::new(m),
        }
    }
}
