use std::{fmt::Display, ops::Add};

use num::Zero;
use serde::{Deserialize, Serialize};

/// A path length: either a finite value or an explicit marker that no path exists.
///
/// Every finite value compares less than [`Distance::Unreachable`], and adding anything to
/// `Unreachable` stays `Unreachable`. This replaces an IEEE-infinity sentinel and works for
/// integer weights just as well as for floats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<W> {
    /// Finite path length
    Finite(W),
    /// No path is known
    Unreachable,
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Self::Unreachable
    }
}

impl<W> Distance<W> {
    /// Returns *true* if the distance is finite
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns *true* if no path is known
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the finite value if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

}

impl<W: Zero> Distance<W> {
    /// The distance of a vertex to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }
}

impl<W: Zero + PartialOrd> Distance<W> {
    /// Returns *true* if the distance is finite and below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Distance::Finite(w) => *w < W::zero(),
            Distance::Unreachable => false,
        }
    }
}

/// Weights the engine can work with: copyable, comparable, with an additive zero and a sum that
/// cannot overflow.
///
/// Around a negative cycle, relaxed distances shrink exponentially with every phase; integer
/// weights therefore saturate at their bounds instead of wrapping or panicking.
pub trait EdgeWeight: Copy + PartialOrd + Zero {
    /// Returns `self + rhs`, clamped to the representable range
    fn saturating_sum(self, rhs: Self) -> Self;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn saturating_sum(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn saturating_sum(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

impl<W: EdgeWeight> Add for Distance<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_sum(b)),
            _ => Distance::Unreachable,
        }
    }
}

impl<W> From<W> for Distance<W> {
    fn from(value: W) -> Self {
        Distance::Finite(value)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(w) => Display::fmt(w, f),
            Distance::Unreachable => f.pad("inf"),
        }
    }
}
