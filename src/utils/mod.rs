/*!
# Utilities

Provides
- [`Matrix`]: the dense row-major storage behind distance and next-hop matrices,
- [`UnionFind`]: the disjoint-set forest used to grow spanning trees in the maze generator,
- [`Probability`]: a small helper to validate fractions passed to generators.

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

mod matrix;
mod union_find;

pub use matrix::Matrix;
pub use union_find::UnionFind;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
