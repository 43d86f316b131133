/*!
# Weight Assignment

Maps an unweighted edge list onto weighted triples, drawing every weight from the passed rng.
Weights are sampled as reals and rounded to the nearest integer.

- [`WeightMode::Uniform`] draws every weight from `[min, max]`.
- [`WeightMode::Controlled`] models mostly cheap edges plus a few expensive long ones: with
  probability `long_tail_fraction` a weight is drawn from `[min(0.6 * max + 1, max), max]`,
  otherwise from `[min, max(min + 1, 0.3 * max)]`.

Edges are processed in input order, so identical rng state and input yield identical weights.
*/

use rand_distr::{Bernoulli, Distribution, Uniform};

use super::*;
use crate::utils::Probability;

/// Default probability of a long-tail edge in [`WeightMode::Controlled`]
pub const DEFAULT_LONG_TAIL_FRACTION: f64 = 0.05;

/// Distribution of weights
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    #[default]
    Uniform,
    Controlled { long_tail_fraction: f64 },
}

/// Configuration of weights attached to generated edges.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAssignment {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub mode: WeightMode,
}

impl Default for WeightAssignment {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 20.0,
            mode: WeightMode::Uniform,
        }
    }
}

impl WeightAssignment {
    /// Creates a new assignment with default settings (uniform in `[1, 20]`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight range `[min, max]`
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }

    /// Sets the weight range `[min, max]`
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.set_range(min, max);
        self
    }

    /// Sets the weight distribution
    pub fn set_mode(&mut self, mode: WeightMode) {
        self.mode = mode;
    }

    /// Sets the weight distribution
    pub fn mode(mut self, mode: WeightMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Shorthand for [`WeightMode::Controlled`] with the default long-tail fraction
    pub fn controlled(self) -> Self {
        self.mode(WeightMode::Controlled {
            long_tail_fraction: DEFAULT_LONG_TAIL_FRACTION,
        })
    }

    /// Returns the low and high sub-ranges used in [`WeightMode::Controlled`], both within
    /// `[min, max]`
    pub fn controlled_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let low = (
            self.min,
            (self.min + 1.0).max(0.3 * self.max).min(self.max),
        );
        let high = (
            (0.6 * self.max + 1.0).min(self.max).max(self.min),
            self.max,
        );
        (low, high)
    }

    fn validate(&self) -> Result<()> {
        invalid_unless!(
            self.min.is_finite() && self.max.is_finite(),
            "weight bounds must be finite, got [{}, {}]",
            self.min,
            self.max
        );
        invalid_unless!(
            self.min <= self.max,
            "weight range is empty: min {} > max {}",
            self.min,
            self.max
        );
        if let WeightMode::Controlled { long_tail_fraction } = self.mode {
            invalid_unless!(
                long_tail_fraction.is_valid_probability(),
                "long-tail fraction must be within [0, 1], got {long_tail_fraction}"
            );
        }
        Ok(())
    }

    /// Attaches a weight to every edge, in input order
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] for non-finite or empty ranges and for a long-tail
    /// fraction outside of `[0, 1]`.
    pub fn assign<R: Rng>(
        &self,
        edges: &[Edge],
        rng: &mut R,
    ) -> Result<Vec<WeightedEdge<Node, i64>>> {
        self.validate()?;

        let weight = |&Edge(u, v): &Edge, w: f64| WeightedEdge::new(u, v, w.round() as i64);

        match self.mode {
            WeightMode::Uniform => {
                let distr = uniform(self.min, self.max)?;
                Ok(edges
                    .iter()
                    .map(|e| weight(e, distr.sample(rng)))
                    .collect())
            }
            WeightMode::Controlled { long_tail_fraction } => {
                let ((low_min, low_max), (high_min, high_max)) = self.controlled_ranges();
                let low = uniform(low_min, low_max)?;
                let high = uniform(high_min, high_max)?;
                let long_tail = Bernoulli::new(long_tail_fraction).map_err(|e| {
                    Error::InvalidParameter(format!("long-tail fraction: {e}"))
                })?;

                Ok(edges
                    .iter()
                    .map(|e| {
                        let w = if long_tail.sample(rng) {
                            high.sample(rng)
                        } else {
                            low.sample(rng)
                        };
                        weight(e, w)
                    })
                    .collect())
            }
        }
    }
}

fn uniform(min: f64, max: f64) -> Result<Uniform<f64>> {
    Uniform::new_inclusive(min, max)
        .map_err(|e| Error::InvalidParameter(format!("weight range [{min}, {max}]: {e}")))
}
