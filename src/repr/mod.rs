/*!
# Representations

- [`LabeledGraph`]: the weighted, labelled container consumed by the engine,
- [`AdjArray`]: a compact unweighted adjacency array over `0..n` used by the generators.
*/

use crate::*;

mod adj_array;
mod labeled;

pub use adj_array::*;
pub use labeled::*;
