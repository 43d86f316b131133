/*!
`fwgraphs` computes all-pairs shortest paths on small to medium weighted graphs and generates
the synthetic weighted graphs to run it on.

# Engine

[`algo::FloydWarshall`] consumes any container implementing the read contract in [`ops`]
(the provided one is [`LabeledGraph`](crate::repr::LabeledGraph)) and produces
- a canonical ordering of the vertices (ascending by label, indices `0..n`),
- the `n x n` distance matrix, where missing paths are [`Unreachable`](crate::algo::Distance),
- the `n x n` next-hop matrix used to reconstruct one shortest walk per pair,
- diagnostics for skipped edges and vertices on negative cycles.

Negative weights are allowed. A negative cycle does not abort the computation; it is reported
through [`diagnostics`].

# Generators

[`gens`] builds grid, maze, random geometric and hypercube topologies with documented
connectivity guarantees and attaches integer weights to them. All randomness is drawn from
explicitly seeded generators, so identical parameters yield identical instances.

# Usage

```
use fwgraphs::{algo::*, gens::*, prelude::*};

let instance = generate(GraphKind::Grid, 9, &GeneratorConfig::default()).unwrap();
let (graph, diagnostics) = LabeledGraph::from_instance(&instance, false);
assert!(diagnostics.is_empty());

let paths = graph.all_pairs_shortest_paths();
let path = paths.path_between(&1, &9).unwrap();

assert_eq!(path.first(), Some(&&1));
assert_eq!(path.last(), Some(&&9));
assert!(!paths.has_negative_cycle());
```

In most use-cases, `use fwgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod diagnostics;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::Error;
pub use node::*;

/// `fwgraphs::prelude` includes definitions for nodes and edges, the graph container traits as well as all representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
