/*!
# Graph Generators

This module provides deterministic generators for synthetic test and benchmark instances of the
shortest-path engine:

- [`Grid`]: a row-major lattice, optionally with diagonals,
- [`Maze`]: a random spanning tree of the lattice plus a fraction of shortcut edges,
- [`RandomGeometric`]: points in the unit square connected below a distance threshold,
- [`Hypercube`]: the `d`-dimensional hypercube, randomly thinned to the requested size.

Every generator follows the same builder-style workflow:

1. Create a generator instance (e.g., `Maze::new()`).
2. Set parameters using setter methods (e.g., `.nodes(n).extra_fraction(0.2)`).
3. Build the unweighted [`Topology`] via `topology(rng)`.
4. Attach weights with a [`WeightAssignment`], using an rng independent of the topology's.

Topologies label their vertices `1..=k` and emit every undirected edge exactly once;
directedness is decided when loading into a [`LabeledGraph`](crate::repr::LabeledGraph).
Each generator guarantees a single connected component (the [`RandomGeometric`] graph only
approximately) and records in its [`Metadata`] when it could not produce exactly `n` vertices.

For the common case, [`generate`] and [`generate_suite`] bundle all steps behind a
[`GraphKind`] and a [`GeneratorConfig`]:

```
use fwgraphs::gens::*;

let config = GeneratorConfig::default();
let instance = generate(GraphKind::Maze, 50, &config).unwrap();

assert_eq!(instance.vertices.len(), 50);
assert_eq!(instance, generate(GraphKind::Maze, 50, &config).unwrap());
```
*/

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::*, prelude::*};

mod geometric;
mod grid;
mod hypercube;
mod maze;
mod suite;
mod weights;

pub use geometric::*;
pub use grid::*;
pub use hypercube::*;
pub use maze::*;
pub use suite::*;
pub use weights::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the (requested) number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the (requested) number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// A configurable generator of unweighted topologies.
pub trait TopologyGenerator {
    /// Builds the topology, drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the generator is misconfigured (e.g. `n < 1`).
    fn topology<R>(&self, rng: &mut R) -> Result<Topology>
    where
        R: Rng;
}

/// Facts about a generated topology that are not visible from its vertex and edge lists alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Number of vertices that was asked for
    pub requested_vertices: NumNodes,
    /// Number of vertices actually produced
    pub actual_vertices: NumNodes,
    /// Number of (unweighted, undirected) edges
    pub raw_edges: NumEdges,
    /// Hypercube only: vertices dropped by random removal and component pruning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_vertices: Option<NumNodes>,
    /// Hypercube only: dimension of the full hypercube
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<u32>,
    /// Random geometric only: connection radius that was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

/// Output of a [`TopologyGenerator`]: vertex labels `1..=k`, undirected edges between them and
/// [`Metadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub vertices: Vec<Node>,
    pub edges: Vec<Edge>,
    pub metadata: Metadata,
}

impl Topology {
    /// Creates a topology from `k` internal nodes `0..k` and edges between them, shifting all
    /// nodes to the labels `1..=k`
    pub(crate) fn from_nodes(requested: NumNodes, k: NumNodes, edges: Vec<Edge>) -> Self {
        let edges: Vec<Edge> = edges
            .into_iter()
            .map(|Edge(u, v)| Edge(u + 1, v + 1))
            .collect();

        Self {
            vertices: (1..=k).collect(),
            metadata: Metadata {
                requested_vertices: requested,
                actual_vertices: k,
                raw_edges: edges.len(),
                removed_vertices: None,
                dimension: None,
                radius: None,
            },
            edges,
        }
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of (undirected) edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }

    /// Returns the topology as an [`AdjArray`] over `0..k` (label `l` becomes node `l - 1`)
    pub fn to_adj_array(&self) -> AdjArray {
        AdjArray::from_edges(
            self.number_of_nodes(),
            self.edges.iter().map(|&Edge(u, v)| Edge(u - 1, v - 1)),
        )
    }

    /// Attaches weights drawn from `rng`
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the weight assignment is misconfigured.
    pub fn weighted<R: Rng>(
        self,
        assignment: &WeightAssignment,
        rng: &mut R,
    ) -> Result<WeightedInstance> {
        let edges = assignment.assign(&self.edges, rng)?;
        Ok(WeightedInstance {
            vertices: self.vertices,
            edges,
            metadata: self.metadata,
        })
    }
}

/// Returns the number of lattice columns and rows used to lay out `n` cells:
/// `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`
pub(crate) fn lattice_dimensions(n: NumNodes) -> (u64, u64) {
    let n = n as u64;
    let mut cols = (n as f64).sqrt() as u64;
    while cols * cols < n {
        cols += 1;
    }
    while cols > 0 && (cols - 1) * (cols - 1) >= n {
        cols -= 1;
    }

    let rows = if cols == 0 { 0 } else { n.div_ceil(cols) };
    (cols, rows)
}

/// Lattice edges between the first `n` cells (row-major) over nodes `0..n`: for every cell its
/// right and lower neighbor and, optionally, its lower-right and lower-left neighbor.
pub(crate) fn lattice_edges(n: NumNodes, diagonals: bool) -> Vec<Edge> {
    let (cols, _) = lattice_dimensions(n);
    let n = n as u64;

    let mut edges = Vec::new();
    for i in 0..n {
        let c = i % cols;
        let mut connect = |j: u64| {
            if j < n {
                edges.push(Edge(i as Node, j as Node));
            }
        };

        if c + 1 < cols {
            connect(i + 1);
        }
        connect(i + cols);
        if diagonals {
            if c + 1 < cols {
                connect(i + cols + 1);
            }
            if c > 0 {
                connect(i + cols - 1);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(lattice_dimensions(1), (1, 1));
        assert_eq!(lattice_dimensions(2), (2, 1));
        assert_eq!(lattice_dimensions(9), (3, 3));
        assert_eq!(lattice_dimensions(10), (4, 3));
        assert_eq!(lattice_dimensions(13), (4, 4));
        assert_eq!(lattice_dimensions(500), (23, 22));
    }

    #[test]
    fn lattice_without_diagonals() {
        assert_eq!(
            lattice_edges(5, false),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(1, 4), Edge(3, 4)]
        );
        assert_eq!(lattice_edges(9, false).len(), 12);
        assert!(lattice_edges(1, false).is_empty());
    }

    #[test]
    fn lattice_with_diagonals() {
        // 0 1
        // 2 3
        assert_eq!(
            lattice_edges(4, true),
            vec![
                Edge(0, 1),
                Edge(0, 2),
                Edge(0, 3),
                Edge(1, 3),
                Edge(1, 2),
                Edge(2, 3)
            ]
        );
    }
}
