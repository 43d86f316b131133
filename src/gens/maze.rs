/*!
# Maze

Starts from the candidate edges of a 4-connected [`Grid`], shuffles them and grows a spanning
tree with a union-find (Kruskal without weights). The tree alone connects all `n` vertices.
Afterwards shortcuts are added back at random from the candidates not used by the tree, creating
cycles. Their number is `floor(f * c)` where `c` counts *all* lattice candidates, not only the
remaining ones, capped at the number of remaining candidates. For `f = 1` every candidate ends up
in the maze.

```
use fwgraphs::gens::*;

let mut rng = rand::rng();
let maze = Maze::new().nodes(25).extra_fraction(0.0).topology(&mut rng).unwrap();

// A pure spanning tree has n - 1 edges
assert_eq!(maze.edges.len(), 24);
```
*/

use rand::seq::SliceRandom;

use super::*;
use crate::utils::{Probability, UnionFind};

/// Default fraction of lattice candidates that are re-added as shortcuts
pub const DEFAULT_EXTRA_FRACTION: f64 = 0.15;

/// Generator for maze-like lattice graphs: a random spanning tree plus random shortcuts.
#[derive(Debug, Copy, Clone)]
pub struct Maze {
    n: NumNodes,
    extra_fraction: f64,
}

impl Default for Maze {
    fn default() -> Self {
        Self {
            n: 0,
            extra_fraction: DEFAULT_EXTRA_FRACTION,
        }
    }
}

impl Maze {
    /// Creates a new maze generator with default settings (`n = 0`, 15% shortcuts)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fraction `f` of all lattice candidates to re-add: `floor(f * #candidates)`
    /// non-tree candidates (or all of them, if fewer remain) are added as shortcuts.
    pub fn set_extra_fraction(&mut self, fraction: f64) {
        self.extra_fraction = fraction;
    }

    /// Sets the fraction `f` of all lattice candidates to re-add: `floor(f * #candidates)`
    /// non-tree candidates (or all of them, if fewer remain) are added as shortcuts.
    pub fn extra_fraction(mut self, fraction: f64) -> Self {
        self.set_extra_fraction(fraction);
        self
    }
}

impl NumNodesGen for Maze {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl TopologyGenerator for Maze {
    fn topology<R>(&self, rng: &mut R) -> Result<Topology>
    where
        R: Rng,
    {
        invalid_unless!(self.n >= 1, "a maze needs at least one vertex");
        invalid_unless!(
            self.extra_fraction.is_valid_probability(),
            "extra fraction must be within [0, 1], got {}",
            self.extra_fraction
        );

        let candidates = lattice_edges(self.n, false);

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.shuffle(rng);

        let mut in_tree = vec![false; candidates.len()];
        let mut union_find = UnionFind::new(self.n);
        let mut edges = Vec::with_capacity(candidates.len());
        for idx in order {
            let Edge(u, v) = candidates[idx];
            if union_find.union(u, v) {
                in_tree[idx] = true;
                edges.push(candidates[idx]);
            }
        }
        debug_assert_eq!(union_find.number_of_sets(), 1);

        let mut remaining: Vec<Edge> = candidates
            .iter()
            .zip(&in_tree)
            .filter_map(|(&e, &used)| (!used).then_some(e))
            .collect();
        remaining.shuffle(rng);

        let extras = (self.extra_fraction * candidates.len() as f64) as usize;
        edges.extend(remaining.into_iter().take(extras));

        Ok(Topology::from_nodes(self.n, self.n, edges))
    }
}
