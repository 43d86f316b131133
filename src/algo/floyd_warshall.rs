/*!
# Floyd-Warshall

All-pairs shortest paths over any container implementing the read contract in [`crate::ops`].

The engine
1. builds the [`CanonicalOrdering`] of the vertex labels,
2. seeds `dist`/`next` from the edges in enumeration order (parallel edges fold to the first
   strictly smallest weight),
3. relaxes through every intermediate vertex `k = 0..n`, updating `next[(i, j)]` to
   `next[(i, k)]` so that walks always start correctly at `i`,
4. reports every vertex with `dist[(v, v)] < 0` as lying on or reaching a negative cycle.

Runs in `O(n^3)` time and `O(n^2)` space. Each call owns fresh matrices; the graph is never
mutated.

```
use fwgraphs::{prelude::*, algo::*};

let (graph, _) = LabeledGraph::from_parts([1, 2, 3], [(1, 2, 4), (2, 3, -1), (1, 3, 5)], true);
let paths = graph.all_pairs_shortest_paths();

assert_eq!(paths.distance_between(&1, &3), Some(Distance::Finite(3)));
assert_eq!(paths.path_between(&1, &3), Some(vec![&1, &2, &3]));
assert!(!paths.has_negative_cycle());
```
*/

use std::{
    fmt::Debug,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{debug, trace};

use super::*;

/// Configurable Floyd-Warshall engine.
///
/// Without configuration, use [`AllPairsShortestPaths::all_pairs_shortest_paths`] directly on
/// the graph instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall<'a> {
    interrupt: Option<&'a AtomicBool>,
}

impl<'a> FloydWarshall<'a> {
    /// Creates a new engine without interrupt flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cooperative interrupt flag. It is checked once before every relaxation phase;
    /// if it is set, [`FloydWarshall::run`] stops and returns [`Error::Interrupted`].
    pub fn set_interrupt(&mut self, flag: &'a AtomicBool) {
        self.interrupt = Some(flag);
    }

    /// Sets a cooperative interrupt flag. It is checked once before every relaxation phase;
    /// if it is set, [`FloydWarshall::run`] stops and returns [`Error::Interrupted`].
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.set_interrupt(flag);
        self
    }

    /// Computes all-pairs shortest paths of `graph`.
    ///
    /// # Errors
    /// Returns [`Error::Interrupted`] if the interrupt flag was raised during the computation.
    pub fn run<G>(&self, graph: &G) -> Result<ShortestPaths<G::Label, G::Weight>>
    where
        G: WeightedAdjacency,
        G::Label: Debug,
        G::Weight: EdgeWeight,
    {
        let mut state = Relaxation::seed(graph);
        let total_phases = state.ordering.len();

        for k in state.ordering.indices() {
            if self
                .interrupt
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                debug!("Floyd-Warshall interrupted before phase {k}/{total_phases}");
                return Err(Error::Interrupted {
                    completed_phases: k as usize,
                    total_phases,
                });
            }

            state.relax_through(k);
        }

        Ok(state.finish())
    }
}

/// Working state of one engine invocation. Distance and next-hop matrices only leave it
/// together, via [`Relaxation::finish`].
struct Relaxation<L, W> {
    ordering: CanonicalOrdering<L>,
    dist: Matrix<Distance<W>>,
    next: NextHopMatrix,
    diagnostics: Diagnostics<L>,
}

impl<L, W> Relaxation<L, W>
where
    L: Ord + Clone + Debug,
    W: EdgeWeight,
{
    fn seed<G>(graph: &G) -> Self
    where
        G: WeightedAdjacency<Label = L, Weight = W>,
    {
        let ordering = CanonicalOrdering::of_graph(graph);
        let n = ordering.len();
        debug!(
            "Floyd-Warshall on {n} vertices and {} edges",
            graph.number_of_edges()
        );

        let mut dist = Matrix::filled(n, Distance::Unreachable);
        let mut next = NextHopMatrix::filled(n, None);
        let mut diagnostics = Diagnostics::new();

        for i in ordering.indices() {
            dist[(i, i)] = Distance::zero();
            next[(i, i)] = OptionalNode::new(i);
        }

        for (source, target, weight) in graph.weighted_edges() {
            let (Some(i), Some(j)) = (ordering.index_of(source), ordering.index_of(target)) else {
                diagnostics.push(Diagnostic::UnknownEndpoint {
                    source: source.clone(),
                    target: target.clone(),
                });
                continue;
            };

            // strict: the first minimum among parallel edges wins
            if Distance::Finite(weight) < dist[(i, j)] {
                dist[(i, j)] = Distance::Finite(weight);
                next[(i, j)] = OptionalNode::new(j);
            }
        }

        Self {
            ordering,
            dist,
            next,
            diagnostics,
        }
    }

    /// Allows every path to additionally pass through `k`
    fn relax_through(&mut self, k: Node) {
        trace!("relaxation phase {k}");
        for i in self.ordering.indices() {
            if self.dist[(i, k)].is_unreachable() {
                continue;
            }

            for j in self.ordering.indices() {
                let via_k = self.dist[(i, k)] + self.dist[(k, j)];
                if via_k < self.dist[(i, j)] {
                    self.dist[(i, j)] = via_k;
                    self.next[(i, j)] = self.next[(i, k)];
                }
            }
        }
    }

    fn finish(mut self) -> ShortestPaths<L, W> {
        for v in self.ordering.indices() {
            if self.dist[(v, v)].is_negative() {
                self.diagnostics.push(Diagnostic::NegativeCycle {
                    vertex: self.ordering[v].clone(),
                });
            }
        }

        ShortestPaths {
            ordering: self.ordering,
            dist: self.dist,
            next: self.next,
            diagnostics: self.diagnostics,
        }
    }
}

/// Result of one engine invocation: canonical ordering, distance matrix, next-hop matrix and
/// the diagnostics raised while computing them.
///
/// If [`ShortestPaths::has_negative_cycle`] is *true*, rows and columns touching the reported
/// vertices do not hold meaningful shortest distances.
#[derive(Debug, Clone)]
pub struct ShortestPaths<L, W> {
    ordering: CanonicalOrdering<L>,
    dist: Matrix<Distance<W>>,
    next: NextHopMatrix,
    diagnostics: Diagnostics<L>,
}

impl<L, W> ShortestPaths<L, W>
where
    L: Ord,
    W: Copy,
{
    /// Returns the canonical vertex ordering all matrices are indexed by
    pub fn ordering(&self) -> &CanonicalOrdering<L> {
        &self.ordering
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.ordering.len()
    }

    /// Returns *true* if the graph had no vertices
    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// Returns the distance matrix
    pub fn distances(&self) -> &Matrix<Distance<W>> {
        &self.dist
    }

    /// Returns the next-hop matrix
    pub fn next_hops(&self) -> &NextHopMatrix {
        &self.next
    }

    /// Returns the diagnostics raised during the computation
    pub fn diagnostics(&self) -> &Diagnostics<L> {
        &self.diagnostics
    }

    /// Returns the shortest distance from canonical index `i` to `j`.
    /// ** Panics if `i >= n || j >= n` **
    pub fn distance(&self, i: Node, j: Node) -> Distance<W> {
        self.dist[(i, j)]
    }

    /// Returns the first vertex after `i` on a shortest `i -> j` walk.
    /// ** Panics if `i >= n || j >= n` **
    pub fn next_hop(&self, i: Node, j: Node) -> Option<Node> {
        self.next[(i, j)].map(|x| x.get())
    }

    /// Returns the shortest distance between two labels or `None` if one of them is unknown
    pub fn distance_between(&self, source: &L, target: &L) -> Option<Distance<W>> {
        Some(self.distance(
            self.ordering.index_of(source)?,
            self.ordering.index_of(target)?,
        ))
    }

    /// Reconstructs one shortest walk between canonical indices, see [`reconstruct_path`]
    pub fn path(&self, i: Node, j: Node) -> Option<Vec<&L>> {
        reconstruct_path(i, j, &self.next, &self.ordering)
    }

    /// Reconstructs one shortest walk together with its cost `dist[(i, j)]`
    pub fn path_with_cost(&self, i: Node, j: Node) -> Option<(Vec<&L>, W)> {
        let path = self.path(i, j)?;
        let cost = self.dist.get(i, j)?.finite()?;
        Some((path, cost))
    }

    /// Reconstructs one shortest walk between two labels
    pub fn path_between(&self, source: &L, target: &L) -> Option<Vec<&L>> {
        self.path(
            self.ordering.index_of(source)?,
            self.ordering.index_of(target)?,
        )
    }
}

impl<L, W> ShortestPaths<L, W>
where
    W: EdgeWeight,
{
    /// Returns the canonical indices `v` with `dist[(v, v)] < 0`
    pub fn negative_cycle_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.dist
            .diagonal()
            .enumerate()
            .filter_map(|(v, d)| d.is_negative().then_some(v as Node))
    }

    /// Returns *true* if any vertex lies on or reaches a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle_vertices().next().is_some()
    }
}

/// Exposes the engine directly as a method on graphs.
pub trait AllPairsShortestPaths: WeightedAdjacency {
    /// Computes all-pairs shortest paths with the default [`FloydWarshall`] configuration
    fn all_pairs_shortest_paths(&self) -> ShortestPaths<Self::Label, Self::Weight>;
}

impl<G> AllPairsShortestPaths for G
where
    G: WeightedAdjacency,
    G::Label: Debug,
    G::Weight: EdgeWeight,
{
    fn all_pairs_shortest_paths(&self) -> ShortestPaths<Self::Label, Self::Weight> {
        let mut state = Relaxation::seed(self);
        for k in state.ordering.indices() {
            state.relax_through(k);
        }
        state.finish()
    }
}
