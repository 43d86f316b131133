//! Fixtures and brute-force references shared by the unit tests.

use std::ops::Range;

use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, ops::*, prelude::*, utils::Matrix};

/// Directed acyclic example on labels `1..=6`; `dist(5, 2) = 7` via `5 -> 3 -> 4 -> 1 -> 2`
pub fn example_digraph() -> LabeledGraph<Node, i64> {
    let (graph, diagnostics) = LabeledGraph::from_parts(
        1..=6,
        [
            (1, 2, 2),
            (3, 1, -4),
            (3, 2, 3),
            (3, 4, -7),
            (4, 1, 2),
            (5, 3, 10),
            (5, 4, 5),
            (5, 6, 4),
            (6, 1, 5),
            (6, 4, 1),
        ],
        true,
    );
    assert!(diagnostics.is_empty());
    graph
}

/// Directed graph on labels `0..n` where every ordered pair `(u, v)` with `u != v` is an edge
/// with probability `p`
pub fn random_digraph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: Range<i64>,
) -> LabeledGraph<Node, i64> {
    random_graph(rng, n, p, weights, |u, v| u != v)
}

/// Like [`random_digraph`], but only with edges `(u, v)` for `u < v`, so negative weights never
/// form a negative cycle
pub fn random_dag<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: Range<i64>,
) -> LabeledGraph<Node, i64> {
    random_graph(rng, n, p, weights, |u, v| u < v)
}

fn random_graph<R: Rng, F: Fn(Node, Node) -> bool>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: Range<i64>,
    allowed: F,
) -> LabeledGraph<Node, i64> {
    let edges = (0..n)
        .cartesian_product(0..n)
        .filter(|&(u, v)| allowed(u, v))
        .filter_map(|(u, v)| {
            rng.random_bool(p)
                .then(|| (u, v, rng.random_range(weights.clone())))
        })
        .collect_vec();

    LabeledGraph::from_parts(0..n, edges, true).0
}

/// Shortest distances over all simple paths by exhaustive enumeration. Only feasible for tiny
/// graphs; labels must be `0..n`.
pub fn brute_force_distances(graph: &LabeledGraph<Node, i64>) -> Matrix<Distance<i64>> {
    let n = graph.number_of_nodes();
    let mut adjacency = vec![Vec::new(); n];
    for (&u, &v, w) in graph.weighted_edges() {
        adjacency[u as usize].push((v, w));
    }

    let mut best = Matrix::filled(n, Distance::Unreachable);
    for s in 0..n as Node {
        let mut on_path = NodeBitSet::new(n as NumNodes);
        on_path.set_bit(s);
        enumerate_simple_paths(&adjacency, s, s, 0, &mut on_path, &mut best);
    }
    best
}

fn enumerate_simple_paths(
    adjacency: &[Vec<(Node, i64)>],
    source: Node,
    u: Node,
    cost: i64,
    on_path: &mut NodeBitSet,
    best: &mut Matrix<Distance<i64>>,
) {
    if Distance::Finite(cost) < best[(source, u)] {
        best[(source, u)] = Distance::Finite(cost);
    }

    for &(v, w) in &adjacency[u as usize] {
        if !on_path.set_bit(v) {
            enumerate_simple_paths(adjacency, source, v, cost + w, on_path, best);
            on_path.clear_bit(v);
        }
    }
}

/// Sum of the cheapest edge weights between consecutive vertices of `path`, or `None` if some
/// consecutive pair is not connected by an edge
pub fn walk_cost<L, G>(graph: &G, path: &[&L]) -> Option<i64>
where
    L: Ord + Clone,
    G: WeightedAdjacency<Label = L, Weight = i64>,
{
    path.iter()
        .tuple_windows()
        .map(|(&u, &v)| {
            graph
                .weighted_edges()
                .filter(|(s, t, _)| *s == u && *t == v)
                .map(|(_, _, w)| w)
                .min()
        })
        .sum()
}
