/*!
# Labeled Graph

[`LabeledGraph`] stores arbitrary orderable vertex labels and weighted edges in insertion order.
It is the container the generators' output is loaded into before it is handed to the engine.

```
use fwgraphs::prelude::*;

let (graph, diagnostics) = LabeledGraph::from_parts(
    ["a", "b", "c"],
    [("a", "b", 3), ("b", "c", 4), ("c", "x", 1)],
    true,
);

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 2);
assert_eq!(diagnostics.len(), 1);
```
*/

use std::{collections::BTreeMap, fmt::Debug};

use crate::{diagnostics::*, gens::WeightedInstance, ops::*, *};

/// A graph over labels `L` with edge weights `W`.
///
/// Undirected graphs store every inserted edge as the two directed edges `(u, v)` and `(v, u)`
/// (in that order).
#[derive(Debug, Clone)]
pub struct LabeledGraph<L, W> {
    directed: bool,
    labels: Vec<L>,
    index_of: BTreeMap<L, Node>,
    edges: Vec<WeightedEdge<Node, W>>,
    out_degrees: Vec<usize>,
}

impl<L, W> LabeledGraph<L, W>
where
    L: Ord + Clone,
    W: Copy,
{
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            labels: Vec::new(),
            index_of: BTreeMap::new(),
            edges: Vec::new(),
            out_degrees: Vec::new(),
        }
    }

    /// Inserts a vertex.
    /// Returns *true* exactly if the label was not present previously.
    pub fn insert_vertex(&mut self, label: L) -> bool {
        if self.index_of.contains_key(&label) {
            return false;
        }

        self.index_of.insert(label.clone(), self.labels.len() as Node);
        self.labels.push(label);
        self.out_degrees.push(0);
        true
    }

    /// Returns *true* if `label` is a vertex of the graph
    pub fn contains_vertex(&self, label: &L) -> bool {
        self.index_of.contains_key(label)
    }

    /// Inserts the edge `(source, target)`; for undirected graphs also `(target, source)`.
    /// Parallel edges are kept.
    ///
    /// Returns *false* and leaves the graph untouched if an endpoint is unknown.
    pub fn insert_edge(&mut self, source: &L, target: &L, weight: W) -> bool {
        let (Some(&u), Some(&v)) = (self.index_of.get(source), self.index_of.get(target)) else {
            return false;
        };

        self.push_edge(u, v, weight);
        if !self.directed {
            self.push_edge(v, u, weight);
        }
        true
    }

    fn push_edge(&mut self, u: Node, v: Node, weight: W) {
        self.edges.push(WeightedEdge::new(u, v, weight));
        self.out_degrees[u as usize] += 1;
    }

    /// Returns the label of the vertex inserted as the `u`-th one
    pub fn label_at(&self, u: Node) -> Option<&L> {
        self.labels.get(u as usize)
    }
}

impl<L, W> LabeledGraph<L, W>
where
    L: Ord + Clone + Debug,
    W: Copy,
{
    /// Builds a graph from a vertex list and a list of `(source, target, weight)` triples.
    ///
    /// Malformed input never aborts the construction: duplicate vertices and edges with an
    /// unknown endpoint are skipped and reported in the returned [`Diagnostics`].
    pub fn from_parts<V, E, T>(vertices: V, edges: E, directed: bool) -> (Self, Diagnostics<L>)
    where
        V: IntoIterator<Item = L>,
        E: IntoIterator<Item = T>,
        T: Into<WeightedEdge<L, W>>,
    {
        let mut graph = Self::new(directed);
        let mut diagnostics = Diagnostics::new();

        for label in vertices {
            if !graph.contains_vertex(&label) {
                graph.insert_vertex(label);
            } else {
                diagnostics.push(Diagnostic::DuplicateVertex(label));
            }
        }

        for edge in edges {
            let WeightedEdge {
                source,
                target,
                weight,
            } = edge.into();
            if !graph.insert_edge(&source, &target, weight) {
                diagnostics.push(Diagnostic::UnknownEndpoint { source, target });
            }
        }

        (graph, diagnostics)
    }
}

impl LabeledGraph<Node, i64> {
    /// Loads generator output. Directedness is chosen here: generators only emit one edge per
    /// undirected pair.
    pub fn from_instance(instance: &WeightedInstance, directed: bool) -> (Self, Diagnostics<Node>) {
        Self::from_parts(
            instance.vertices.iter().copied(),
            instance.edges.iter().copied(),
            directed,
        )
    }
}

impl<L, W> GraphNodeOrder for LabeledGraph<L, W>
where
    L: Ord + Clone,
{
    type Label = L;

    fn number_of_nodes(&self) -> usize {
        self.labels.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }
}

impl<L, W> GraphEdgeOrder for LabeledGraph<L, W> {
    fn number_of_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<L, W> GraphType for LabeledGraph<L, W> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<L, W> WeightedAdjacency for LabeledGraph<L, W>
where
    L: Ord + Clone,
    W: Copy,
{
    type Weight = W;

    fn weighted_edges(&self) -> impl Iterator<Item = (&L, &L, W)> + '_ {
        self.edges.iter().map(|e| {
            (
                &self.labels[e.source as usize],
                &self.labels[e.target as usize],
                e.weight,
            )
        })
    }

    fn degree_of(&self, u: &L) -> Option<usize> {
        self.index_of
            .get(u)
            .map(|&idx| self.out_degrees[idx as usize])
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let (graph, diag) = LabeledGraph::from_parts(
            [3u32, 1, 2],
            [(3, 1, 5.0), (1, 2, 1.5), (3, 1, 2.0)],
            true,
        );

        assert!(diag.is_empty());
        assert!(graph.is_directed());
        assert_eq!(graph.vertices().copied().collect_vec(), vec![3, 1, 2]);
        assert_eq!(
            graph.weighted_edges().map(|(u, v, w)| (*u, *v, w)).collect_vec(),
            vec![(3, 1, 5.0), (1, 2, 1.5), (3, 1, 2.0)]
        );
        assert_eq!(graph.degree_of(&3), Some(2));
        assert_eq!(graph.degree_of(&2), Some(0));
        assert_eq!(graph.degree_of(&7), None);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn undirected_edges_are_symmetric_pairs() {
        let (graph, _) = LabeledGraph::from_parts(["a", "b"], [("a", "b", 4)], false);

        assert!(graph.is_undirected());
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(
            graph.weighted_edges().map(|(u, v, w)| (*u, *v, w)).collect_vec(),
            vec![("a", "b", 4), ("b", "a", 4)]
        );
        assert_eq!(graph.degree_of(&"a"), Some(1));
        assert_eq!(graph.degree_of(&"b"), Some(1));
    }

    #[test]
    fn malformed_input_is_skipped() {
        let (graph, diag) = LabeledGraph::from_parts(
            [1u32, 2, 2, 3],
            [(1, 2, 1), (2, 4, 1), (5, 1, 1), (2, 3, 1)],
            true,
        );

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(
            diag.into_vec(),
            vec![
                Diagnostic::DuplicateVertex(2),
                Diagnostic::UnknownEndpoint {
                    source: 2,
                    target: 4
                },
                Diagnostic::UnknownEndpoint {
                    source: 5,
                    target: 1
                },
            ]
        );
    }

    #[test]
    fn empty_graph() {
        let graph: LabeledGraph<u32, i64> = LabeledGraph::new(true);
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
        assert_eq!(graph.average_degree(), 0.0);
        assert_eq!(graph.label_at(0), None);
    }
}
