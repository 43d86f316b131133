use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::Node;

/// An unweighted edge between two vertex labels as produced by the topology generators.
/// It is up to the loader whether an Edge is treated as directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Number of edges in a graph or edge list
pub type NumEdges = usize;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// An edge `source -> target` carrying a weight.
///
/// Serialized as the flat triple `[source, target, weight]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(L, L, W)", into = "(L, L, W)")]
#[serde(bound(
    serialize = "L: Clone + Serialize, W: Clone + Serialize",
    deserialize = "L: Deserialize<'de>, W: Deserialize<'de>"
))]
pub struct WeightedEdge<L, W> {
    pub source: L,
    pub target: L,
    pub weight: W,
}

impl<L, W> WeightedEdge<L, W> {
    pub fn new(source: L, target: L, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<L: Display, W: Display> Display for WeightedEdge<L, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.source, self.target, self.weight)
    }
}

impl<L, W> From<(L, L, W)> for WeightedEdge<L, W> {
    fn from(value: (L, L, W)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<L, W> From<WeightedEdge<L, W>> for (L, L, W) {
    fn from(value: WeightedEdge<L, W>) -> Self {
        (value.source, value.target, value.weight)
    }
}
