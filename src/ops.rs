/*!
# Graph Container Contract

The engine only ever *reads* a graph. These traits are the narrow read contract it consumes; any
container implementing them can be handed to
[`FloydWarshall`](crate::algo::FloydWarshall). [`LabeledGraph`](crate::repr::LabeledGraph) is the
container shipped with this crate.
*/

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// Vertex identity. Labels are unique within a graph and their ascending order defines the
    /// canonical vertex ordering.
    type Label: Ord + Clone;

    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all vertex labels in insertion order
    fn vertices(&self) -> impl Iterator<Item = &Self::Label> + '_;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Whether edges are directed. Undirected graphs are still enumerated as symmetric pairs of
/// directed edges by [`WeightedAdjacency::weighted_edges`].
pub trait GraphType {
    /// Returns *true* if the graph was loaded as a directed graph
    fn is_directed(&self) -> bool;

    /// Returns *true* if the graph was loaded as an undirected graph
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Edge enumeration with weights.
pub trait WeightedAdjacency: GraphNodeOrder + GraphEdgeOrder {
    /// Weight attached to every edge
    type Weight: Copy;

    /// Returns an iterator over all directed edges `(source, target, weight)`.
    ///
    /// Edges are yielded in **insertion order**. Parallel edges are yielded individually; the
    /// engine resolves ties between them by this order.
    fn weighted_edges(
        &self,
    ) -> impl Iterator<Item = (&Self::Label, &Self::Label, Self::Weight)> + '_;

    /// Returns the number of outgoing edges of `u` or `None` if `u` is not a vertex
    fn degree_of(&self, u: &Self::Label) -> Option<usize>;

    /// Returns an iterator over the out-degrees of all vertices in insertion order
    fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices()
            .map(|u| self.degree_of(u).unwrap_or_default())
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> usize {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the average out-degree or `0.0` for an empty graph
    fn average_degree(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.number_of_edges() as f64 / self.number_of_nodes() as f64
        }
    }
}
