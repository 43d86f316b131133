use super::*;

/// Compact unweighted, undirected adjacency array over nodes `0..n`.
///
/// Generators use it to reason about the connectivity of the topology they build before labels
/// and weights are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    neighbors: Vec<Vec<Node>>,
    number_of_edges: usize,
}

impl AdjArray {
    /// Creates an empty graph with `n` singleton nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            neighbors: vec![Vec::new(); n as usize],
            number_of_edges: 0,
        }
    }

    /// Create a graph from a number of nodes and an iterator over (undirected) Edges
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds the undirected edge `{u, v}`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.neighbors[u as usize].push(v);
        if u != v {
            self.neighbors[v as usize].push(u);
        }
        self.number_of_edges += 1;
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.neighbors.len() as NumNodes
    }

    /// Return the number of nodes as usize
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns *true* if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the number of undirected edges
    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    /// Returns an iterator over V.
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over the neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors[u as usize].iter().copied()
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors[u as usize].len() as NumNodes
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn symmetric_neighborhoods() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (3, 3)]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![3]);
        assert_eq!(graph.degree_of(0), 1);
        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 2, 3]);
    }
}
