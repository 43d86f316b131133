/*!
Breadth-first traversal and the connectivity queries derived from it.

The generators rely on these to prune topologies down to a single connected component; the tests
use them to check the connectivity guarantees of every generator.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over an [`AdjArray`], visiting nodes in breadth-first order from a
/// given starting node.
pub struct BFS<'a> {
    graph: &'a AdjArray,
    visited: NodeBitSet,
    sequencer: VecDeque<Node>,
}

impl<'a> BFS<'a> {
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a AdjArray, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.number_of_nodes());
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: VecDeque::from(vec![start]),
        }
    }

    /// Runs the search to completion and returns the set of visited nodes
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl Iterator for BFS<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.len()),
        )
    }
}

/// Traversal-derived queries exposed directly on graphs
pub trait Traversal {
    /// Returns an iterator traversing nodes in breadth-first-search order
    fn bfs(&self, start: Node) -> BFS<'_>;

    /// Returns the nodes of the component containing `start`
    fn component_of(&self, start: Node) -> NodeBitSet {
        self.bfs(start).into_visited()
    }

    /// Returns *true* if the graph consists of at most one connected component
    fn is_connected(&self) -> bool;
}

impl Traversal for AdjArray {
    fn bfs(&self, start: Node) -> BFS<'_> {
        BFS::new(self, start)
    }

    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1    4 - 3
        //  \ 0 /
        let graph = AdjArray::from_edges(5, [(2, 1), (1, 0), (4, 3), (0, 4), (2, 3)]);

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order, vec![1, 2, 0, 3, 4]);
        assert!(graph.is_connected());
    }

    #[test]
    fn components() {
        let graph = AdjArray::from_edges(6, [(0, 1), (1, 2), (3, 4)]);

        assert!(!graph.is_connected());
        let component = graph.component_of(4);
        assert_eq!(component.iter_set_bits().collect_vec(), vec![3, 4]);
        assert_eq!(component.cardinality(), 2);
        assert!(component.get_bit(3));
        assert!(!component.get_bit(0));
        assert_eq!(graph.bfs(5).collect_vec(), vec![5]);

        // discovered but not yet yielded nodes count as visited
        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.next(), Some(0));
        assert_eq!(bfs.size_hint(), (1, Some(5)));
        assert_eq!(bfs.into_visited().cardinality(), 3);
    }

    #[test]
    fn trivial_graphs() {
        assert!(AdjArray::new(0).is_connected());
        assert!(AdjArray::new(1).is_connected());
        assert!(!AdjArray::new(2).is_connected());
    }
}
