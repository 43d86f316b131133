use crate::{Node, NumNodes};

/// Disjoint-set forest over nodes `0..n` with path halving.
///
/// `union` attaches the root of the first argument below the root of the second. No rank
/// heuristic is applied: the resulting forest (and thus the spanning trees built from it) only
/// depends on the order of the union calls.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    number_of_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            number_of_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets of `u` and `v`.
    /// Returns *true* exactly if they were disjoint before.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        self.parent[ru as usize] = rv;
        self.number_of_sets -= 1;
        true
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }
}
