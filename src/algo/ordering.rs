use super::*;

/// The canonical vertex ordering: all labels sorted ascending, label at position `i` has index `i`.
///
/// This ordering is the spine of every matrix produced by the engine and is part of the public
/// contract: two runs over the same label set always assign the same indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrdering<L> {
    labels: Vec<L>,
}

impl<L: Ord + Clone> CanonicalOrdering<L> {
    /// Sorts the given labels ascending. Duplicates are collapsed.
    pub fn new<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let mut labels: Vec<L> = labels.into_iter().cloned().collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// Builds the ordering of a graph's vertex set
    pub fn of_graph<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder<Label = L>,
    {
        Self::new(graph.vertices())
    }
}

impl<L: Ord> CanonicalOrdering<L> {
    /// Returns the canonical index of `label` or `None` if it is not a vertex
    pub fn index_of(&self, label: &L) -> Option<Node> {
        self.labels.binary_search(label).ok().map(|i| i as Node)
    }
}

impl<L> CanonicalOrdering<L> {
    /// Returns the label with canonical index `u`
    pub fn label(&self, u: Node) -> Option<&L> {
        self.labels.get(u as usize)
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if there are no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over the canonical indices `0..n`
    pub fn indices(&self) -> std::ops::Range<Node> {
        0..self.labels.len() as Node
    }

    /// Returns the labels indexed by canonical index
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<L> std::ops::Index<Node> for CanonicalOrdering<L> {
    type Output = L;

    fn index(&self, u: Node) -> &Self::Output {
        &self.labels[u as usize]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn sorted_ascending() {
        let ordering = CanonicalOrdering::new(&["d", "a", "c", "b"]);

        assert_eq!(ordering.labels(), &["a", "b", "c", "d"]);
        assert_eq!(ordering.index_of(&"c"), Some(2));
        assert_eq!(ordering.index_of(&"x"), None);
        assert_eq!(ordering.label(3), Some(&"d"));
        assert_eq!(ordering[0], "a");
        assert_eq!(ordering.indices().collect_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn independent_of_insertion_order() {
        let a = CanonicalOrdering::new(&[5u32, 3, 9, 1]);
        let b = CanonicalOrdering::new(&[9u32, 1, 5, 3]);
        assert_eq!(a, b);
    }
}
