use super::*;

/// Next-hop matrix: `next[(i, j)]` is the first vertex after `i` on a shortest `i -> j` walk or
/// `None` if no path is known.
pub type NextHopMatrix = Matrix<Option<OptionalNode>>;

/// Reconstructs one shortest walk from canonical index `i` to canonical index `j` by repeatedly
/// following `next[(current, j)]`.
///
/// Returns `None` if
/// - `next[(i, j)]` is unset, i.e. there is no path,
/// - the walk hits an unset next hop before reaching `j`,
/// - the walk takes more than `n` hops without reaching `j`.
///
/// The last two cases can only occur if the walk touches a negative cycle.
/// The returned labels start with `ordering[i]` and end with `ordering[j]`.
pub fn reconstruct_path<'a, L>(
    i: Node,
    j: Node,
    next: &NextHopMatrix,
    ordering: &'a CanonicalOrdering<L>,
) -> Option<Vec<&'a L>> {
    (*next.get(i, j)?)?;

    let mut path = Vec::new();
    let mut current = i;
    while current != j {
        if path.len() >= ordering.len() {
            return None;
        }

        path.push(ordering.label(current)?);
        current = (*next.get(current, j)?)?.get();
    }
    path.push(ordering.label(j)?);

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(u: Node) -> Option<OptionalNode> {
        OptionalNode::new(u)
    }

    #[test]
    fn follows_chain() {
        // 0 -> 1 -> 2
        let ordering = CanonicalOrdering::new(&['a', 'b', 'c']);
        let mut next = NextHopMatrix::filled(3, None);
        for u in 0..3 {
            next[(u, u)] = hop(u);
        }
        next[(0, 1)] = hop(1);
        next[(0, 2)] = hop(1);
        next[(1, 2)] = hop(2);

        assert_eq!(
            reconstruct_path(0, 2, &next, &ordering),
            Some(vec![&'a', &'b', &'c'])
        );
        assert_eq!(reconstruct_path(1, 1, &next, &ordering), Some(vec![&'b']));
        assert_eq!(reconstruct_path(2, 0, &next, &ordering), None);
        assert_eq!(reconstruct_path(5, 0, &next, &ordering), None);
    }

    #[test]
    fn broken_chain_is_no_path() {
        let ordering = CanonicalOrdering::new(&[1, 2, 3]);
        let mut next = NextHopMatrix::filled(3, None);
        next[(0, 2)] = hop(1);

        assert_eq!(reconstruct_path(0, 2, &next, &ordering), None);
    }

    #[test]
    fn cyclic_chain_terminates() {
        let ordering = CanonicalOrdering::new(&[1, 2, 3]);
        let mut next = NextHopMatrix::filled(3, None);
        next[(0, 2)] = hop(1);
        next[(1, 2)] = hop(0);

        assert_eq!(reconstruct_path(0, 2, &next, &ordering), None);
    }
}
