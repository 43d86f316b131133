/*!
# Node Representation

A `Node` is the canonical index of a vertex: the position of its label in the ascending
[`CanonicalOrdering`](crate::algo::CanonicalOrdering). Generators also use `Node` values directly as
vertex labels (`1..=n`).

We choose `Node = u32` as a dense `n x n` matrix is infeasible long before `2^32` vertices.
*/

use std::num::NonZero;

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, a next-hop matrix of `Option<Node>` would
/// be twice the size. This instead uses the `NonZero`-Wrapper to assign a constant value to the
/// `None`-case so that `Option<OptionalNodeImpl<N>>` has the same size as `Node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
