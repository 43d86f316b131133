/*!
# Hypercube

Builds the `d`-dimensional hypercube with `d = ceil(log2(n))`: `2^d` vertices, adjacent iff their
indices differ in exactly one bit. If `2^d > n`, a uniform random sample of `2^d - n` vertices is
removed. As this may disconnect the cube, a BFS from the first surviving vertex afterwards discards
everything outside its component. The result is always a single connected component, but may have
fewer than `n` vertices; [`Metadata::actual_vertices`] and [`Metadata::removed_vertices`] record
this.

Survivors are relabelled `1..=k` in ascending order of their hypercube index.
*/

use rand::seq::index;

use super::*;
use crate::algo::Traversal;

/// Largest supported dimension; `2^d` must fit into a [`NumNodes`]
pub const MAX_DIMENSION: u32 = 31;

/// Generator for (thinned) hypercube graphs.
#[derive(Debug, Copy, Clone, Default)]
pub struct Hypercube {
    n: NumNodes,
}

impl Hypercube {
    /// Creates a new hypercube generator with default settings (`n = 0`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `ceil(log2(n))`, the dimension of the smallest hypercube with at least `n` vertices
    pub fn dimension(&self) -> u32 {
        self.n.max(1).next_power_of_two().trailing_zeros()
    }
}

impl NumNodesGen for Hypercube {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl TopologyGenerator for Hypercube {
    fn topology<R>(&self, rng: &mut R) -> Result<Topology>
    where
        R: Rng,
    {
        invalid_unless!(self.n >= 1, "a hypercube needs at least one vertex");
        invalid_unless!(
            self.n <= 1 << MAX_DIMENSION,
            "a hypercube supports at most 2^{MAX_DIMENSION} vertices, got {}",
            self.n
        );

        let dim = self.dimension();
        let size = 1usize << dim;

        let mut present = vec![true; size];
        for removed in index::sample(rng, size, size - self.n as usize) {
            present[removed] = false;
        }

        // position among the survivors, in ascending hypercube index
        let mut position = vec![INVALID_NODE; size];
        let mut survivors: Vec<usize> = Vec::with_capacity(self.n as usize);
        for b in (0..size).filter(|&b| present[b]) {
            position[b] = survivors.len() as Node;
            survivors.push(b);
        }

        let mut edges = Vec::new();
        for &b in &survivors {
            for bit in 0..dim {
                let nb = b ^ (1 << bit);
                if nb > b && present[nb] {
                    edges.push(Edge(position[b], position[nb]));
                }
            }
        }

        let kept = AdjArray::from_edges(survivors.len() as NumNodes, edges.iter().copied())
            .component_of(0);

        let mut relabel = vec![INVALID_NODE; survivors.len()];
        let mut k: NumNodes = 0;
        for u in kept.iter_set_bits() {
            relabel[u as usize] = k;
            k += 1;
        }

        let edges = edges
            .into_iter()
            .filter(|&Edge(u, v)| kept.get_bit(u) && kept.get_bit(v))
            .map(|Edge(u, v)| Edge(relabel[u as usize], relabel[v as usize]))
            .collect();

        let mut topology = Topology::from_nodes(self.n, k, edges);
        topology.metadata.dimension = Some(dim);
        topology.metadata.removed_vertices = Some(size as NumNodes - k);

        if k < self.n {
            debug!(
                "hypercube of dimension {dim} pruned to {k} of {} requested vertices",
                self.n
            );
        }

        Ok(topology)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn full_hypercubes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for dim in 0..8u32 {
            let n = 1 << dim;
            let cube = Hypercube::new().nodes(n).topology(rng).unwrap();

            assert_eq!(cube.number_of_nodes(), n);
            assert_eq!(cube.number_of_edges(), (dim * n / 2) as usize);
            assert_eq!(cube.metadata.dimension, Some(dim));
            assert_eq!(cube.metadata.removed_vertices, Some(0));

            let adj = cube.to_adj_array();
            assert!(adj.vertices().all(|u| adj.degree_of(u) == dim));
        }
    }

    #[test]
    fn thinned_hypercubes_stay_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for n in 1..140 {
            for _ in 0..5 {
                let cube = Hypercube::new().nodes(n).topology(rng).unwrap();

                assert!(cube.number_of_nodes() >= 1);
                assert!(cube.number_of_nodes() <= n);
                assert_eq!(
                    cube.metadata.actual_vertices as usize,
                    cube.vertices.len()
                );
                assert_eq!(
                    cube.metadata.removed_vertices,
                    Some((1 << Hypercube::new().nodes(n).dimension()) - cube.number_of_nodes())
                );
                assert_eq!(cube.metadata.raw_edges, cube.edges.len());
                assert!(cube.to_adj_array().is_connected(), "n = {n}");
            }
        }
    }

    #[test]
    fn edges_are_unique_and_normalized() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let cube = Hypercube::new().nodes(100).topology(rng).unwrap();

        assert!(cube.edges.iter().all(|e| e.0 < e.1));
        assert!(cube.edges.iter().all_unique());
        let k = cube.number_of_nodes();
        assert!(cube.edges.iter().all(|e| e.1 <= k));
    }

    #[test]
    fn dimensions() {
        assert_eq!(Hypercube::new().nodes(1).dimension(), 0);
        assert_eq!(Hypercube::new().nodes(2).dimension(), 1);
        assert_eq!(Hypercube::new().nodes(5).dimension(), 3);
        assert_eq!(Hypercube::new().nodes(8).dimension(), 3);
        assert_eq!(Hypercube::new().nodes(500).dimension(), 9);
    }

    #[test]
    fn invalid_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        assert!(Hypercube::new().topology(rng).is_err());
        assert!(Hypercube::new().nodes(u32::MAX).topology(rng).is_err());
    }
}
