/*!
# Grid

Lays out `cols = ceil(sqrt(n))` columns and `ceil(n / cols)` rows of lattice cells, keeps exactly
the first `n` cells in row-major order and connects each cell to its right and lower neighbor
(optionally also to both lower diagonals). The result has `O(n)` edges and is connected for every
`n >= 1`.

```
use fwgraphs::gens::*;

let grid = Grid::new().nodes(9).topology(&mut rand::rng()).unwrap();

assert_eq!(grid.vertices, (1..=9).collect::<Vec<_>>());
assert_eq!(grid.metadata.raw_edges, 12);
```
*/

use super::*;

/// Row-major lattice generator. Deterministic: the passed rng is never drawn from.
#[derive(Debug, Copy, Clone, Default)]
pub struct Grid {
    n: NumNodes,
    diagonals: bool,
}

impl Grid {
    /// Creates a new grid generator with default settings (`n = 0`, no diagonals)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether lower-left and lower-right neighbors are connected as well
    pub fn set_diagonals(&mut self, diagonals: bool) {
        self.diagonals = diagonals;
    }

    /// Sets whether lower-left and lower-right neighbors are connected as well
    pub fn diagonals(mut self, diagonals: bool) -> Self {
        self.set_diagonals(diagonals);
        self
    }
}

impl NumNodesGen for Grid {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl TopologyGenerator for Grid {
    fn topology<R>(&self, _rng: &mut R) -> Result<Topology>
    where
        R: Rng,
    {
        invalid_unless!(self.n >= 1, "a grid needs at least one vertex");

        Ok(Topology::from_nodes(
            self.n,
            self.n,
            lattice_edges(self.n, self.diagonals),
        ))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::Traversal;

    #[test]
    fn three_by_three() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let grid = Grid::new().nodes(9).topology(rng).unwrap();

        assert_eq!(grid.number_of_nodes(), 9);
        assert_eq!(grid.number_of_edges(), 12);
        assert_eq!(grid.metadata.raw_edges, 12);
        assert_eq!(grid.metadata.actual_vertices, 9);
        assert_eq!(&grid.edges[..4], &[Edge(1, 2), Edge(1, 4), Edge(2, 3), Edge(2, 5)]);

        // two diagonals in each of the 4 unit squares
        let with_diagonals = Grid::new().nodes(9).diagonals(true).topology(rng).unwrap();
        assert_eq!(with_diagonals.number_of_edges(), 20);
    }

    #[test]
    fn always_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for n in 1..80 {
            for diagonals in [false, true] {
                let grid = Grid::new().nodes(n).diagonals(diagonals).topology(rng).unwrap();
                assert_eq!(grid.number_of_nodes(), n);
                assert!(grid.to_adj_array().is_connected(), "n = {n}");
            }
        }
    }

    #[test]
    fn rejects_empty() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        assert!(matches!(
            Grid::new().topology(rng),
            Err(Error::InvalidParameter(_))
        ));
    }
}
