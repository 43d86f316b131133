use std::ops::{Index, IndexMut};

use crate::Node;

/// Dense square matrix stored row-major in a single buffer.
///
/// Indexed by `(row, column)` pairs of canonical node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates an `n x n` matrix with every cell set to `value`
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }
}

impl<T> Matrix<T> {
    /// Returns the number of rows (= number of columns)
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns *true* if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the cell `(i, j)` or `None` if out of range
    pub fn get(&self, i: Node, j: Node) -> Option<&T> {
        let (i, j) = (i as usize, j as usize);
        (i < self.n && j < self.n).then(|| &self.data[i * self.n + j])
    }

    /// Iterates over the diagonal cells
    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().step_by(self.n + 1)
    }
}

impl<T> Index<(Node, Node)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (Node, Node)) -> &Self::Output {
        debug_assert!((i as usize) < self.n && (j as usize) < self.n);
        &self.data[i as usize * self.n + j as usize]
    }
}

impl<T> IndexMut<(Node, Node)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (Node, Node)) -> &mut Self::Output {
        debug_assert!((i as usize) < self.n && (j as usize) < self.n);
        &mut self.data[i as usize * self.n + j as usize]
    }
}
