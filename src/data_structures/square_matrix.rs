use crate::Result;

/// A dense square matrix stored as a flat row-major buffer.
///
/// The dimension is fixed at construction; `(i, j)` maps to slot `i * n + j`.
/// Indices are a caller obligation and only checked by debug assertions,
/// mirroring the contract of the underlying `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T> SquareMatrix<T>
where
    T: Clone,
{
    /// Creates an `n` x `n` matrix with every cell set to `fill`.
    ///
    /// The backing buffer is reserved up front; if the system cannot provide
    /// the memory the error is propagated and no matrix is built.
    pub fn new(n: usize, fill: T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(n * n)?;
        data.resize(n * n, fill);
        Ok(SquareMatrix { n, data })
    }
}

impl<T> SquareMatrix<T>
where
    T: Copy,
{
    /// Returns the value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.n && j < self.n);
        self.data[self.n * i + j]
    }

    /// Sets the value at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i < self.n && j < self.n);
        self.data[self.n * i + j] = value;
    }
}

impl<T> SquareMatrix<T> {
    /// Returns the dimension of the matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.n);
        &self.data[self.n * i..self.n * (i + 1)]
    }

    /// Returns the whole backing buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
