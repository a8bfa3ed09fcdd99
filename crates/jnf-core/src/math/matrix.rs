use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::error::ShapeError;
use crate::math::Field;

/// Dense matrix in row-major order.
///
/// Value semantics throughout: arithmetic operators return fresh matrices,
/// the compound-assignment forms mutate in place. Shape mismatches in the
/// operators are caller contract violations and panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows; the shape is taken from the input.
    ///
    /// Fails if there are no rows, the first row is empty, or a later row
    /// has a different length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if nrows == 0 || ncols == 0 {
            return Err(ShapeError::Empty);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(ShapeError::Ragged {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Build a column vector (shape `(n, 1)`) from its entries.
    pub fn column_from(entries: Vec<T>) -> Self {
        let rows = entries.len();
        assert!(rows > 0, "column vector requires at least one entry");
        Self {
            data: entries,
            rows,
            cols: 1,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows && b < self.rows, "row index out of bounds");
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.data.swap(a * self.cols + k, b * self.cols + k);
        }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self[(i, j)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T: Zero + Clone> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix shape must be non-empty");
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// `x` times the identity: `x` on the main diagonal, zero elsewhere.
    pub fn scalar(n: usize, x: T) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = x.clone();
        }
        m
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    pub fn identity(n: usize) -> Self {
        Self::scalar(n, T::one())
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Sum of the main diagonal.
    ///
    /// # Panics
    ///
    /// Panics on a non-square matrix; the trace is undefined there.
    pub fn trace(&self) -> T {
        assert!(self.is_square(), "trace of a non-square matrix is undefined");
        let mut acc = T::zero();
        for i in 0..self.rows {
            acc = acc + self[(i, i)].clone();
        }
        acc
    }
}

impl<T: Field> Matrix<T> {
    /// Every entry scaled by `x`.
    pub fn scale(&self, x: &T) -> Matrix<T> {
        Matrix {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * x.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// `k`-th power of a square matrix; `k = 0` gives the identity.
    pub fn pow(&self, k: usize) -> Matrix<T> {
        assert!(self.is_square(), "matrix power requires a square matrix");
        if k == 0 {
            return Matrix::identity(self.rows);
        }
        let mut acc = self.clone();
        for _ in 1..k {
            acc = &acc * self;
        }
        acc
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: Field> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix addition requires identical shapes"
        );
        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Field> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Field> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix addition requires identical shapes"
        );
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = a.clone() + b.clone();
        }
    }
}

impl<T: Field> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix subtraction requires identical shapes"
        );
        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Field> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Field> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix subtraction requires identical shapes"
        );
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = a.clone() - b.clone();
        }
    }
}

impl<T: Field> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix multiplication requires inner dimensions to agree"
        );
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc + self[(i, k)].clone() * rhs[(k, j)].clone();
                }
                out[(i, j)] = acc;
            }
        }
        out
    }
}

impl<T: Field> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Field> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One row per line, entries separated (and terminated) by a single
    /// space. This is the exact byte format consumed by the basis report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for entry in self.row_slice(i) {
                write!(f, "{} ", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
