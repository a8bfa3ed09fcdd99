//! Row reduction, rank, null-space bases, and independence tests over an
//! exact field.
//!
//! All routines are generic over [`Field`](crate::math::Field); exact
//! arithmetic makes the zero test in pivot selection decidable, so no
//! tolerances are involved.

use num_traits::{One, Zero};

use crate::math::{Field, Matrix};

/// Column index of the first nonzero entry of `row`, if any.
fn first_nonzero<T: Field>(m: &Matrix<T>, row: usize) -> Option<usize> {
    (0..m.ncols()).find(|&k| !m[(row, k)].is_zero())
}

/// Reduced row echelon form of `a`.
///
/// Processes rows top to bottom. Each step selects, among the remaining
/// rows, the one whose first nonzero entry is leftmost (ties broken by row
/// order), swaps it up, scales its pivot to one, and eliminates the pivot
/// column from every other row. The result is fully reduced, so
/// `row_reduce(row_reduce(a)) == row_reduce(a)`.
pub fn row_reduce<T: Field>(a: &Matrix<T>) -> Matrix<T> {
    let mut r = a.clone();
    let (nrows, ncols) = r.shape();

    for i in 0..nrows {
        let mut pivot: Option<(usize, usize)> = None; // (column, row)
        for j in i..nrows {
            if let Some(k) = first_nonzero(&r, j) {
                match pivot {
                    Some((col, _)) if col <= k => {}
                    _ => pivot = Some((k, j)),
                }
            }
        }
        let Some((pivot_col, pivot_row)) = pivot else {
            // All remaining rows are zero.
            break;
        };
        r.swap_rows(i, pivot_row);

        let scale = r[(i, pivot_col)].clone();
        for k in pivot_col..ncols {
            r[(i, k)] = r[(i, k)].clone() / scale.clone();
        }

        for j in 0..nrows {
            if j == i || r[(j, pivot_col)].is_zero() {
                continue;
            }
            let c = r[(j, pivot_col)].clone();
            for k in 0..ncols {
                r[(j, k)] = r[(j, k)].clone() - r[(i, k)].clone() * c.clone();
            }
        }
    }

    r
}

/// Number of nonzero rows of the reduced row echelon form of `a`.
pub fn rank<T: Field>(a: &Matrix<T>) -> usize {
    let r = row_reduce(a);
    (0..r.nrows())
        .filter(|&i| first_nonzero(&r, i).is_some())
        .count()
}

/// Fundamental system of solutions: a basis of `{x : a x = 0}` as column
/// vectors of length `a.ncols()`.
///
/// Columns of the echelon form split into pivot columns (those holding a
/// leading one) and free columns. Each free column `f` contributes one basis
/// vector: `1` at `f`, `-R[row(j)][f]` at every pivot column `j`, zero
/// elsewhere. The result has `a.ncols() - rank(a)` vectors; it is empty when
/// every column is a pivot.
pub fn fss<T: Field>(a: &Matrix<T>) -> Vec<Matrix<T>> {
    let r = row_reduce(a);
    let (nrows, ncols) = r.shape();

    // pivot_row[c] is the echelon row whose leading one sits in column c.
    let mut pivot_row: Vec<Option<usize>> = vec![None; ncols];
    for i in 0..nrows {
        if let Some(k) = first_nonzero(&r, i) {
            pivot_row[k] = Some(i);
        }
    }

    let mut basis = Vec::new();
    for f in 0..ncols {
        if pivot_row[f].is_some() {
            continue;
        }
        let mut v = Matrix::zeros(ncols, 1);
        v[(f, 0)] = T::one();
        for (col, row) in pivot_row.iter().enumerate() {
            if let Some(row) = row {
                v[(col, 0)] = -r[(*row, f)].clone();
            }
        }
        basis.push(v);
    }

    basis
}

/// True iff the given column vectors are linearly independent.
///
/// Stacks the vectors as rows of a `k x n` matrix and compares its rank to
/// `k`. An empty list is independent.
pub fn independent_vectors<T: Field>(vectors: &[Matrix<T>]) -> bool {
    let Some(first) = vectors.first() else {
        return true;
    };
    let dim = first.nrows();
    let mut rows = Vec::with_capacity(vectors.len());
    for v in vectors {
        assert_eq!(v.ncols(), 1, "independence test expects column vectors");
        assert_eq!(v.nrows(), dim, "independence test expects equal dimensions");
        rows.push(v.as_slice().to_vec());
    }
    let stacked =
        Matrix::from_rows(rows).expect("stacked vectors form a rectangular matrix");
    rank(&stacked) == vectors.len()
}
