//! Jordan Normal Form driver.
//!
//! Consumes a square rational matrix together with a full factorization of
//! its characteristic polynomial and produces the Jordan block sizes and a
//! Jordan basis. The factorization is trusted: the driver does not verify it
//! and the basis search may not terminate on an inconsistent spectrum.

use log::{debug, info, trace};
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::linalg::{fss, independent_vectors, rank};
use crate::math::{Matrix, Rational};

/// Factored characteristic polynomial: `(lambda, multiplicity)` pairs with
/// multiplicities summing to the matrix dimension.
pub type Spectrum = Vec<(Rational, usize)>;

/// One Jordan block: its eigenvalue and its size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub lambda: Rational,
    pub size: usize,
}

/// Result of a decomposition: the cell list (one entry per Jordan block, in
/// spectrum order, sizes ascending) and the Jordan basis.
///
/// The basis holds `n` column vectors; the run of `cell.size` vectors
/// belonging to a cell is a chain `v, Bv, ..., B^{s-1}v` with
/// `B = A - lambda I`.
#[derive(Clone, Debug, PartialEq)]
pub struct JordanForm {
    pub cells: Vec<Cell>,
    pub basis: Vec<Matrix<Rational>>,
}

/// Compute the Jordan Normal Form of `a`.
///
/// # Arguments
///
/// * `a` - The square matrix to decompose.
/// * `spectrum` - The factored characteristic polynomial of `a`. Trusted,
///   not verified.
/// * `seed` - Seed for the randomized basis search. A fixed seed makes the
///   result (and hence the rendered reports) reproducible byte for byte;
///   `None` seeds from system entropy.
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn decompose(a: &Matrix<Rational>, spectrum: &Spectrum, seed: Option<u64>) -> JordanForm {
    assert!(a.is_square(), "Jordan decomposition requires a square matrix");
    let n = a.nrows();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cells = block_sizes(a, spectrum);
    let basis = jordan_basis(a, &cells, &mut rng);

    JordanForm { cells, basis }
}

/// Extract the Jordan block sizes from the rank sequence of powers of
/// `B = A - lambda I`.
///
/// `dim ker B^k = n - rank(B^k)` is concave in `k`, and the number of blocks
/// of size exactly `s` is the second difference
/// `rank(B^{s-1}) + rank(B^{s+1}) - 2 rank(B^s)`.
fn block_sizes(a: &Matrix<Rational>, spectrum: &Spectrum) -> Vec<Cell> {
    let n = a.nrows();
    let mut cells = Vec::with_capacity(n);

    for (lambda, multiplicity) in spectrum {
        let b = a - &Matrix::scalar(n, lambda.clone());

        // rank(B^k) for k = 0..=n+1; the powers are independent, so the
        // tabulation runs in parallel and the result order is fixed.
        let ranks: Vec<usize> = (0..=n + 1)
            .into_par_iter()
            .map(|k| rank(&b.pow(k)))
            .collect();
        debug!("lambda {}: rank sequence {:?}", lambda, ranks);

        for size in 1..=*multiplicity {
            let count = ranks[size - 1] + ranks[size + 1] - 2 * ranks[size];
            if count == 0 {
                continue;
            }
            info!(
                "lambda {}: {} block(s) of size {}",
                lambda, count, size
            );
            for _ in 0..count {
                cells.push(Cell {
                    lambda: lambda.clone(),
                    size,
                });
            }
        }
    }

    cells
}

/// Build one chain per cell and concatenate them in cell order.
///
/// For a cell `(lambda, s)`, a basis `K` of `ker B^s` is computed and a seed
/// vector `v = sum alpha_j K_j` is searched by an incremental random walk
/// over the coefficients: start at zero, bump a uniformly random coefficient
/// by one, rebuild the chain `v, Bv, ..., B^{s-1}v`, and accept the first
/// chain that is independent jointly with the vectors accepted so far. The
/// joint test is what keeps repeated cells of one eigenvalue from emitting
/// overlapping chains. A generic point of `ker B^s` generates a maximal
/// chain, so the walk terminates with probability one.
///
/// Chains are grown largest-first: a small cell searched first could claim
/// an eigenvector that a later, longer chain of the same eigenvalue is
/// forced to end on, and the joint test would then never accept. The chains
/// are still emitted in cell-list order.
fn jordan_basis(
    a: &Matrix<Rational>,
    cells: &[Cell],
    rng: &mut StdRng,
) -> Vec<Matrix<Rational>> {
    let n = a.nrows();
    let mut order: Vec<usize> = (0..cells.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(cells[i].size));

    let mut basis: Vec<Matrix<Rational>> = Vec::with_capacity(n);
    let mut chains: Vec<Vec<Matrix<Rational>>> = vec![Vec::new(); cells.len()];

    for &index in &order {
        let cell = &cells[index];
        let b = a - &Matrix::scalar(n, cell.lambda.clone());
        let kernel = fss(&b.pow(cell.size));
        debug!(
            "lambda {} size {}: generalized eigenspace dimension {}",
            cell.lambda,
            cell.size,
            kernel.len()
        );

        let mut coefficients = vec![Rational::zero(); kernel.len()];
        loop {
            let bumped = rng.gen_range(0..coefficients.len());
            coefficients[bumped] += Rational::one();

            let mut v = Matrix::zeros(n, 1);
            for (basis_vec, coeff) in kernel.iter().zip(&coefficients) {
                v += &basis_vec.scale(coeff);
            }

            let mut chain = vec![v];
            for _ in 1..cell.size {
                let next = &b * &chain[chain.len() - 1];
                chain.push(next);
            }

            let mut candidate = basis.clone();
            candidate.extend(chain.iter().cloned());
            if independent_vectors(&candidate) {
                basis.extend(chain.iter().cloned());
                chains[index] = chain;
                break;
            }
            trace!(
                "lambda {} size {}: dependent chain, coefficients {:?}",
                cell.lambda,
                cell.size,
                coefficients
            );
        }
    }

    chains.into_iter().flatten().collect()
}
