//! Problem-file loading and validation.
//!
//! A problem is a JSON object with a `matrix` (nested rows of rationals,
//! written as integers or `"p/q"` strings), a `spectrum` (list of
//! `[lambda, multiplicity]` pairs fully factoring the characteristic
//! polynomial), and an optional `seed`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use jnf_core::jnf::Spectrum;
use jnf_core::math::{Matrix, Rational};

#[derive(Debug, Deserialize)]
struct ProblemFile {
    matrix: Vec<Vec<Rational>>,
    spectrum: Vec<(Rational, usize)>,
    #[serde(default)]
    seed: Option<u64>,
}

/// A validated problem ready for decomposition.
#[derive(Debug)]
pub struct Problem {
    pub matrix: Matrix<Rational>,
    pub spectrum: Spectrum,
    pub seed: Option<u64>,
}

/// Load and validate a problem file.
///
/// The library itself trusts its spectrum input, so shape-level consistency
/// (square matrix, positive multiplicities summing to the dimension) is
/// checked here; a malformed file would otherwise hang the basis search.
pub fn load_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading problem file {}", path.display()))?;
    let file: ProblemFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing problem file {}", path.display()))?;

    let matrix = Matrix::from_rows(file.matrix)
        .with_context(|| format!("invalid matrix in {}", path.display()))?;
    if !matrix.is_square() {
        bail!(
            "matrix must be square, got {} x {}",
            matrix.nrows(),
            matrix.ncols()
        );
    }

    let n = matrix.nrows();
    let mut total = 0usize;
    for (lambda, multiplicity) in &file.spectrum {
        if *multiplicity == 0 {
            bail!("eigenvalue {} has zero multiplicity", lambda);
        }
        total += multiplicity;
    }
    if total != n {
        bail!(
            "spectrum multiplicities sum to {}, expected the matrix dimension {}",
            total,
            n
        );
    }

    Ok(Problem {
        matrix,
        spectrum: file.spectrum,
        seed: file.seed,
    })
}
