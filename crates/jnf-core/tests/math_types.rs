//! Integration tests for the Rational scalar and the dense Matrix type.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use jnf_core::math::{Matrix, Rational};

fn r(p: i64, q: i64) -> Rational {
    Rational::new(BigInt::from(p), BigInt::from(q))
}

fn mat(rows: Vec<Vec<i64>>) -> Matrix<Rational> {
    Matrix::from_rows(
        rows.into_iter()
            .map(|row| row.into_iter().map(Rational::from).collect())
            .collect(),
    )
    .expect("test matrix is rectangular")
}

// ---------------------------------------------------------------------------
// Rational canonical form
// ---------------------------------------------------------------------------

#[test]
fn rational_reduces_to_lowest_terms() {
    assert_eq!(r(6, 4), r(3, 2));
    assert_eq!(r(6, 4).numer(), &BigInt::from(3));
    assert_eq!(r(6, 4).denom(), &BigInt::from(2));
}

#[test]
fn rational_denominator_is_positive() {
    let x = r(3, -6);
    assert_eq!(x, r(-1, 2));
    assert_eq!(x.denom(), &BigInt::from(2));
    assert!(x < Rational::zero());
}

#[test]
fn rational_zero_has_unit_denominator() {
    let z = r(0, 17);
    assert!(z.is_zero());
    assert_eq!(z.denom(), &BigInt::one());
    assert_eq!(z, Rational::zero());
}

#[test]
fn rational_from_integer() {
    let x = Rational::from(-9);
    assert!(x.is_integer());
    assert_eq!(x, r(-9, 1));
}

// ---------------------------------------------------------------------------
// Rational arithmetic and ordering
// ---------------------------------------------------------------------------

#[test]
fn rational_arithmetic() {
    assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
    assert_eq!(r(1, 2) - r(1, 2), Rational::zero());
    assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
    assert_eq!(r(1, 2) / r(1, 4), r(2, 1));
    assert_eq!(-r(3, 5), r(-3, 5));
}

#[test]
fn rational_compound_assignment() {
    let mut x = r(1, 2);
    x += r(1, 6);
    assert_eq!(x, r(2, 3));
    x *= r(3, 2);
    assert_eq!(x, Rational::one());
    x -= r(1, 4);
    assert_eq!(x, r(3, 4));
    x /= r(3, 4);
    assert_eq!(x, Rational::one());
}

#[test]
fn rational_ordering_by_cross_multiplication() {
    assert!(r(1, 3) < r(1, 2));
    assert!(r(-1, 2) < r(1, 3));
    assert!(r(2, 4) <= r(1, 2));
    assert!(r(7, 3) > r(2, 1));
}

#[test]
#[should_panic(expected = "division by zero")]
fn rational_division_by_zero_panics() {
    let _ = r(1, 2) / Rational::zero();
}

// ---------------------------------------------------------------------------
// Rational display, parsing and serde
// ---------------------------------------------------------------------------

#[test]
fn rational_display() {
    assert_eq!(r(7, 1).to_string(), "7");
    assert_eq!(r(-3, 2).to_string(), "-3/2");
    assert_eq!(Rational::zero().to_string(), "0");
}

#[test]
fn rational_parse() {
    assert_eq!("4".parse::<Rational>().unwrap(), r(4, 1));
    assert_eq!("-3/6".parse::<Rational>().unwrap(), r(-1, 2));
    assert_eq!(" 5 / 2 ".parse::<Rational>().unwrap(), r(5, 2));
    assert!("1/0".parse::<Rational>().is_err());
    assert!("one half".parse::<Rational>().is_err());
}

#[test]
fn rational_serde_accepts_integers_and_strings() {
    let parsed: Vec<Rational> = serde_json::from_str(r#"[3, "-5/2", "7"]"#).unwrap();
    assert_eq!(parsed, vec![r(3, 1), r(-5, 2), r(7, 1)]);

    let out = serde_json::to_string(&vec![r(3, 1), r(-5, 2)]).unwrap();
    assert_eq!(out, r#"[3,"-5/2"]"#);
}

// ---------------------------------------------------------------------------
// Matrix construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_rows_and_indexing() {
    let m = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(0, 0)], Rational::from(1));
    assert_eq!(m[(1, 2)], Rational::from(6));
}

#[test]
fn matrix_from_ragged_rows_fails() {
    let rows = vec![vec![Rational::from(1)], vec![Rational::from(2), Rational::from(3)]];
    assert!(Matrix::from_rows(rows).is_err());
}

#[test]
fn matrix_from_empty_rows_fails() {
    let rows: Vec<Vec<Rational>> = vec![];
    assert!(Matrix::from_rows(rows).is_err());
}

#[test]
fn matrix_zeros_identity_scalar() {
    let z: Matrix<Rational> = Matrix::zeros(2, 3);
    for i in 0..2 {
        for j in 0..3 {
            assert!(z[(i, j)].is_zero());
        }
    }

    let id: Matrix<Rational> = Matrix::identity(3);
    let s = Matrix::scalar(3, Rational::from(2));
    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                assert_eq!(id[(i, j)], Rational::one());
                assert_eq!(s[(i, j)], Rational::from(2));
            } else {
                assert!(id[(i, j)].is_zero());
                assert!(s[(i, j)].is_zero());
            }
        }
    }
}

#[test]
#[should_panic(expected = "out of bounds")]
fn matrix_index_out_of_bounds_panics() {
    let m = mat(vec![vec![1, 2], vec![3, 4]]);
    let _ = m[(0, 2)];
}

// ---------------------------------------------------------------------------
// Matrix arithmetic
// ---------------------------------------------------------------------------

#[test]
fn matrix_addition_and_subtraction() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let b = mat(vec![vec![5, 6], vec![7, 8]]);
    assert_eq!(&a + &b, mat(vec![vec![6, 8], vec![10, 12]]));
    assert_eq!(&b - &a, mat(vec![vec![4, 4], vec![4, 4]]));

    let mut c = a.clone();
    c += &b;
    assert_eq!(c, mat(vec![vec![6, 8], vec![10, 12]]));
    c -= &b;
    assert_eq!(c, a);
}

#[test]
fn matrix_addition_commutes_and_associates() {
    let a = mat(vec![vec![1, -2], vec![0, 5]]);
    let b = mat(vec![vec![3, 3], vec![-1, 2]]);
    let c = mat(vec![vec![0, 1], vec![7, -4]]);
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
}

#[test]
fn matrix_multiplication() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let b = mat(vec![vec![2, 0], vec![1, 2]]);
    assert_eq!(&a * &b, mat(vec![vec![4, 4], vec![10, 8]]));

    // Rectangular shapes: (2x3) * (3x1) = (2x1)
    let c = mat(vec![vec![1, 0, 2], vec![0, 1, -1]]);
    let v = mat(vec![vec![3], vec![4], vec![5]]);
    assert_eq!(&c * &v, mat(vec![vec![13], vec![-1]]));
}

#[test]
fn matrix_multiplication_distributes() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let b = mat(vec![vec![0, 1], vec![1, 0]]);
    let c = mat(vec![vec![2, -1], vec![1, 1]]);
    assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
}

#[test]
fn matrix_identity_is_neutral() {
    let a = mat(vec![vec![1, 2], vec![3, 4]]);
    let id: Matrix<Rational> = Matrix::identity(2);
    assert_eq!(&a * &id, a);
    assert_eq!(&id * &a, a);
}

#[test]
fn matrix_scale() {
    let a = mat(vec![vec![1, -2], vec![3, 0]]);
    assert_eq!(a.scale(&r(1, 2)), {
        let mut expected = Matrix::zeros(2, 2);
        expected[(0, 0)] = r(1, 2);
        expected[(0, 1)] = r(-1, 1);
        expected[(1, 0)] = r(3, 2);
        expected
    });
}

#[test]
#[should_panic(expected = "identical shapes")]
fn matrix_addition_shape_mismatch_panics() {
    let a = mat(vec![vec![1, 2]]);
    let b = mat(vec![vec![1], vec![2]]);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "inner dimensions")]
fn matrix_multiplication_shape_mismatch_panics() {
    let a = mat(vec![vec![1, 2]]);
    let b = mat(vec![vec![1, 2]]);
    let _ = &a * &b;
}

// ---------------------------------------------------------------------------
// Trace, transpose, powers
// ---------------------------------------------------------------------------

#[test]
fn matrix_trace() {
    let a = mat(vec![vec![1, 9], vec![9, -4]]);
    assert_eq!(a.trace(), Rational::from(-3));
}

#[test]
#[should_panic(expected = "non-square")]
fn matrix_trace_non_square_panics() {
    let a = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let _ = a.trace();
}

#[test]
fn matrix_transpose() {
    let a = mat(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t, mat(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
    assert_eq!(t.transpose(), a);
}

#[test]
fn matrix_pow() {
    let a = mat(vec![vec![1, 1], vec![0, 1]]);
    assert_eq!(a.pow(0), Matrix::identity(2));
    assert_eq!(a.pow(1), a);
    assert_eq!(a.pow(3), mat(vec![vec![1, 3], vec![0, 1]]));
    // pow(k + 1) = A * pow(k)
    assert_eq!(a.pow(4), &a * &a.pow(3));
}

#[test]
fn matrix_display_matches_report_format() {
    let a = mat(vec![vec![1, -2], vec![3, 4]]);
    assert_eq!(a.to_string(), "1 -2 \n3 4 \n");

    let mut half = Matrix::zeros(2, 1);
    half[(0, 0)] = r(1, 2);
    assert_eq!(half.to_string(), "1/2 \n0 \n");
}

#[test]
fn matrix_column_from() {
    let v = Matrix::column_from(vec![Rational::from(1), Rational::from(2)]);
    assert_eq!(v.shape(), (2, 1));
    assert_eq!(v[(1, 0)], Rational::from(2));
}
