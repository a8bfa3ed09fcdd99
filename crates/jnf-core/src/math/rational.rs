use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseRationalError;

/// Exact rational number with arbitrary-precision numerator and denominator.
///
/// Always held in canonical form: `gcd(|p|, q) = 1`, `q > 0`, and `q = 1`
/// when `p = 0`. Every arithmetic operation canonicalizes its result, so
/// equality is plain structural equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `p / q` in canonical form.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero (division by zero is a caller contract
    /// violation).
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        Self::reduced(numer, denom)
    }

    /// Build the integer `p / 1`.
    pub fn from_integer(numer: BigInt) -> Self {
        Self {
            numer,
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        assert!(!denom.is_zero(), "rational division by zero");
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        if numer.is_zero() {
            return Self {
                numer,
                denom: BigInt::one(),
            };
        }
        let g = numer.gcd(&denom);
        Self {
            numer: numer / &g,
            denom: denom / g,
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self = self.clone() + rhs;
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational::reduced(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self = self.clone() - rhs;
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self = self.clone() * rhs;
    }
}

impl Div for Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Rational) -> Rational {
        Rational::reduced(&self.numer * &rhs.denom, &self.denom * &rhs.numer)
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        *self = self.clone() / rhs;
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `p` or `p/q` with optional surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            None => {
                let numer: BigInt = s
                    .trim()
                    .parse()
                    .map_err(|_| ParseRationalError::new(s))?;
                Ok(Rational::from_integer(numer))
            }
            Some((p, q)) => {
                let numer: BigInt = p
                    .trim()
                    .parse()
                    .map_err(|_| ParseRationalError::new(s))?;
                let denom: BigInt = q
                    .trim()
                    .parse()
                    .map_err(|_| ParseRationalError::new(s))?;
                if denom.is_zero() {
                    return Err(ParseRationalError::new(s));
                }
                Ok(Rational::new(numer, denom))
            }
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.denom.is_one() {
            if let Some(v) = self.numer.to_i64() {
                return serializer.serialize_i64(v);
            }
        }
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer or a `p/q` string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rational, E> {
        Ok(Rational::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rational, E> {
        Ok(Rational::from_integer(BigInt::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rational, E> {
        v.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RationalVisitor)
    }
}
