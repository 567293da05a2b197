//! Exact fractions kept in lowest terms.
//!
//! Every live [`Rational`] has a positive denominator and a numerator that
//! shares no factor with it, so equality and hashing can compare fields.

use std::{
  cmp::Ordering,
  fmt,
  ops::{Add, Div, Mul, Neg, Sub},
  str::FromStr,
};

use num::{BigInt, BigRational, ToPrimitive};

use crate::error::RationalError;

/// An immutable fraction `numerator / denominator` backed by `i64`.
///
/// Arithmetic is checked: any intermediate product or sum that leaves the
/// `i64` range fails with [`RationalError::ArithmeticOverflow`] instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
  numerator: i64,
  denominator: i64,
}

impl Rational {
  pub const ZERO: Rational = Rational {
    numerator: 0,
    denominator: 1,
  };
  pub const ONE: Rational = Rational {
    numerator: 1,
    denominator: 1,
  };

  /// Builds `n / d` in lowest terms with the sign carried by the numerator.
  ///
  /// Fails with [`RationalError::InvalidArgument`] when `d` is zero.
  pub fn new(n: i64, d: i64) -> Result<Self, RationalError> {
    if d == 0 {
      return Err(RationalError::InvalidArgument(format!(
        "can't construct a rational number {}/0 with denominator 0",
        n
      )));
    }
    let (n, d) = if d < 0 {
      (negate(n)?, negate(d)?)
    } else {
      (n, d)
    };
    // d > 0 here, so the divisor is at least 1 and at most i64::MAX
    let divisor = gcd(n.unsigned_abs(), d.unsigned_abs()) as i64;
    Ok(Self {
      numerator: n / divisor,
      denominator: d / divisor,
    })
  }

  pub fn from_integer(n: i64) -> Self {
    Self {
      numerator: n,
      denominator: 1,
    }
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  pub fn to_f64(&self) -> f64 {
    self.numerator as f64 / self.denominator as f64
  }

  pub fn is_zero(&self) -> bool {
    self.numerator == 0
  }

  pub fn is_integer(&self) -> bool {
    self.denominator == 1
  }

  pub fn signum(&self) -> i64 {
    self.numerator.signum()
  }

  pub fn plus(self, that: Rational) -> Result<Rational, RationalError> {
    let numerator = add(
      mul(self.numerator, that.denominator)?,
      mul(that.numerator, self.denominator)?,
    )?;
    let denominator = mul(self.denominator, that.denominator)?;
    Rational::new(numerator, denominator)
  }

  pub fn minus(self, that: Rational) -> Result<Rational, RationalError> {
    let numerator = sub(
      mul(self.numerator, that.denominator)?,
      mul(that.numerator, self.denominator)?,
    )?;
    let denominator = mul(self.denominator, that.denominator)?;
    Rational::new(numerator, denominator)
  }

  pub fn times(self, that: Rational) -> Result<Rational, RationalError> {
    let numerator = mul(self.numerator, that.numerator)?;
    let denominator = mul(self.denominator, that.denominator)?;
    Rational::new(numerator, denominator)
  }

  /// Dividing by a zero rational hands a zero denominator to [`Rational::new`],
  /// which rejects it with [`RationalError::InvalidArgument`].
  pub fn divided_by(self, that: Rational) -> Result<Rational, RationalError> {
    let numerator = mul(self.numerator, that.denominator)?;
    let denominator = mul(self.denominator, that.numerator)?;
    Rational::new(numerator, denominator)
  }

  pub fn negated(self) -> Result<Rational, RationalError> {
    Ok(Self {
      numerator: negate(self.numerator)?,
      denominator: self.denominator,
    })
  }

  pub fn abs(self) -> Result<Rational, RationalError> {
    if self.numerator < 0 {
      self.negated()
    } else {
      Ok(self)
    }
  }

  pub fn reciprocal(self) -> Result<Rational, RationalError> {
    Rational::new(self.denominator, self.numerator)
  }
}

// Euclid on magnitudes; b must be non-zero.
fn gcd(a: u64, b: u64) -> u64 {
  let (mut a, mut b) = (a, b);
  loop {
    let r = a % b;
    if r == 0 {
      return b;
    }
    a = b;
    b = r;
  }
}

fn negate(a: i64) -> Result<i64, RationalError> {
  a.checked_neg().ok_or(RationalError::ArithmeticOverflow)
}

fn add(a: i64, b: i64) -> Result<i64, RationalError> {
  a.checked_add(b).ok_or(RationalError::ArithmeticOverflow)
}

fn sub(a: i64, b: i64) -> Result<i64, RationalError> {
  a.checked_sub(b).ok_or(RationalError::ArithmeticOverflow)
}

fn mul(a: i64, b: i64) -> Result<i64, RationalError> {
  a.checked_mul(b).ok_or(RationalError::ArithmeticOverflow)
}

impl Default for Rational {
  fn default() -> Self {
    Rational::ZERO
  }
}

impl fmt::Display for Rational {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denominator != 1 {
      write!(f, "{}/{}", self.numerator, self.denominator)
    } else {
      write!(f, "{}", self.numerator)
    }
  }
}

impl Ord for Rational {
  // Both denominators are positive, so cross-multiplying keeps the order.
  // i64 * i64 always fits in i128.
  fn cmp(&self, other: &Self) -> Ordering {
    let left = self.numerator as i128 * other.denominator as i128;
    let right = other.numerator as i128 * self.denominator as i128;
    left.cmp(&right)
  }
}

impl PartialOrd for Rational {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl FromStr for Rational {
  type Err = RationalError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parse_part = |part: &str| {
      part
        .trim()
        .parse::<i64>()
        .map_err(|err| RationalError::Parse(format!("'{}': {}", s.trim(), err)))
    };
    match s.split_once('/') {
      Some((numerator, denominator)) => {
        Rational::new(parse_part(numerator)?, parse_part(denominator)?)
      }
      None => Ok(Rational::from_integer(parse_part(s)?)),
    }
  }
}

impl From<i64> for Rational {
  fn from(n: i64) -> Self {
    Rational::from_integer(n)
  }
}

impl From<i32> for Rational {
  fn from(n: i32) -> Self {
    Rational::from_integer(n as i64)
  }
}

impl From<Rational> for BigRational {
  fn from(value: Rational) -> Self {
    BigRational::new_raw(BigInt::from(value.numerator), BigInt::from(value.denominator))
  }
}

impl TryFrom<&BigRational> for Rational {
  type Error = RationalError;

  fn try_from(value: &BigRational) -> Result<Self, Self::Error> {
    let numerator = value.numer().to_i64().ok_or(RationalError::ArithmeticOverflow)?;
    let denominator = value.denom().to_i64().ok_or(RationalError::ArithmeticOverflow)?;
    Rational::new(numerator, denominator)
  }
}

impl Add for Rational {
  type Output = Result<Rational, RationalError>;

  fn add(self, rhs: Self) -> Self::Output {
    self.plus(rhs)
  }
}

impl Sub for Rational {
  type Output = Result<Rational, RationalError>;

  fn sub(self, rhs: Self) -> Self::Output {
    self.minus(rhs)
  }
}

impl Mul for Rational {
  type Output = Result<Rational, RationalError>;

  fn mul(self, rhs: Self) -> Self::Output {
    self.times(rhs)
  }
}

impl Div for Rational {
  type Output = Result<Rational, RationalError>;

  fn div(self, rhs: Self) -> Self::Output {
    self.divided_by(rhs)
  }
}

impl Neg for Rational {
  type Output = Result<Rational, RationalError>;

  fn neg(self) -> Self::Output {
    self.negated()
  }
}
