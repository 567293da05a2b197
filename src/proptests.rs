//! Property-based tests for `Rational`.

use std::{
  cmp::Ordering,
  collections::hash_map::DefaultHasher,
  hash::{Hash, Hasher},
};

use proptest::prelude::*;

use crate::{Rational, RationalError};

fn small_int() -> impl Strategy<Value = i64> {
  -10_000i64..10_000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
  prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

fn rational() -> impl Strategy<Value = Rational> {
  (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn gcd(a: i128, b: i128) -> i128 {
  if b == 0 {
    a.abs()
  } else {
    gcd(b, a % b)
  }
}

fn hash_of(value: &Rational) -> u64 {
  let mut hasher = DefaultHasher::new();
  value.hash(&mut hasher);
  hasher.finish()
}

proptest! {
  #[test]
  fn construction_normalizes(n in any::<i64>(), d in any::<i64>()) {
    prop_assume!(d != 0 && d != i64::MIN);
    let value = Rational::new(n, d);
    if d < 0 && n == i64::MIN {
      prop_assert_eq!(value, Err(RationalError::ArithmeticOverflow));
    } else {
      let value = value.unwrap();
      prop_assert!(value.denominator() > 0);
      if value.numerator() == 0 {
        prop_assert_eq!(value.denominator(), 1);
      } else {
        prop_assert_eq!(gcd(value.numerator() as i128, value.denominator() as i128), 1);
      }
    }
  }

  #[test]
  fn construction_preserves_value(n in small_int(), d in non_zero_int()) {
    let value = Rational::new(n, d).unwrap();
    // n/d == p/q  <=>  n*q == p*d
    prop_assert_eq!(n * value.denominator(), value.numerator() * d);
  }

  #[test]
  fn zero_denominator_always_fails(n in any::<i64>()) {
    prop_assert!(matches!(Rational::new(n, 0), Err(RationalError::InvalidArgument(_))));
  }

  #[test]
  fn to_f64_approximates_quotient(n in small_int(), d in non_zero_int()) {
    let value = Rational::new(n, d).unwrap();
    let expected = n as f64 / d as f64;
    prop_assert!((value.to_f64() - expected).abs() <= 1e-12 * expected.abs().max(1.0));
  }

  #[test]
  fn ordering_matches_f64(a in rational(), b in rational()) {
    let difference = a.to_f64() - b.to_f64();
    let expected = if a == b {
      Ordering::Equal
    } else if difference < 0.0 {
      Ordering::Less
    } else {
      Ordering::Greater
    };
    prop_assert_eq!(a.cmp(&b), expected);
    prop_assert_eq!(b.cmp(&a), expected.reverse());
  }

  #[test]
  fn equal_values_hash_equally(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
    let a = Rational::new(n, d).unwrap();
    let b = Rational::new(n * k, d * k).unwrap();
    prop_assert_eq!(a, b);
    prop_assert_eq!(hash_of(&a), hash_of(&b));
  }

  #[test]
  fn add_commutative(a in rational(), b in rational()) {
    prop_assert_eq!(a.plus(b).unwrap(), b.plus(a).unwrap());
  }

  #[test]
  fn subtraction_undoes_addition(a in rational(), b in rational()) {
    prop_assert_eq!(a.plus(b).unwrap().minus(b).unwrap(), a);
  }

  #[test]
  fn mul_distributes_over_add(a in rational(), b in rational(), c in rational()) {
    let left = a.times(b.plus(c).unwrap()).unwrap();
    let right = a.times(b).unwrap().plus(a.times(c).unwrap()).unwrap();
    prop_assert_eq!(left, right);
  }

  #[test]
  fn division_undoes_multiplication(a in rational(), b in rational()) {
    if b.is_zero() {
      prop_assert!(matches!(a.divided_by(b), Err(RationalError::InvalidArgument(_))));
    } else {
      prop_assert_eq!(a.times(b).unwrap().divided_by(b).unwrap(), a);
    }
  }

  #[test]
  fn display_parses_back(a in rational()) {
    prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
  }
}
