//! # BigInt
//! Arbitrary-precision signed integers. Magnitudes are kept as little-endian
//! machine words next to a sign flag; every bitwise and shift operation behaves
//! as if the value were stored in infinite two's-complement notation.
//! # Example
//! ```
//! use hugeint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-0x1A".parse().unwrap();
//! assert_eq!(b, -26);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10u32);
//! println!("a >> 10 = {}", &a >> 10u32);
//! ```

use std::cmp::Ordering;
use std::ops::Neg;

use crate::arith::cmp_mag;
use crate::digit::{bit_length, Digit, DIGIT_BITS};

pub const ZERO: BigInt = BigInt { negative: false, mag: Vec::new() };

/// Canonical form: `mag` never ends in a zero word and zero is never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) mag: Vec<Digit>,
}

// 构造
impl BigInt {
    /// Builds a value from a raw magnitude and sign, restoring canonical form.
    pub(crate) fn from_mag(mag: Vec<Digit>, negative: bool) -> BigInt {
        let mut result = BigInt { negative, mag };
        result.normalize();
        result
    }

    pub fn zero() -> BigInt {
        ZERO
    }

    pub fn one() -> BigInt {
        BigInt { negative: false, mag: vec![1] }
    }

    /// Strips high zero words and clears the sign of zero.
    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.mag.last() {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.negative = false;
        }
    }

    /// Little-endian words of `|self|`.
    pub fn magnitude(&self) -> &[Digit] {
        &self.mag
    }
}

// 符号
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.mag.is_empty()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.mag.is_empty() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }

    pub(crate) fn abs_take(self) -> BigInt {
        let BigInt { mag, .. } = self;
        BigInt { negative: false, mag }
    }

    /// Flips the sign in place.
    pub fn negate(&mut self) {
        if !self.mag.is_empty() {
            self.negative = !self.negative;
        }
    }
}

// 比特长度
impl BigInt {
    /// Number of significant bits of `|self|`; zero for zero.
    pub fn bits(&self) -> u64 {
        match self.mag.last() {
            None => 0,
            Some(&top) => (self.mag.len() as u64 - 1) * DIGIT_BITS as u64 + bit_length(top),
        }
    }

    /// Position just past the highest bit that differs from the sign fill.
    ///
    /// For `x >= 0` this is the bit length of `x` (`floor(log2(x)) + 1`, zero for zero);
    /// for `x < 0` it is the bit length of `!x == |x| - 1`, so `-1` reports 0
    /// and `-2^k` reports `k`.
    pub fn size_in_bits(&self) -> u64 {
        let n = self.bits();
        if self.negative && self.is_mag_pow2() {
            n - 1
        } else {
            n
        }
    }

    /// Whether `|self|` is a power of two.
    pub(crate) fn is_mag_pow2(&self) -> bool {
        match self.mag.split_last() {
            None => false,
            Some((top, rest)) => top.count_ones() == 1 && rest.iter().all(|&w| w == 0),
        }
    }

    /// Number of trailing zero bits of `|self|`, `None` for zero.
    pub fn trailing_zeros(&self) -> Option<u64> {
        let i = self.mag.iter().position(|&w| w != 0)?;
        Some(i as u64 * DIGIT_BITS as u64 + self.mag[i].trailing_zeros() as u64)
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_mag(&self.mag, &other.mag),
            (true, true) => cmp_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

#[test]
fn test_canonical_zero() {
    let z = BigInt::from_mag(vec![0, 0, 0], true);
    assert_eq!(z, ZERO);
    assert!(!z.is_negative());
    assert_eq!(-ZERO, ZERO);
    assert_eq!(z.signum(), 0);
}

#[test]
fn test_size_in_bits() {
    assert_eq!(BigInt::zero().size_in_bits(), 0);
    assert_eq!(BigInt::from(64).size_in_bits(), 7);
    assert_eq!(BigInt::from(-1).size_in_bits(), 0);
    assert_eq!(BigInt::from(-2).size_in_bits(), 1);
    assert_eq!(BigInt::from(-3).size_in_bits(), 2);
    assert_eq!(BigInt::from(-64).size_in_bits(), 6);
    assert_eq!(BigInt::from(-65).size_in_bits(), 7);
    let big = BigInt::one() << 200u32;
    assert_eq!(big.size_in_bits(), 201);
    assert_eq!((-big).size_in_bits(), 200);
}

#[test]
fn test_ordering() {
    let mut values: Vec<BigInt> = [5i64, -3, 0, 1 << 40, -(1 << 40), -1, 7]
        .iter()
        .map(|&v| BigInt::from(v))
        .collect();
    values.sort();
    let expected: Vec<BigInt> = [-(1i64 << 40), -3, -1, 0, 5, 7, 1 << 40]
        .iter()
        .map(|&v| BigInt::from(v))
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_trailing_zeros() {
    assert_eq!(BigInt::zero().trailing_zeros(), None);
    assert_eq!(BigInt::from(-12).trailing_zeros(), Some(2));
    assert_eq!((BigInt::one() << 100u32).trailing_zeros(), Some(100));
}
