//! Truncating division.
//!
//! The quotient rounds toward zero and the remainder takes the sign of the
//! dividend, so `7 % -3 == 1` and `-7 % 3 == -1`.

use std::cmp::Ordering;

use crate::arith::{cmp_mag, sub_mag_assign, trim};
use crate::big_int::BigInt;
use crate::digit::{mac, Digit, DoubleDigit, DIGIT_BITS, DIGIT_MAX};
use crate::error::BigIntError;
use crate::shift::{shl_mag, shr_mag};

/// `mag * d`.
fn mul_digit(mag: &[Digit], d: Digit) -> Vec<Digit> {
    let mut out = Vec::with_capacity(mag.len() + 1);
    let mut carry = 0;
    for &w in mag {
        let (lo, hi) = mac(w, d, 0, carry);
        out.push(lo);
        carry = hi;
    }
    out.push(carry);
    trim(&mut out);
    out
}

/// Divides by a single word, walking from the top word down.
pub(crate) fn div_rem_digit(u: &[Digit], v: Digit) -> (Vec<Digit>, Digit) {
    debug_assert!(v != 0);
    let mut q = vec![0; u.len()];
    let mut r: DoubleDigit = 0;
    for j in (0..u.len()).rev() {
        let sum = (r << DIGIT_BITS) | u[j] as DoubleDigit;
        q[j] = (sum / v as DoubleDigit) as Digit;
        r = sum % v as DoubleDigit;
    }
    trim(&mut q);
    (q, r as Digit)
}

/// Largest `q` with `v * q <= rem`. `v` must be normalized (top bit set)
/// and `rem < v << DIGIT_BITS`.
fn quotient_digit(v: &[Digit], rem: &[Digit]) -> Digit {
    let n = v.len();
    let r_hi = rem.get(n).copied().unwrap_or(0) as DoubleDigit;
    let r_lo = rem.get(n - 1).copied().unwrap_or(0) as DoubleDigit;
    let estimate = ((r_hi << DIGIT_BITS) | r_lo) / v[n - 1] as DoubleDigit;
    // with a normalized divisor the estimate overshoots by at most two
    let mut hi = estimate.min(DIGIT_MAX as DoubleDigit) as Digit;
    let mut lo = hi.saturating_sub(2);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if cmp_mag(&mul_digit(v, mid), rem) == Ordering::Greater {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Long division of magnitudes; `v` must be non-empty.
pub(crate) fn div_rem_mag(u: &[Digit], v: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    if cmp_mag(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = div_rem_digit(u, v[0]);
        let mut r = vec![r];
        trim(&mut r);
        return (q, r);
    }

    // normalize so the divisor's top word has its high bit set
    let shift = v[v.len() - 1].leading_zeros() as u64;
    let v = shl_mag(v, shift);
    let u = shl_mag(u, shift);

    let mut q = vec![0; u.len()];
    let mut rem: Vec<Digit> = Vec::with_capacity(v.len() + 1);
    for i in (0..u.len()).rev() {
        rem.insert(0, u[i]);
        trim(&mut rem);
        if cmp_mag(&rem, &v) == Ordering::Less {
            continue;
        }
        let digit = quotient_digit(&v, &rem);
        sub_mag_assign(&mut rem, &mul_digit(&v, digit));
        q[i] = digit;
    }
    trim(&mut q);
    let (rem, _) = shr_mag(&rem, shift);
    (q, rem)
}

// 实现除法
impl BigInt {
    /// Quotient and remainder with truncating semantics.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = div_rem_mag(&self.mag, &rhs.mag);
        Ok((
            BigInt::from_mag(q, self.negative ^ rhs.negative),
            BigInt::from_mag(r, self.negative),
        ))
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    pub(crate) fn div_assign_ref(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Ok(q) => *self = q,
            Err(e) => panic!("{}", e),
        }
    }

    pub(crate) fn rem_assign_ref(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Ok(r) => *self = r,
            Err(e) => panic!("{}", e),
        }
    }
}

#[test]
fn test_truncating_signs() {
    let cases = [(7i64, 3i64), (7, -3), (-7, 3), (-7, -3), (6, 3), (-6, 3), (2, 5), (-2, 5)];
    for (a, b) in cases {
        let (q, r) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
        assert_eq!(q, a / b, "{} / {}", a, b);
        assert_eq!(r, a % b, "{} % {}", a, b);
    }
    assert_eq!(BigInt::from(7) % -3, 1);
    assert_eq!(BigInt::from(-7) % 3, -1);
}

#[test]
fn test_division_by_zero() {
    let x = BigInt::from(10);
    assert_eq!(x.checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(x.checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(x, 10);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_panics() {
    let _: BigInt = BigInt::from(1) / 0;
}

#[test]
fn test_multi_word_law() {
    let a: BigInt = (BigInt::one() << 300u32) - 12345;
    let b: BigInt = (BigInt::one() << 130u32) + (BigInt::one() << 64u32) - 7;
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r < b && !r.is_negative());
    assert_eq!(&q * &b + &r, a);

    let neg = -&a;
    let (q, r) = neg.div_rem(&b).unwrap();
    assert!(r.is_negative());
    assert_eq!(&q * &b + &r, neg);
}

#[test]
fn test_quotient_digit_at_max() {
    // a dividend that forces quotient digits of all ones
    let v: BigInt = (BigInt::one() << (2 * DIGIT_BITS)) - 1;
    let u = &v * &v;
    let (q, r) = u.div_rem(&v).unwrap();
    assert_eq!(q, v);
    assert!(r.is_zero());
}

#[test]
fn test_remainder_has_no_zero_top_word() {
    let a: BigInt = (BigInt::one() << 100u32) + 12345;
    let b: BigInt = (BigInt::one() << 64u32) + 3;
    let (_, r) = div_rem_mag(&a.mag, &b.mag);
    assert!(r.last() != Some(&0));
    // feeding the remainder back as a divisor must work
    let (_, r2) = div_rem_mag(&b.mag, &r);
    assert!(r2.last() != Some(&0));
}
