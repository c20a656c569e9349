//! Addition and subtraction.
//!
//! Magnitude helpers work on little-endian word slices and never see a sign;
//! `BigInt::add_signed` folds both operators into one routine by flipping the
//! effective sign of the right-hand side when subtracting.

use std::cmp::Ordering;

use crate::big_int::BigInt;
use crate::digit::{adc, sbb, Digit, DIGIT_MAX};

/// Compares two canonical magnitudes.
pub(crate) fn cmp_mag(a: &[Digit], b: &[Digit]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Strips high zero words.
pub(crate) fn trim(v: &mut Vec<Digit>) {
    while let Some(&0) = v.last() {
        v.pop();
    }
}

/// `acc += b << (offset words)`, growing `acc` as needed.
pub(crate) fn add_at(acc: &mut Vec<Digit>, b: &[Digit], offset: usize) {
    if b.is_empty() {
        return;
    }
    if acc.len() < offset + b.len() {
        acc.resize(offset + b.len(), 0);
    }
    let mut carry = 0;
    for (i, &w) in b.iter().enumerate() {
        let (sum, c) = adc(acc[offset + i], w, carry);
        acc[offset + i] = sum;
        carry = c;
    }
    let mut i = offset + b.len();
    while carry != 0 {
        if i == acc.len() {
            acc.push(carry);
            break;
        }
        let (sum, c) = adc(acc[i], 0, carry);
        acc[i] = sum;
        carry = c;
        i += 1;
    }
}

/// `a + b` on magnitudes.
pub(crate) fn add_mag(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = long.to_vec();
    add_at(&mut result, short, 0);
    result
}

/// `a -= b` on magnitudes; requires `a >= b`. The result is trimmed.
pub(crate) fn sub_mag_assign(a: &mut Vec<Digit>, b: &[Digit]) {
    debug_assert!(cmp_mag(a, b) != Ordering::Less);
    let mut borrow = 0;
    for (i, &w) in b.iter().enumerate() {
        let (diff, br) = sbb(a[i], w, borrow);
        a[i] = diff;
        borrow = br;
    }
    let mut i = b.len();
    while borrow != 0 {
        let (diff, br) = sbb(a[i], 0, borrow);
        a[i] = diff;
        borrow = br;
        i += 1;
    }
    trim(a);
}

/// `a - b` on magnitudes; requires `a >= b`.
pub(crate) fn sub_mag(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut result = a.to_vec();
    sub_mag_assign(&mut result, b);
    result
}

/// Adds one to a magnitude.
pub(crate) fn inc_mag(a: &mut Vec<Digit>) {
    for w in a.iter_mut() {
        if *w == DIGIT_MAX {
            *w = 0;
        } else {
            *w += 1;
            return;
        }
    }
    a.push(1);
}

/// Subtracts one from a non-zero magnitude.
pub(crate) fn dec_mag(a: &mut Vec<Digit>) {
    debug_assert!(!a.is_empty());
    for w in a.iter_mut() {
        if *w == 0 {
            *w = DIGIT_MAX;
        } else {
            *w -= 1;
            break;
        }
    }
    trim(a);
}

// 实现加减法
impl BigInt {
    /// `self += rhs`, or `self -= rhs` when `subtract` is set.
    pub(crate) fn add_signed(&mut self, rhs: &BigInt, subtract: bool) {
        if rhs.is_zero() {
            return;
        }
        let rhs_negative = rhs.negative ^ subtract;
        if self.is_zero() {
            self.mag.clone_from(&rhs.mag);
            self.negative = rhs_negative;
            return;
        }
        if self.negative == rhs_negative {
            add_at(&mut self.mag, &rhs.mag, 0);
            return;
        }
        match cmp_mag(&self.mag, &rhs.mag) {
            Ordering::Equal => *self = BigInt::zero(),
            Ordering::Greater => sub_mag_assign(&mut self.mag, &rhs.mag),
            Ordering::Less => {
                self.mag = sub_mag(&rhs.mag, &self.mag);
                self.negative = rhs_negative;
            }
        }
    }

    /// Adds one in place.
    pub fn inc(&mut self) {
        if self.negative {
            dec_mag(&mut self.mag);
            self.normalize();
        } else {
            inc_mag(&mut self.mag);
        }
    }

    /// Subtracts one in place.
    pub fn dec(&mut self) {
        if self.negative {
            inc_mag(&mut self.mag);
        } else if self.mag.is_empty() {
            self.mag.push(1);
            self.negative = true;
        } else {
            dec_mag(&mut self.mag);
        }
    }
}

#[test]
fn test_add_sub_signs() {
    let cases: [(i64, i64); 8] = [
        (5, 3), (5, -3), (-5, 3), (-5, -3),
        (3, 5), (-3, 5), (i64::MAX, i64::MAX), (i64::MIN, i64::MAX),
    ];
    for (a, b) in cases {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        assert_eq!(&x + &y, BigInt::from(a as i128 + b as i128), "{} + {}", a, b);
        assert_eq!(&x - &y, BigInt::from(a as i128 - b as i128), "{} - {}", a, b);
        assert_eq!(&x - &x, BigInt::zero());
    }
}

#[test]
fn test_carry_into_new_word() {
    let max = BigInt::from(u64::MAX);
    let sum: BigInt = &max + 1u8;
    assert_eq!(sum, BigInt::from(1u128 << 64));
    assert_eq!(sum - 1u8, max);
}

#[test]
fn test_inc_dec() {
    let mut v = BigInt::from(-2);
    v.inc();
    assert_eq!(v, -1);
    v.inc();
    assert_eq!(v, 0);
    assert!(!v.is_negative());
    v.dec();
    assert_eq!(v, -1);
    v.dec();
    assert_eq!(v, -2);

    let mut w = BigInt::from(u32::MAX);
    w.inc();
    assert_eq!(w, BigInt::from(u32::MAX as u64 + 1));
    w.dec();
    assert_eq!(w, BigInt::from(u32::MAX));
}
