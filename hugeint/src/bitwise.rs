//! Bit access and the `& | ^ !` operators.
//!
//! Everything here answers as if the value were an infinite two's-complement
//! bit string: `-1` is all ones, `!x == -x - 1`.

use std::ops::Not;

use crate::arith::{dec_mag, inc_mag};
use crate::big_int::BigInt;
use crate::digit::DIGIT_BITS;
use crate::twos::{BitOp, TwosView};

impl BigInt {
    /// Bit `pos` of the two's-complement form. Positions past the stored
    /// words read the sign.
    pub fn get_bit(&self, pos: u64) -> bool {
        let i = (pos / DIGIT_BITS as u64) as usize;
        let shift = (pos % DIGIT_BITS as u64) as u32;
        let mag_bit = self.mag.get(i).map_or(false, |&w| (w >> shift) & 1 == 1);
        if !self.negative {
            return mag_bit;
        }
        // -m == !(m - 1): bits up to the lowest set bit of m agree with m,
        // everything above is inverted.
        match self.trailing_zeros() {
            Some(t) if pos <= t => mag_bit,
            _ => !mag_bit,
        }
    }

    pub fn set_bit(&mut self, pos: u64, val: bool) {
        if !self.negative {
            if self.get_bit(pos) != val {
                self.flip_bit(pos);
            }
            return;
        }
        let mut view = TwosView::new(self);
        view.set_bit(pos, val);
        *self = view.into_bigint();
    }

    pub fn flip_bit(&mut self, pos: u64) {
        if !self.negative {
            let i = (pos / DIGIT_BITS as u64) as usize;
            if i >= self.mag.len() {
                self.mag.resize(i + 1, 0);
            }
            self.mag[i] ^= 1 << (pos % DIGIT_BITS as u64) as u32;
            self.normalize();
            return;
        }
        let mut view = TwosView::new(self);
        view.flip_bit(pos);
        *self = view.into_bigint();
    }

    pub(crate) fn bitop_assign(&mut self, rhs: &BigInt, op: BitOp) {
        // both non-negative: plain word-wise work on the magnitudes
        if !self.negative && !rhs.negative {
            match op {
                BitOp::And => {
                    self.mag.truncate(rhs.mag.len());
                    for (a, b) in self.mag.iter_mut().zip(rhs.mag.iter()) {
                        *a &= b;
                    }
                }
                BitOp::Or | BitOp::Xor => {
                    if self.mag.len() < rhs.mag.len() {
                        self.mag.resize(rhs.mag.len(), 0);
                    }
                    for (a, b) in self.mag.iter_mut().zip(rhs.mag.iter()) {
                        if op == BitOp::Or {
                            *a |= b;
                        } else {
                            *a ^= b;
                        }
                    }
                }
            }
            self.normalize();
            return;
        }
        let lhs = TwosView::new(self);
        *self = lhs.bitop(&TwosView::new(rhs), op).into_bigint();
    }
}

impl Not for BigInt {
    type Output = BigInt;

    /// `!x == -x - 1`
    fn not(mut self) -> BigInt {
        if self.negative {
            dec_mag(&mut self.mag);
            self.negative = false;
            self.normalize();
        } else {
            inc_mag(&mut self.mag);
            self.negative = true;
        }
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

#[test]
fn test_not() {
    assert_eq!(!BigInt::zero(), -1);
    assert_eq!(!BigInt::from(-1), 0);
    assert_eq!(!BigInt::from(41), -42);
    assert_eq!(!BigInt::from(-42), 41);
    let big = BigInt::one() << 130u32;
    assert_eq!(!&big, -&big - 1);
}

#[test]
fn test_get_bit_negative() {
    // -12 = ...11110100
    let x = BigInt::from(-12);
    let bits: Vec<bool> = (0..8).map(|i| x.get_bit(i)).collect();
    assert_eq!(bits, [false, false, true, false, true, true, true, true]);
    assert!(x.get_bit(1000));
    assert!(!BigInt::from(12).get_bit(1000));
    let m = -(BigInt::one() << 64u32);
    assert!(!m.get_bit(63));
    assert!(m.get_bit(64));
    assert!(m.get_bit(65));
}

#[test]
fn test_set_and_flip() {
    let mut x = BigInt::zero();
    x.set_bit(100, true);
    assert_eq!(x, BigInt::one() << 100u32);
    x.flip_bit(100);
    assert!(x.is_zero());

    let mut y = BigInt::from(-1);
    y.set_bit(0, false);
    assert_eq!(y, -2);
    y.set_bit(70, false);
    assert_eq!(y, -(BigInt::one() << 70u32) - 2);
    y.flip_bit(70);
    assert_eq!(y, -2);
}

#[test]
fn test_truth_table_signs() {
    let pairs = [(12i64, 10i64), (12, -10), (-12, 10), (-12, -10)];
    for (a, b) in pairs {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        assert_eq!(&x & &y, a & b, "{} & {}", a, b);
        assert_eq!(&x | &y, a | b, "{} | {}", a, b);
        assert_eq!(&x ^ &y, a ^ b, "{} ^ {}", a, b);
    }
}
