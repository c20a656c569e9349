use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::arith::{inc_mag, trim};
use crate::big_int::BigInt;
use crate::digit::{Digit, DIGIT_BITS};

/// `mag << n` on a magnitude.
pub(crate) fn shl_mag(mag: &[Digit], n: u64) -> Vec<Digit> {
    if mag.is_empty() {
        return Vec::new();
    }
    let n_words = (n / DIGIT_BITS as u64) as usize;
    let n_bits = (n % DIGIT_BITS as u64) as u32;
    let mut new_mag = vec![0; n_words];
    new_mag.reserve(mag.len() + 1);
    if n_bits == 0 {
        new_mag.extend_from_slice(mag);
        return new_mag;
    }
    let n_bits_r = DIGIT_BITS - n_bits;
    let mut carry = 0;
    for &w in mag {
        new_mag.push((w << n_bits) | carry);
        carry = w >> n_bits_r;
    }
    if carry != 0 {
        new_mag.push(carry);
    }
    new_mag
}

/// `mag >> n` on a magnitude (truncating, no trailing zero words). The second
/// value reports whether any 1-bit was shifted out.
pub(crate) fn shr_mag(mag: &[Digit], n: u64) -> (Vec<Digit>, bool) {
    let n_words = (n / DIGIT_BITS as u64) as usize;
    let n_bits = (n % DIGIT_BITS as u64) as u32;
    if n_words >= mag.len() {
        return (Vec::new(), !mag.is_empty());
    }

    let mut one_lost = mag[..n_words].iter().any(|&w| w != 0);
    if n_bits != 0 {
        one_lost = one_lost || (mag[n_words] << (DIGIT_BITS - n_bits)) != 0;
    }

    let high = &mag[n_words..];
    let mut new_mag = if n_bits == 0 {
        high.to_vec()
    } else {
        let n_bits_l = DIGIT_BITS - n_bits;
        let mut new_m: Vec<Digit> = high
            .windows(2)
            .map(|pair| (pair[0] >> n_bits) | (pair[1] << n_bits_l))
            .collect();
        // windows(2) skips the top word
        let top = high[high.len() - 1] >> n_bits;
        new_m.push(top);
        new_m
    };
    trim(&mut new_mag);
    (new_mag, one_lost)
}

impl BigInt {
    pub(crate) fn shl_bits(&mut self, n: u64) {
        if n != 0 && !self.is_zero() {
            self.mag = shl_mag(&self.mag, n);
        }
    }

    /// Arithmetic shift: rounds toward negative infinity, so `-1 >> n == -1`.
    pub(crate) fn shr_bits(&mut self, n: u64) {
        if n == 0 || self.is_zero() {
            return;
        }
        let (mut new_mag, one_lost) = shr_mag(&self.mag, n);
        if self.negative && one_lost {
            inc_mag(&mut new_mag);
        }
        self.mag = new_mag;
        self.normalize();
    }

    /// Shifts left for positive `n`, right for negative `n`.
    fn shift_signed(&mut self, n: i128, left: bool) {
        let amount = u64::try_from(n.unsigned_abs()).unwrap_or(u64::MAX);
        if (n >= 0) == left {
            self.shl_bits(amount);
        } else {
            self.shr_bits(amount);
        }
    }
}

macro_rules! impl_shift {
    ($($t:ty)*) => {$(
        impl Shl<$t> for BigInt {
            type Output = BigInt;

            fn shl(mut self, n: $t) -> BigInt {
                self <<= n;
                self
            }
        }

        impl Shl<$t> for &BigInt {
            type Output = BigInt;

            fn shl(self, n: $t) -> BigInt {
                self.clone() << n
            }
        }

        impl ShlAssign<$t> for BigInt {
            fn shl_assign(&mut self, n: $t) {
                self.shift_signed(i128::try_from(n).unwrap_or(i128::MAX), true);
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            fn shr(mut self, n: $t) -> BigInt {
                self >>= n;
                self
            }
        }

        impl Shr<$t> for &BigInt {
            type Output = BigInt;

            fn shr(self, n: $t) -> BigInt {
                self.clone() >> n
            }
        }

        impl ShrAssign<$t> for BigInt {
            fn shr_assign(&mut self, n: $t) {
                self.shift_signed(i128::try_from(n).unwrap_or(i128::MAX), false);
            }
        }
    )*};
}

impl_shift!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

#[test]
fn test_shl() {
    let x = BigInt::from(0b1011);
    assert_eq!(&x << 0u32, x);
    assert_eq!(&x << 3u32, 0b1011000);
    assert_eq!(&x << 64u32, BigInt::from(0b1011u128 << 64));
    assert_eq!(BigInt::from(-3) << 33u32, BigInt::from(-3i64 << 33));
    assert_eq!(BigInt::zero() << 1000u32, 0);
}

#[test]
fn test_shr_rounds_down() {
    assert_eq!(BigInt::from(7) >> 1u32, 3);
    assert_eq!(BigInt::from(-7) >> 1u32, -4);
    assert_eq!(BigInt::from(-8) >> 3u32, -1);
    assert_eq!(BigInt::from(-8) >> 2u32, -2);
    assert_eq!(BigInt::from(-1) >> 500u32, -1);
    assert_eq!(BigInt::from(1) >> 500u32, 0);
    let big: BigInt = -(BigInt::one() << 96u32) - 1;
    assert_eq!(&big >> 96u32, -2);
    assert_eq!(&big >> 32u32, -(BigInt::one() << 64u32) - 1);
}

#[test]
fn test_negative_amount() {
    let x = BigInt::from(40);
    assert_eq!(&x << -3i32, 5);
    assert_eq!(&x >> -3i64, 320);
    assert_eq!(BigInt::from(-5) << -1i32, -3);
}

#[test]
fn test_shr_mag_drops_zero_top_word() {
    // the top word shifts out entirely: no zero word is left behind
    let (mag, lost) = shr_mag(&[0, 1], 1);
    assert_eq!(mag, vec![1 << (DIGIT_BITS - 1)]);
    assert!(!lost);
    let (mag, lost) = shr_mag(&[5, 0, 3], DIGIT_BITS as u64 + 2);
    assert!(mag.last() != Some(&0));
    assert!(lost);
}
