//! Multiplication.
//!
//! `mul_mag` picks an algorithm from the operand sizes:
//! - both operands one word: a single double-width product;
//! - the smaller operand below `KARATSUBA_THRESHOLD` words, or so much smaller
//!   that its length squared is under the larger length: schoolbook;
//! - otherwise Karatsuba, splitting at half of the smallest power of two that
//!   covers the longer operand and recursing back into `mul_mag`.

use crate::arith::{add_at, add_mag, sub_mag_assign, trim};
use crate::big_int::BigInt;
use crate::big_num_constants::KARATSUBA_THRESHOLD;
use crate::digit::{mac, split, Digit, DoubleDigit};

#[inline]
fn trimmed(s: &[Digit]) -> &[Digit] {
    let end = s.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    &s[..end]
}

/// `mag = mag * mul + add`, in place.
pub(crate) fn mul_digit_add(mag: &mut Vec<Digit>, mul: Digit, add: Digit) {
    let mut carry = add;
    for w in mag.iter_mut() {
        let (lo, hi) = mac(*w, mul, 0, carry);
        *w = lo;
        carry = hi;
    }
    if carry != 0 {
        mag.push(carry);
    }
    trim(mag);
}

/// O(n*m) product.
pub(crate) fn schoolbook(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
    trim(&mut out);
    out
}

/// `high << 2k + (mid - high - low) << k + low`, with
/// `mid = (low_a + high_a) * (low_b + high_b)`.
pub(crate) fn karatsuba(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let block = a.len().max(b.len()).next_power_of_two();
    let half = block / 2;
    if half == 0 {
        return mul_mag(a, b);
    }

    let (low_a, high_a) = a.split_at(half.min(a.len()));
    let (low_b, high_b) = b.split_at(half.min(b.len()));
    let (low_a, low_b) = (trimmed(low_a), trimmed(low_b));

    let low = mul_mag(low_a, low_b);
    let high = mul_mag(high_a, high_b);

    // the sums may carry into word `half`; keep the recursion at `half`
    // words and fold the carries in separately
    let sum_a = add_mag(low_a, high_a);
    let sum_b = add_mag(low_b, high_b);
    let carry_a = sum_a.len() > half;
    let carry_b = sum_b.len() > half;
    let part_a = trimmed(&sum_a[..half.min(sum_a.len())]);
    let part_b = trimmed(&sum_b[..half.min(sum_b.len())]);

    let mut mid = mul_mag(part_a, part_b);
    if carry_a {
        add_at(&mut mid, &sum_b, half);
    }
    if carry_b {
        add_at(&mut mid, part_a, half);
    }
    trim(&mut mid);
    sub_mag_assign(&mut mid, &high);
    sub_mag_assign(&mut mid, &low);

    let mut result = low;
    add_at(&mut result, &mid, half);
    add_at(&mut result, &high, 2 * half);
    trim(&mut result);
    result
}

/// Product of two magnitudes.
pub(crate) fn mul_mag(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if small.is_empty() {
        return Vec::new();
    }
    if large.len() == 1 {
        let (lo, hi) = split(small[0] as DoubleDigit * large[0] as DoubleDigit);
        let mut out = vec![lo, hi];
        trim(&mut out);
        return out;
    }
    if small.len() < KARATSUBA_THRESHOLD || small.len() * small.len() < large.len() {
        schoolbook(small, large)
    } else {
        karatsuba(small, large)
    }
}

// 实现乘法
impl BigInt {
    pub(crate) fn mul_assign_ref(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        self.mag = mul_mag(&self.mag, &rhs.mag);
        self.negative ^= rhs.negative;
    }

    /// `self * self`.
    pub fn square(&self) -> BigInt {
        BigInt::from_mag(mul_mag(&self.mag, &self.mag), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_words(rng: &mut StdRng, len: usize) -> Vec<Digit> {
        let mut v: Vec<Digit> = (0..len).map(|_| rng.gen()).collect();
        if let Some(top) = v.last_mut() {
            *top |= 1;
        }
        v
    }

    #[test]
    fn karatsuba_matches_schoolbook() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let sizes = [1, 2, 31, 32, 33, 63, 64, 65, 100, 127, 128, 129, 257];
        for &la in &sizes {
            for &lb in &sizes {
                let a = random_words(&mut rng, la);
                let b = random_words(&mut rng, lb);
                assert_eq!(karatsuba(&a, &b), schoolbook(&a, &b), "{} x {}", la, lb);
                assert_eq!(mul_mag(&a, &b), schoolbook(&a, &b), "{} x {}", la, lb);
            }
        }
    }

    #[test]
    fn karatsuba_all_ones() {
        // every half-sum carries
        for len in [32usize, 33, 64, 96, 128] {
            let a = vec![Digit::MAX; len];
            let b = vec![Digit::MAX; len + 7];
            assert_eq!(karatsuba(&a, &b), schoolbook(&a, &b), "len {}", len);
        }
    }

    #[test]
    fn signs() {
        let a = BigInt::from(-6);
        let b = BigInt::from(7);
        assert_eq!(&a * &b, -42);
        assert_eq!(&a * &a, 36);
        assert_eq!(&a * 0, 0);
        assert!(!(&a * 0).is_negative());
        assert_eq!(a.square(), 36);
    }

    #[test]
    fn mul_digit_add_carries() {
        let mut mag = vec![Digit::MAX, Digit::MAX];
        mul_digit_add(&mut mag, 2, 1);
        assert_eq!(mag, vec![Digit::MAX, Digit::MAX, 1]);
    }
}
