//! Number-theoretic helpers and random generation.

use rand::Rng;

use crate::big_int::BigInt;
use crate::digit::{Digit, DIGIT_BITS};
use crate::div::div_rem_mag;
use crate::error::BigIntError;

// 幂运算
impl BigInt {
    /// `self ^ exponent` by square-and-multiply. `x.pow(0) == 1` for every `x`,
    /// zero included.
    pub fn pow(&self, mut exponent: u64) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        while exponent != 0 {
            if exponent & 1 == 1 {
                result.mul_assign_ref(&base);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.square();
            }
        }
        result
    }

    /// `self ^ exponent % modulus`, reducing after every multiply.
    ///
    /// The remainder is truncating like `%`: a negative base raised to an odd
    /// power gives a non-positive result.
    pub fn checked_pow_mod(&self, mut exponent: u64, modulus: &BigInt) -> Result<BigInt, BigIntError> {
        let mut result = BigInt::one().checked_rem(modulus)?;
        let mut base = self.checked_rem(modulus)?;
        while exponent != 0 {
            if exponent & 1 == 1 {
                result.mul_assign_ref(&base);
                result.rem_assign_ref(modulus);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.square();
                base.rem_assign_ref(modulus);
            }
        }
        Ok(result)
    }

    /// Panics when `modulus` is zero.
    pub fn pow_mod(&self, exponent: u64, modulus: &BigInt) -> BigInt {
        match self.checked_pow_mod(exponent, modulus) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

// 最大公约数
impl BigInt {
    /// Euclid on the absolute values; `gcd(x, 0) == |x|`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a: Vec<Digit> = self.mag.clone();
        let mut b: Vec<Digit> = other.mag.clone();
        while !b.is_empty() {
            let (_, rest) = div_rem_mag(&a, &b);
            a = b;
            b = rest;
        }
        BigInt::from_mag(a, false)
    }

    /// `|self / gcd * other|`, zero when either side is zero.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(other);
        let (q, _) = div_rem_mag(&self.mag, &g.mag);
        let mut result = BigInt::from_mag(q, false);
        result.mul_assign_ref(&other.abs());
        result
    }
}

// 开方
impl BigInt {
    /// Floor of the `degree`-th root, built one bit at a time from the top.
    ///
    /// Each candidate bit costs one `pow`, so this runs in roughly
    /// `bits(self)` exponentiations. Odd roots of negative values are
    /// `-root(|self|)`.
    pub fn checked_nth_root(&self, degree: u32) -> Result<BigInt, BigIntError> {
        if degree == 0 {
            return Err(BigIntError::ZeroRootDegree);
        }
        if self.negative && degree % 2 == 0 {
            return Err(BigIntError::NegativeRoot);
        }
        if degree == 1 || self.is_zero() {
            return Ok(self.clone());
        }
        let target = self.abs();
        let mut ans = BigInt::zero();
        let top = target.size_in_bits() / degree as u64;
        for pos in (0..=top).rev() {
            ans.set_bit(pos, true);
            if ans.pow(degree as u64) > target {
                ans.set_bit(pos, false);
            }
        }
        if self.negative {
            ans.negate();
        }
        Ok(ans)
    }

    /// Panics on degree zero or an even root of a negative value.
    pub fn nth_root(&self, degree: u32) -> BigInt {
        match self.checked_nth_root(degree) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn sqrt(&self) -> BigInt {
        self.nth_root(2)
    }

    pub fn cbrt(&self) -> BigInt {
        self.nth_root(3)
    }
}

/// Random `BigInt` generation on top of any `rand::Rng`.
pub trait RandomBigInt {
    /// Uniform value with at most `bits` significant bits. With
    /// `allow_negative` the sign is a fair coin flip.
    fn gen_bigint(&mut self, bits: u64, allow_negative: bool) -> BigInt;

    /// Uniform value in `[0, bound)`. Panics unless `bound` is positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;
}

impl<R: Rng + ?Sized> RandomBigInt for R {
    fn gen_bigint(&mut self, bits: u64, allow_negative: bool) -> BigInt {
        let words = (bits / DIGIT_BITS as u64) as usize;
        let rem = (bits % DIGIT_BITS as u64) as u32;
        let mut mag: Vec<Digit> = Vec::with_capacity(words + 1);
        for _ in 0..words {
            mag.push(self.gen());
        }
        if rem > 0 {
            let last: Digit = self.gen();
            mag.push(last >> (DIGIT_BITS - rem));
        }
        let negative = allow_negative && self.gen::<bool>();
        BigInt::from_mag(mag, negative)
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.is_positive(), "gen_bigint_below needs a positive bound");
        let bits = bound.bits();
        // at worst half the draws land at or above the bound
        loop {
            let n = self.gen_bigint(bits, false);
            if &n < bound {
                return n;
            }
        }
    }
}

impl BigInt {
    /// Random value of at most `bits` bits from the thread RNG.
    pub fn random(bits: u64, allow_negative: bool) -> BigInt {
        rand::thread_rng().gen_bigint(bits, allow_negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pow_small() {
        assert_eq!(BigInt::from(2).pow(10), 1024);
        assert_eq!(BigInt::zero().pow(0), 1);
        assert_eq!(BigInt::from(-3).pow(3), -27);
        assert_eq!(BigInt::from(-3).pow(4), 81);
        assert_eq!(BigInt::from(2).pow(200), BigInt::one() << 200u32);
    }

    #[test]
    fn pow_mod_small() {
        assert_eq!(BigInt::from(4).pow_mod(13, &BigInt::from(497)), 445);
        assert_eq!(BigInt::from(5).pow_mod(0, &BigInt::from(7)), 1);
        assert_eq!(BigInt::from(5).pow_mod(0, &BigInt::from(1)), 0);
        assert_eq!(BigInt::from(-2).pow_mod(3, &BigInt::from(5)), -3);
        assert_eq!(
            BigInt::from(3).checked_pow_mod(2, &BigInt::zero()),
            Err(BigIntError::DivisionByZero)
        );
        let m: BigInt = (BigInt::one() << 127u32) - 1;
        let big = BigInt::from(3).pow(100);
        assert_eq!(BigInt::from(3).pow_mod(100, &m), big % &m);
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(BigInt::from(12).gcd(&BigInt::from(-18)), 6);
        assert_eq!(BigInt::from(-7).gcd(&BigInt::zero()), 7);
        assert_eq!(BigInt::zero().gcd(&BigInt::zero()), 0);
        assert_eq!(BigInt::from(4).lcm(&BigInt::from(-6)), 12);
        assert_eq!(BigInt::from(4).lcm(&BigInt::zero()), 0);
    }

    #[test]
    fn gcd_multi_word() {
        // remainders shrink by whole words between Euclid steps
        let a: BigInt = (BigInt::one() << 100u32) + 12345;
        let b: BigInt = (BigInt::one() << 64u32) + 3;
        assert_eq!(a.gcd(&b), 1);
        assert_eq!(a.lcm(&b), &a * &b);

        for i in 0..40u64 {
            let x = BigInt::from(3).pow(90 + i) + i;
            let y = BigInt::from(7).pow(40 + i % 13) + 1;
            let g = x.gcd(&y);
            assert_eq!(&x % &g, 0);
            assert_eq!(&y % &g, 0);
            assert_eq!(x.lcm(&y) * &g, &x * &y);
        }

        let k = BigInt::from(6).pow(50);
        assert_eq!((&k * 35).gcd(&(&k * 22)), k);
    }

    #[test]
    fn roots() {
        assert_eq!(BigInt::from(99).sqrt(), 9);
        assert_eq!(BigInt::from(100).sqrt(), 10);
        assert_eq!(BigInt::from(-27).cbrt(), -3);
        assert_eq!(BigInt::from(-26).cbrt(), -2);
        assert_eq!(BigInt::from(1).nth_root(5), 1);
        assert_eq!(BigInt::zero().sqrt(), 0);
        assert_eq!((BigInt::one() << 200u32).sqrt(), BigInt::one() << 100u32);
        assert_eq!(BigInt::from(-4).checked_nth_root(2), Err(BigIntError::NegativeRoot));
        assert_eq!(BigInt::from(4).checked_nth_root(0), Err(BigIntError::ZeroRootDegree));
    }

    #[test]
    fn random_bits() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in [0u64, 1, 31, 32, 33, 100] {
            for _ in 0..20 {
                let v = rng.gen_bigint(bits, true);
                assert!(v.bits() <= bits);
            }
        }
        let bound = BigInt::from(1000);
        for _ in 0..100 {
            let v = rng.gen_bigint_below(&bound);
            assert!(!v.is_negative() && v < bound);
        }
        assert!(BigInt::random(64, false).bits() <= 64);
    }
}
