//! Conversions to and from the native number types.
//!
//! Narrowing comes in two flavors: `to_*` truncates to the low bits like an
//! `as` cast, `TryFrom<&BigInt>` fails with [`BigIntError::OutOfRange`].

use crate::big_int::BigInt;
use crate::digit::{low_u128, words_from_u128};
use crate::error::BigIntError;
use crate::shift::shr_mag;

impl From<bool> for BigInt {
    fn from(val: bool) -> Self {
        if val {
            BigInt::one()
        } else {
            BigInt::zero()
        }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u:ty),*) => {$(
        impl From<$u> for BigInt {
            fn from(val: $u) -> Self {
                BigInt::from_mag(words_from_u128(val as u128), false)
            }
        }
    )*};
}

macro_rules! impl_signed_to_big_int {
    ($($i:ty),*) => {$(
        impl From<$i> for BigInt {
            fn from(val: $i) -> Self {
                BigInt::from_mag(words_from_u128(val.unsigned_abs() as u128), val < 0)
            }
        }
    )*};
}

impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 浮点数转换
impl TryFrom<f64> for BigInt {
    type Error = BigIntError;

    /// Truncates toward zero.
    fn try_from(val: f64) -> Result<Self, Self::Error> {
        if !val.is_finite() {
            return Err(BigIntError::NotFinite);
        }
        let bits = val.to_bits();
        let negative = bits >> 63 == 1;
        let exponent = ((bits >> 52) & 0x7ff) as i64;
        if exponent == 0 {
            // zero or subnormal, |val| < 1
            return Ok(BigInt::zero());
        }
        let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
        Ok(from_parts(negative, mantissa, exponent - 1075))
    }
}

impl TryFrom<f32> for BigInt {
    type Error = BigIntError;

    /// Truncates toward zero.
    fn try_from(val: f32) -> Result<Self, Self::Error> {
        if !val.is_finite() {
            return Err(BigIntError::NotFinite);
        }
        let bits = val.to_bits();
        let negative = bits >> 31 == 1;
        let exponent = ((bits >> 23) & 0xff) as i64;
        if exponent == 0 {
            return Ok(BigInt::zero());
        }
        let mantissa = ((bits & ((1 << 23) - 1)) | (1 << 23)) as u64;
        Ok(from_parts(negative, mantissa, exponent - 150))
    }
}

/// `(-1)^negative * mantissa * 2^exponent`, truncated.
fn from_parts(negative: bool, mantissa: u64, exponent: i64) -> BigInt {
    let mut result = BigInt::from(mantissa);
    if exponent >= 0 {
        result.shl_bits(exponent as u64);
    } else {
        let (mag, _) = shr_mag(&result.mag, exponent.unsigned_abs());
        result = BigInt::from_mag(mag, false);
    }
    if negative {
        result.negate();
    }
    result
}

// 转换为原生类型
impl BigInt {
    /// Low 128 bits of the two's-complement form.
    fn low_bits(&self) -> u128 {
        let low = low_u128(&self.mag);
        if self.negative {
            low.wrapping_neg()
        } else {
            low
        }
    }

    /// Top 64 significant bits of `|self|` and the shift that restores them.
    /// Bit 0 is sticky: it is set when any lower bit was dropped.
    fn top_bits(&self) -> (u64, u64) {
        let n = self.bits();
        if n <= 64 {
            return (low_u128(&self.mag) as u64, 0);
        }
        let shift = n - 64;
        let (mag, lost) = shr_mag(&self.mag, shift);
        (low_u128(&mag) as u64 | lost as u64, shift)
    }

    /// Nearest `f64`, or a signed infinity past `f64::MAX`.
    pub fn to_f64(&self) -> f64 {
        let (top, shift) = self.top_bits();
        let shift = shift.min(i32::MAX as u64) as i32;
        let v = top as f64 * 2f64.powi(shift);
        if self.negative {
            -v
        } else {
            v
        }
    }

    /// Nearest `f32`, or a signed infinity past `f32::MAX`.
    pub fn to_f32(&self) -> f32 {
        let (top, shift) = self.top_bits();
        let shift = shift.min(i32::MAX as u64) as i32;
        let v = top as f32 * 2f32.powi(shift);
        if self.negative {
            -v
        } else {
            v
        }
    }

    /// `true` for any non-zero value.
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }
}

macro_rules! impl_big_int_to_native {
    ($($t:ty => $to:ident),*) => {
        impl BigInt {$(
            /// Truncating conversion, like an `as` cast between primitives.
            pub fn $to(&self) -> $t {
                self.low_bits() as $t
            }
        )*}

        $(
            impl TryFrom<&BigInt> for $t {
                type Error = BigIntError;

                fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
                    if fits(val, <$t>::MIN != 0, <$t>::BITS) {
                        Ok(val.low_bits() as $t)
                    } else {
                        Err(BigIntError::OutOfRange)
                    }
                }
            }

            impl TryFrom<BigInt> for $t {
                type Error = BigIntError;

                fn try_from(val: BigInt) -> Result<Self, Self::Error> {
                    <$t>::try_from(&val)
                }
            }
        )*
    };
}

fn fits(val: &BigInt, signed: bool, bits: u32) -> bool {
    if signed {
        // -2^(n-1) reports n-1 bits, 2^(n-1) reports n
        val.size_in_bits() < bits as u64
    } else {
        !val.is_negative() && val.bits() <= bits as u64
    }
}

impl_big_int_to_native!(
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize,
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_natives() {
        assert_eq!(BigInt::from(true), 1);
        assert_eq!(BigInt::from(false), 0);
        assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInt::from(i8::MIN), -128);
    }

    #[test]
    fn truncating() {
        let x: BigInt = (BigInt::one() << 100u32) + 0x1234;
        assert_eq!(x.to_u16(), 0x1234);
        assert_eq!(x.to_u64(), 0x1234);
        assert_eq!(BigInt::from(-1).to_u8(), 255);
        assert_eq!(BigInt::from(-1).to_u128(), u128::MAX);
        assert_eq!(BigInt::from(300).to_i8(), 300i32 as i8);
        assert_eq!(BigInt::from(-300).to_i8(), -300i32 as i8);
        assert_eq!(BigInt::from(i64::MIN).to_i64(), i64::MIN);
        assert_eq!((-(BigInt::one() << 130u32) - 5).to_i32(), -5);
    }

    #[test]
    fn checked() {
        assert_eq!(i8::try_from(&BigInt::from(-128)), Ok(-128));
        assert_eq!(i8::try_from(&BigInt::from(127)), Ok(127));
        assert_eq!(i8::try_from(&BigInt::from(128)), Err(BigIntError::OutOfRange));
        assert_eq!(i8::try_from(&BigInt::from(-129)), Err(BigIntError::OutOfRange));
        assert_eq!(u8::try_from(&BigInt::from(255)), Ok(255));
        assert_eq!(u8::try_from(&BigInt::from(-1)), Err(BigIntError::OutOfRange));
        assert_eq!(u128::try_from(BigInt::from(u128::MAX)), Ok(u128::MAX));
        assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
        assert_eq!(u64::try_from(&(BigInt::one() << 64u32)), Err(BigIntError::OutOfRange));
    }

    #[test]
    fn floats() {
        assert_eq!(BigInt::try_from(-3.99f64), Ok(BigInt::from(-3)));
        assert_eq!(BigInt::try_from(0.5f64), Ok(BigInt::zero()));
        assert_eq!(BigInt::try_from(1e20f64).unwrap().to_string(), "100000000000000000000");
        assert_eq!(BigInt::try_from(f64::NAN), Err(BigIntError::NotFinite));
        assert_eq!(BigInt::try_from(f32::NEG_INFINITY), Err(BigIntError::NotFinite));
        assert_eq!(BigInt::try_from(16777216.0f32), Ok(BigInt::from(1 << 24)));
        assert_eq!(BigInt::try_from(-2.5f32), Ok(BigInt::from(-2)));

        let big = BigInt::one() << 100u32;
        assert_eq!(big.to_f64(), 2f64.powi(100));
        assert_eq!((-&big).to_f32(), -(2f32.powi(100)));
        assert_eq!(BigInt::from(-12345).to_f64(), -12345.0);
        assert_eq!((BigInt::one() << 2000u32).to_f64(), f64::INFINITY);
        assert_eq!((-(BigInt::one() << 200u32)).to_f32(), f32::NEG_INFINITY);
        assert_eq!(BigInt::zero().to_f64(), 0.0);
    }

    #[test]
    fn floats_round_once() {
        // just above a tie once the low bit is shifted out
        let x: BigInt = (BigInt::one() << 64u32) + 2049;
        assert_eq!(x.to_f64(), 18446744073709555712.0);
        assert_eq!((-&x).to_f64(), -18446744073709555712.0);
        let exact_tie: BigInt = (BigInt::one() << 64u32) + 2048;
        assert_eq!(exact_tie.to_f64(), 18446744073709551616.0);

        let y: BigInt = (BigInt::one() << 70u32) + (BigInt::one() << 46u32) + 1;
        assert_eq!(y.to_f32(), 2f32.powi(70) + 2f32.powi(47));
    }
}
