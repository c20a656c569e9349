//! Huge Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers. Arithmetic truncates
//!   toward zero like the primitive integers; bitwise operations and shifts
//!   behave as if the value were stored in infinite two's-complement notation.
//! - [`Radix`]: output radix for prefixed, round-trippable rendering.
//! - [`RandomBigInt`]: random values from any `rand::Rng`.
//!
//! Build with the `u64_digit` feature to store magnitudes in 64-bit words.

mod arith;
mod big_int;
mod big_num_cache;
mod big_num_constants;
mod bitwise;
mod convert;
mod digit;
mod div;
mod error;
mod math;
mod mul;
mod ops;
mod radix;
mod shift;
mod twos;

pub use big_int::BigInt;
pub use digit::Digit;
pub use error::{BigIntError, ParseBigIntError, ParseErrorKind};
pub use math::RandomBigInt;
pub use radix::{DisplayRadix, Radix};

#[cfg(test)]
mod tests {
    use crate::{BigInt, Radix};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-0x1A".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10u32);
        println!("a >> 10 = {}", &a >> 10u32);
        println!("b = {}", b.display_radix(Radix::Hexadecimal));
        assert_eq!(&a / &b * &b + &a % &b, a);
    }
}
