//! Machine word used for magnitude storage.
//!
//! The width is picked at build time: 32-bit words by default, 64-bit words
//! with the `u64_digit` feature. Everything above this module only talks
//! about `Digit::BITS`, so both widths produce identical values.

#[cfg(not(feature = "u64_digit"))]
mod width {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
}

#[cfg(feature = "u64_digit")]
mod width {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
}

pub use width::{Digit, DoubleDigit};

pub const DIGIT_BITS: u32 = Digit::BITS;
pub const DIGIT_MAX: Digit = Digit::MAX;

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub const fn adc(a: Digit, b: Digit, carry: Digit) -> (Digit, Digit) {
    let tmp = a as DoubleDigit + b as DoubleDigit + carry as DoubleDigit;
    (tmp as Digit, (tmp >> DIGIT_BITS) as Digit)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub const fn sbb(a: Digit, b: Digit, borrow: Digit) -> (Digit, Digit) {
    let tmp = (a as DoubleDigit)
        .wrapping_sub(b as DoubleDigit)
        .wrapping_sub(borrow as DoubleDigit);
    (tmp as Digit, (tmp >> (2 * DIGIT_BITS - 1)) as Digit)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub const fn mac(a: Digit, b: Digit, c: Digit, carry: Digit) -> (Digit, Digit) {
    let tmp = a as DoubleDigit * b as DoubleDigit + c as DoubleDigit + carry as DoubleDigit;
    (tmp as Digit, (tmp >> DIGIT_BITS) as Digit)
}

/// Splits a double word into (low, high).
#[inline(always)]
pub const fn split(v: DoubleDigit) -> (Digit, Digit) {
    (v as Digit, (v >> DIGIT_BITS) as Digit)
}

/// Number of significant bits in a single word.
#[inline(always)]
pub const fn bit_length(d: Digit) -> u64 {
    (DIGIT_BITS - d.leading_zeros()) as u64
}

/// Packs a `u128` into little-endian words, trailing zero words removed.
pub fn words_from_u128(mut val: u128) -> Vec<Digit> {
    let mut words = Vec::new();
    while val != 0 {
        words.push(val as Digit);
        val >>= DIGIT_BITS;
    }
    words
}

/// Low 128 bits of a little-endian word slice.
pub fn low_u128(words: &[Digit]) -> u128 {
    let per = (128 / DIGIT_BITS) as usize;
    words
        .iter()
        .take(per)
        .enumerate()
        .fold(0u128, |acc, (i, &w)| acc | ((w as u128) << (i as u32 * DIGIT_BITS)))
}
