use lazy_static::*;

use crate::big_num_constants::*;
use crate::digit::{Digit, DoubleDigit};

lazy_static! {
    /// For each radix `r`, the largest power `r^k` that fits in one word, paired with `k`.
    /// Parsing and rendering in arbitrary radixes move `k` characters per word operation.
    pub static ref RADIX_GROUPS: [(Digit, usize); MAX_RADIX as usize + 1] = {
        let mut groups = [(0 as Digit, 0_usize); MAX_RADIX as usize + 1];
        for radix in MIN_RADIX..=MAX_RADIX {
            let mut power: DoubleDigit = radix as DoubleDigit;
            let mut count = 1;
            while power * radix as DoubleDigit <= Digit::MAX as DoubleDigit {
                power *= radix as DoubleDigit;
                count += 1;
            }
            groups[radix as usize] = (power as Digit, count);
        }
        groups
    };
}

#[test]
fn test_radix_groups() {
    let (ten, k) = RADIX_GROUPS[10];
    assert_eq!(ten as u128, 10u128.pow(k as u32));
    assert!(ten as u128 * 10 > Digit::MAX as u128);
    let (two, k) = RADIX_GROUPS[2];
    assert_eq!(k as u32, Digit::BITS - 1);
    assert_eq!(two as u128, 1u128 << k);
}
