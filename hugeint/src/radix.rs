//! Text conversions.
//!
//! Numerals accepted by `parse`:
//!
//! ```text
//! numeral := sign* body
//! sign    := '+' | '-'                    each '-' flips the sign
//! body    := '0' marker digits            0x1A, 0b101, 0o17, 0d99
//!          | '0' digits                   leading zero means octal
//!          | marker digits                x1A, b101
//!          | digits marker                1Ax, 101b
//!          | digits                       decimal; must end in a digit
//! marker  := x | d | o | b                either case
//! ```
//!
//! `'` and space may appear anywhere between digits and are ignored.

use std::fmt;
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::big_num_cache::RADIX_GROUPS;
use crate::big_num_constants::*;
use crate::digit::{bit_length, Digit, DoubleDigit, DIGIT_BITS};
use crate::div::div_rem_digit;
use crate::error::{ParseBigIntError, ParseErrorKind};
use crate::mul::mul_digit_add;

/// Output radix for [`BigInt::to_string_radix`] and [`BigInt::display_radix`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Reads a radix letter (`x`, `d`, `o`, `b`, either case).
    pub fn from_marker(c: char) -> Option<Radix> {
        match c.to_ascii_lowercase() {
            'x' => Some(Radix::Hexadecimal),
            'd' => Some(Radix::Decimal),
            'o' => Some(Radix::Octal),
            'b' => Some(Radix::Binary),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }
}

fn marker(c: char, index: usize) -> Result<Radix, ParseBigIntError> {
    Radix::from_marker(c).ok_or_else(|| ParseBigIntError::new(ParseErrorKind::InvalidRadixMarker(c), index))
}

/// Validates `text[start..end]` as digits in `radix` and returns their values.
/// Separators are skipped; error indices are offsets into `text`.
fn collect_digits(text: &str, start: usize, end: usize, radix: u32) -> Result<Vec<u8>, ParseBigIntError> {
    let mut digits = Vec::with_capacity(end - start);
    for (i, c) in text[start..end].char_indices() {
        if SEPARATORS.contains(&c) {
            continue;
        }
        match c.to_digit(radix) {
            Some(d) => digits.push(d as u8),
            None => return Err(ParseBigIntError::new(ParseErrorKind::InvalidDigit(c), start + i)),
        }
    }
    if digits.is_empty() {
        return Err(ParseBigIntError::new(ParseErrorKind::Empty, start));
    }
    Ok(digits)
}

/// Power-of-two radixes: pack bits straight into words from the low end.
fn from_bitwise_digits(digits: &[u8], bits: u32) -> Vec<Digit> {
    let mut mag = Vec::with_capacity(digits.len() * bits as usize / DIGIT_BITS as usize + 1);
    let mut form: DoubleDigit = 0;
    let mut index = 0;
    for &d in digits.iter().rev() {
        form |= (d as DoubleDigit) << index;
        index += bits;
        if index >= DIGIT_BITS {
            mag.push(form as Digit);
            form >>= DIGIT_BITS;
            index -= DIGIT_BITS;
        }
    }
    mag.push(form as Digit);
    mag
}

/// Other radixes: `mag = mag * radix^k + group`, one word-sized group at a time.
fn from_radix_digits(digits: &[u8], radix: u32) -> Vec<Digit> {
    let (super_radix, group_len) = RADIX_GROUPS[radix as usize];
    let mut mag: Vec<Digit> = Vec::new();
    for group in digits.chunks(group_len) {
        let group_val = group.iter().fold(0 as Digit, |acc, &d| acc * radix as Digit + d as Digit);
        let mul = if group.len() == group_len {
            super_radix
        } else {
            (radix as Digit).pow(group.len() as u32)
        };
        mul_digit_add(&mut mag, mul, group_val);
    }
    mag
}

fn from_digits(digits: &[u8], radix: u32) -> Vec<Digit> {
    if radix.is_power_of_two() {
        from_bitwise_digits(digits, radix.trailing_zeros())
    } else {
        from_radix_digits(digits, radix)
    }
}

/// Leading run of `+`/`-`: returns the sign and the offset of the first other character.
fn read_sign(text: &str) -> (bool, usize) {
    let mut negative = false;
    let mut i = 0;
    for b in text.bytes() {
        match b {
            b'+' => {}
            b'-' => negative = !negative,
            _ => break,
        }
        i += 1;
    }
    (negative, i)
}

fn parse_numeral(text: &str) -> Result<BigInt, ParseBigIntError> {
    let (negative, start) = read_sign(text);
    let body = &text[start..];
    let mut chars = body.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Err(ParseBigIntError::new(ParseErrorKind::Empty, start)),
    };

    let (radix, from, to) = if first == '0' {
        match chars.next() {
            Some(m) if m.is_ascii_alphabetic() => (marker(m, start + 1)?, start + 2, text.len()),
            // the leading zero is itself an octal digit, so "0" alone is zero
            _ => (Radix::Octal, start, text.len()),
        }
    } else if first.is_alphabetic() {
        (marker(first, start)?, start + first.len_utf8(), text.len())
    } else {
        let (last_index, last) = match body.char_indices().next_back() {
            Some((i, c)) => (start + i, c),
            None => return Err(ParseBigIntError::new(ParseErrorKind::Empty, start)),
        };
        if last.is_alphabetic() {
            (marker(last, last_index)?, start, last_index)
        } else if last.is_ascii_digit() {
            (Radix::Decimal, start, text.len())
        } else {
            return Err(ParseBigIntError::new(ParseErrorKind::InvalidDigit(last), last_index));
        }
    };

    let radix = radix.value();
    let digits = collect_digits(text, from, to, radix)?;
    Ok(BigInt::from_mag(from_digits(&digits, radix), negative))
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeral(s)
    }
}

// 字符串解析
impl BigInt {
    /// Parses `text` into `self`. On failure `self` is left as zero.
    pub fn parse_into(&mut self, text: &str) -> Result<(), ParseBigIntError> {
        match parse_numeral(text) {
            Ok(v) => {
                *self = v;
                Ok(())
            }
            Err(e) => {
                *self = BigInt::zero();
                Err(e)
            }
        }
    }

    /// Parses an unprefixed numeral in `radix`, with an optional run of
    /// leading signs. Panics if `radix` is outside `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        assert!(
            (MIN_RADIX..=MAX_RADIX).contains(&radix),
            "from_str_radix: radix must lie in the range `[2, 36]` - found {}",
            radix
        );
        let (negative, start) = read_sign(text);
        let digits = collect_digits(text, start, text.len(), radix)?;
        Ok(BigInt::from_mag(from_digits(&digits, radix), negative))
    }
}

/// Value of the `width`-bit field starting at bit `start`.
fn bit_field(mag: &[Digit], start: u64, width: u32) -> u32 {
    let i = (start / DIGIT_BITS as u64) as usize;
    let shift = (start % DIGIT_BITS as u64) as u32;
    let lo = mag.get(i).copied().unwrap_or(0) as DoubleDigit;
    let hi = mag.get(i + 1).copied().unwrap_or(0) as DoubleDigit;
    let both = lo | (hi << DIGIT_BITS);
    ((both >> shift) & ((1 << width) - 1)) as u32
}

fn to_bitwise_digits(mag: &[Digit], bits: u32, upper: bool) -> String {
    let total = match mag.last() {
        None => 0,
        Some(&top) => (mag.len() as u64 - 1) * DIGIT_BITS as u64 + bit_length(top),
    };
    let count = (total + bits as u64 - 1) / bits as u64;
    let mut s = String::with_capacity(count as usize);
    for k in (0..count).rev() {
        let c = DIGITS[bit_field(mag, k * bits as u64, bits) as usize];
        s.push(if upper { c.to_ascii_uppercase() } else { c });
    }
    s
}

/// Double dabble into base-10^9 chunks: for every bit from the top,
/// `acc = acc * 2 + bit`.
fn to_decimal_digits(mag: &[Digit]) -> String {
    let mut chunks: Vec<u32> = vec![0];
    for &word in mag.iter().rev() {
        for bit in (0..DIGIT_BITS).rev() {
            let mut carry = ((word >> bit) & 1) as u32;
            for chunk in chunks.iter_mut() {
                let v = *chunk * 2 + carry;
                if v >= DEC_CHUNK_BASE {
                    *chunk = v - DEC_CHUNK_BASE;
                    carry = 1;
                } else {
                    *chunk = v;
                    carry = 0;
                }
            }
            if carry != 0 {
                chunks.push(carry);
            }
        }
    }
    join_groups(chunks.iter().map(|&c| c as u64), 10, DEC_CHUNK_DIGITS)
}

/// Renders little-endian digit groups of `width` characters each; all but
/// the most significant group are zero-padded.
fn join_groups<I>(groups: I, radix: u32, width: usize) -> String
where
    I: DoubleEndedIterator<Item = u64>,
{
    let mut result = String::new();
    let mut first = true;
    for mut val in groups.rev() {
        let mut group = Vec::with_capacity(width);
        while val != 0 {
            group.push(DIGITS[(val % radix as u64) as usize]);
            val /= radix as u64;
        }
        if !first {
            result.extend(std::iter::repeat('0').take(width - group.len()));
        }
        first = false;
        result.extend(group.iter().rev());
    }
    if result.is_empty() {
        result.push('0');
    }
    result
}

/// Any other radix: peel off word-sized groups by repeated division.
fn to_radix_digits(mag: &[Digit], radix: u32) -> String {
    let (super_radix, group_len) = RADIX_GROUPS[radix as usize];
    let mut groups: Vec<u64> = Vec::new();
    let mut tmp = mag.to_vec();
    while !tmp.is_empty() {
        let (q, r) = div_rem_digit(&tmp, super_radix);
        groups.push(r as u64);
        tmp = q;
    }
    join_groups(groups.into_iter(), radix, group_len)
}

fn mag_to_str_radix(mag: &[Digit], radix: u32, upper: bool) -> String {
    if mag.is_empty() {
        return String::from("0");
    }
    if radix.is_power_of_two() {
        to_bitwise_digits(mag, radix.trailing_zeros(), upper)
    } else if radix == 10 {
        to_decimal_digits(mag)
    } else {
        let s = to_radix_digits(mag, radix);
        if upper {
            s.to_ascii_uppercase()
        } else {
            s
        }
    }
}

// 转换为字符串
impl BigInt {
    /// Renders with the radix prefix (`0x`, `0o`, `0b`) and uppercase hex
    /// digits. The output parses back to the same value.
    pub fn to_string_radix(&self, radix: Radix) -> String {
        let digits = mag_to_str_radix(&self.mag, radix.value(), radix == Radix::Hexadecimal);
        let mut s = String::with_capacity(digits.len() + 3);
        if self.negative {
            s.push('-');
        }
        s.push_str(radix.prefix());
        s.push_str(&digits);
        s
    }

    /// Renders in any radix from 2 to 36 with lowercase digits and no prefix.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(
            (MIN_RADIX..=MAX_RADIX).contains(&radix),
            "to_str_radix: radix must lie in the range `[2, 36]` - found {}",
            radix
        );
        let digits = mag_to_str_radix(&self.mag, radix, false);
        if self.negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    pub fn display_radix(&self, radix: Radix) -> DisplayRadix<'_> {
        DisplayRadix { value: self, radix }
    }
}

/// `Display` adapter returned by [`BigInt::display_radix`].
pub struct DisplayRadix<'a> {
    value: &'a BigInt,
    radix: Radix,
}

impl fmt::Display for DisplayRadix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.value.to_string_radix(self.radix))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &mag_to_str_radix(&self.mag, 10, false))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &mag_to_str_radix(&self.mag, 16, false))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &mag_to_str_radix(&self.mag, 16, true))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0o", &mag_to_str_radix(&self.mag, 8, false))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &mag_to_str_radix(&self.mag, 2, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<BigInt, ParseBigIntError> {
        s.parse()
    }

    fn err(kind: ParseErrorKind, index: usize) -> Result<BigInt, ParseBigIntError> {
        Err(ParseBigIntError::new(kind, index))
    }

    #[test]
    fn prefixes() {
        assert_eq!(parse("0x1A").unwrap(), 26);
        assert_eq!(parse("0X1a").unwrap(), 26);
        assert_eq!(parse("-0b101").unwrap(), -5);
        assert_eq!(parse("0o17").unwrap(), 15);
        assert_eq!(parse("017").unwrap(), 15);
        assert_eq!(parse("0d99").unwrap(), 99);
        assert_eq!(parse("0").unwrap(), 0);
        assert_eq!(parse("x1A").unwrap(), 26);
        assert_eq!(parse("b101").unwrap(), 5);
        assert_eq!(parse("1Ax").unwrap(), 26);
        assert_eq!(parse("101b").unwrap(), 5);
        assert_eq!(parse("17o").unwrap(), 15);
        assert_eq!(parse("42").unwrap(), 42);
    }

    #[test]
    fn signs_and_separators() {
        assert_eq!(parse("--5").unwrap(), 5);
        assert_eq!(parse("+-+5").unwrap(), -5);
        assert_eq!(parse("-0").unwrap(), 0);
        assert!(!parse("-0").unwrap().is_negative());
        assert_eq!(parse("1'000'000").unwrap(), 1_000_000);
        assert_eq!(parse("0xFF FF").unwrap(), 0xFFFF);
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), err(ParseErrorKind::Empty, 0));
        assert_eq!(parse("-"), err(ParseErrorKind::Empty, 1));
        assert_eq!(parse("0x"), err(ParseErrorKind::Empty, 2));
        assert_eq!(parse("0xG1"), err(ParseErrorKind::InvalidDigit('G'), 2));
        assert_eq!(parse("0z1"), err(ParseErrorKind::InvalidRadixMarker('z'), 1));
        assert_eq!(parse("12q"), err(ParseErrorKind::InvalidRadixMarker('q'), 2));
        assert_eq!(parse("1z3"), err(ParseErrorKind::InvalidDigit('z'), 1));
        assert_eq!(parse("089"), err(ParseErrorKind::InvalidDigit('8'), 1));
        assert_eq!(parse("12 "), err(ParseErrorKind::InvalidDigit(' '), 2));
        assert_eq!(parse("-0b102"), err(ParseErrorKind::InvalidDigit('2'), 5));
    }

    #[test]
    fn parse_into_resets() {
        let mut x = BigInt::from(77);
        assert!(x.parse_into("0x10").is_ok());
        assert_eq!(x, 16);
        assert!(x.parse_into("0x1G").is_err());
        assert!(x.is_zero());
    }

    #[test]
    fn radix_strings() {
        let x = BigInt::from(-26);
        assert_eq!(x.to_string_radix(Radix::Hexadecimal), "-0x1A");
        assert_eq!(x.to_string_radix(Radix::Octal), "-0o32");
        assert_eq!(x.to_string_radix(Radix::Binary), "-0b11010");
        assert_eq!(x.to_string_radix(Radix::Decimal), "-26");
        assert_eq!(BigInt::zero().to_string_radix(Radix::Hexadecimal), "0x0");
        assert_eq!(x.to_str_radix(36), "-q");
        assert_eq!(BigInt::from(35).to_str_radix(36), "z");
        assert_eq!(BigInt::from(1_000_000_007u64).to_str_radix(7), "33531600626");
        for radix in [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
            let y: BigInt = (BigInt::from(-3) << 150u32) + 12345;
            assert_eq!(parse(&y.to_string_radix(radix)).unwrap(), y);
        }
    }

    #[test]
    fn str_radix_round_trip() {
        let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
        for radix in 2..=36 {
            let s = x.to_str_radix(radix);
            assert_eq!(BigInt::from_str_radix(&s, radix).unwrap(), x, "radix {}", radix);
        }
        assert_eq!(BigInt::from_str_radix("zz", 36).unwrap(), 35 * 36 + 35);
    }

    #[test]
    #[should_panic]
    fn str_radix_bad_radix() {
        let _ = BigInt::from_str_radix("1", 37);
    }

    #[test]
    fn decimal_across_chunks() {
        let x = BigInt::from(10u64.pow(18));
        assert_eq!(x.to_string(), "1000000000000000000");
        let y = BigInt::from(u128::MAX);
        assert_eq!(y.to_string(), u128::MAX.to_string());
        assert_eq!((-&y).to_string(), format!("-{}", u128::MAX));
    }

    #[test]
    fn formatter_flags() {
        let x = BigInt::from(255);
        assert_eq!(format!("{:x}", x), "ff");
        assert_eq!(format!("{:#X}", x), "0xFF");
        assert_eq!(format!("{:#o}", x), "0o377");
        assert_eq!(format!("{:b}", x), "11111111");
        assert_eq!(format!("{:>6}", x), "   255");
        assert_eq!(format!("{:+}", x), "+255");
        assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
        assert_eq!(format!("{}", x.display_radix(Radix::Hexadecimal)), "0xFF");
        assert_eq!(format!("{:>8}", x.display_radix(Radix::Octal)), "   0o377");
    }
}
