use thiserror::Error;

/// Errors from BigInt arithmetic and conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("even root of a negative number")]
    NegativeRoot,
    #[error("root of degree zero")]
    ZeroRootDegree,
    #[error("cannot convert a non-finite float to BigInt")]
    NotFinite,
    #[error("BigInt value out of range for the target type")]
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No digits where at least one was required.
    Empty,
    InvalidDigit(char),
    /// A radix letter that is not one of `x`, `d`, `o`, `b`.
    InvalidRadixMarker(char),
}

/// Failure to read a numeral.
///
/// `index` is the byte offset of the offending character in the input
/// text, or the offset where digits were expected for [`ParseErrorKind::Empty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{}", describe(.kind, .index))]
pub struct ParseBigIntError {
    pub kind: ParseErrorKind,
    pub index: usize,
}

impl ParseBigIntError {
    pub(crate) fn new(kind: ParseErrorKind, index: usize) -> Self {
        ParseBigIntError { kind, index }
    }
}

fn describe(kind: &ParseErrorKind, index: &usize) -> String {
    match kind {
        ParseErrorKind::Empty => format!("no digits at index {}", index),
        ParseErrorKind::InvalidDigit(c) => format!("invalid digit {:?} at index {}", c, index),
        ParseErrorKind::InvalidRadixMarker(c) => {
            format!("invalid radix marker {:?} at index {}", c, index)
        }
    }
}

#[test]
fn test_messages() {
    let e = ParseBigIntError::new(ParseErrorKind::InvalidDigit('g'), 4);
    assert_eq!(e.to_string(), "invalid digit 'g' at index 4");
    assert_eq!(BigIntError::DivisionByZero.to_string(), "attempt to divide by zero");
}
