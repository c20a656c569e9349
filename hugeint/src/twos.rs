//! Two's-complement view of a `BigInt`.
//!
//! A `TwosView` stores limbs together with the fill word that repeats forever
//! above them: `0` for non-negative values, all ones for negative ones. It is
//! built on demand for bitwise work and converted back into sign-magnitude
//! form afterwards; nothing keeps it around.

use crate::big_int::BigInt;
use crate::digit::{Digit, DIGIT_BITS, DIGIT_MAX};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TwosView {
    limbs: Vec<Digit>,
    sign: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, a: Digit, b: Digit) -> Digit {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }

    fn apply_sign(self, a: bool, b: bool) -> bool {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }
}

impl TwosView {
    pub(crate) fn new(x: &BigInt) -> TwosView {
        let mut view = TwosView { limbs: x.mag.clone(), sign: false };
        if x.negative {
            view.invert();
            view.increment();
        }
        view.clear_trailing();
        view
    }

    #[inline]
    pub(crate) fn fill(&self) -> Digit {
        if self.sign {
            DIGIT_MAX
        } else {
            0
        }
    }

    /// Word `i`, reading the fill past the stored limbs.
    #[inline]
    pub(crate) fn word(&self, i: usize) -> Digit {
        self.limbs.get(i).copied().unwrap_or_else(|| self.fill())
    }

    pub(crate) fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Grows with fill words or truncates to `new_len` limbs.
    pub(crate) fn resize(&mut self, new_len: usize) {
        let fill = self.fill();
        self.limbs.resize(new_len, fill);
    }

    /// Strips high limbs equal to the fill.
    pub(crate) fn clear_trailing(&mut self) {
        let fill = self.fill();
        while self.limbs.last() == Some(&fill) {
            self.limbs.pop();
        }
    }

    /// One's complement: flips every limb and the fill.
    pub(crate) fn invert(&mut self) {
        for w in self.limbs.iter_mut() {
            *w = !*w;
        }
        self.sign = !self.sign;
    }

    /// Adds one. A carry out of the top limb lands in the fill: ones wrap
    /// to zeros, zeros gain a new limb.
    pub(crate) fn increment(&mut self) {
        for w in self.limbs.iter_mut() {
            if *w == DIGIT_MAX {
                *w = 0;
            } else {
                *w += 1;
                return;
            }
        }
        if self.sign {
            self.sign = false;
        } else {
            self.limbs.push(1);
        }
    }

    pub(crate) fn get_bit(&self, pos: u64) -> bool {
        let i = (pos / DIGIT_BITS as u64) as usize;
        let shift = (pos % DIGIT_BITS as u64) as u32;
        (self.word(i) >> shift) & 1 == 1
    }

    pub(crate) fn set_bit(&mut self, pos: u64, val: bool) {
        if self.get_bit(pos) == val {
            return;
        }
        self.flip_bit(pos);
    }

    pub(crate) fn flip_bit(&mut self, pos: u64) {
        let i = (pos / DIGIT_BITS as u64) as usize;
        let shift = (pos % DIGIT_BITS as u64) as u32;
        if i >= self.limbs.len() {
            self.resize(i + 1);
        }
        self.limbs[i] ^= 1 << shift;
        self.clear_trailing();
    }

    /// Word-wise `op` over the shorter operand, then the longer operand's tail
    /// combined with the shorter operand's fill.
    pub(crate) fn bitop(&self, other: &TwosView, op: BitOp) -> TwosView {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut limbs: Vec<Digit> = long
            .limbs
            .iter()
            .zip(short.limbs.iter())
            .map(|(&a, &b)| op.apply(a, b))
            .collect();

        let tail = &long.limbs[short.len()..];
        match (op, short.sign) {
            // zeros absorb AND, ones absorb OR: the tail equals the fill
            (BitOp::And, false) | (BitOp::Or, true) => {}
            (BitOp::And, true) | (BitOp::Or, false) | (BitOp::Xor, false) => {
                limbs.extend_from_slice(tail)
            }
            (BitOp::Xor, true) => limbs.extend(tail.iter().map(|&w| !w)),
        }

        let mut result = TwosView {
            limbs,
            sign: op.apply_sign(long.sign, short.sign),
        };
        result.clear_trailing();
        result
    }

    pub(crate) fn into_bigint(mut self) -> BigInt {
        if !self.sign {
            return BigInt::from_mag(self.limbs, false);
        }
        // negate = invert then increment
        self.invert();
        self.increment();
        BigInt::from_mag(self.limbs, true)
    }
}
