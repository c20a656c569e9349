//! Operator plumbing.
//!
//! Every right-hand operand goes through `Into<BigInt>`, so `x + 1`,
//! `x + &y` and `x + y` all land in the same in-place routine. Primitives on
//! the left are promoted the same way.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

use crate::big_int::BigInt;
use crate::twos::BitOp;

impl From<&BigInt> for BigInt {
    fn from(val: &BigInt) -> Self {
        val.clone()
    }
}

macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<T: Into<BigInt>> $OpAssign<T> for BigInt {
            fn $op_assign(&mut self, rhs: T) {
                let owned: BigInt = rhs.into();
                let $rhs: &BigInt = &owned;
                let $lhs: &mut BigInt = self;
                $body
            }
        }

        impl<T: Into<BigInt>> $Op<T> for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: T) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: Into<BigInt>> $Op<T> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: T) -> BigInt {
                self.clone().$op(rhs)
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.add_signed(rhs, false));
impl_binop!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.add_signed(rhs, true));
impl_binop!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| lhs.mul_assign_ref(rhs));
impl_binop!(Div, div, DivAssign, div_assign, |lhs, rhs| lhs.div_assign_ref(rhs));
impl_binop!(Rem, rem, RemAssign, rem_assign, |lhs, rhs| lhs.rem_assign_ref(rhs));
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, |lhs, rhs| lhs.bitop_assign(rhs, BitOp::And));
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |lhs, rhs| lhs.bitop_assign(rhs, BitOp::Or));
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, |lhs, rhs| lhs.bitop_assign(rhs, BitOp::Xor));

// 原生类型在左侧
macro_rules! impl_primitive_lhs {
    (@ops $t:ty; $($Op:ident $op:ident),*) => {$(
        impl $Op<BigInt> for $t {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> BigInt {
                BigInt::from(self).$op(rhs)
            }
        }

        impl $Op<&BigInt> for $t {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> BigInt {
                BigInt::from(self).$op(rhs)
            }
        }
    )*};
    ($($t:ty)*) => {$(
        impl_primitive_lhs!(@ops $t; Add add, Sub sub, Mul mul, Div div, Rem rem,
            BitAnd bitand, BitOr bitor, BitXor bitxor);

        impl PartialEq<$t> for BigInt {
            fn eq(&self, other: &$t) -> bool {
                *self == BigInt::from(*other)
            }
        }

        impl PartialEq<BigInt> for $t {
            fn eq(&self, other: &BigInt) -> bool {
                BigInt::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&BigInt::from(*other)))
            }
        }

        impl PartialOrd<BigInt> for $t {
            fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                Some(BigInt::from(*self).cmp(other))
            }
        }
    )*};
}

impl_primitive_lhs!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

#[test]
fn test_mixed_operands() {
    let x = BigInt::from(10);
    assert_eq!(&x + 5u8, 15);
    assert_eq!(5i64 - &x, -5);
    assert_eq!(3 * x.clone(), 30);
    assert_eq!(100u128 / &x, 10);
    assert_eq!(-7 % BigInt::from(3), -1);
    assert_eq!(6 & &x, 2);
    assert_eq!(6 | &x, 14);
    assert_eq!(6 ^ &x, 12);
    assert!(x > 9 && x < 11u64 && x >= 10i8 && x <= 10usize);
    assert!(9 < x && -1 < x);
    assert_eq!(10, x);
}

#[test]
fn test_compound_assign() {
    let mut x = BigInt::from(1);
    x += 1;
    x *= &BigInt::from(21);
    assert_eq!(x, 42);
    x -= BigInt::from(2);
    x /= 8u32;
    assert_eq!(x, 5);
    x %= 3;
    assert_eq!(x, 2);
    x <<= 4;
    x |= 1;
    x ^= 0xff;
    x &= -2;
    assert_eq!(x, ((32 | 1) ^ 0xff) & -2);
}
