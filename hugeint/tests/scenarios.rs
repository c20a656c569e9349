//! End-to-end scenarios on the public surface.

use hugeint::{BigInt, BigIntError, ParseErrorKind, Radix};

const FACTORIAL_500_HEX: &str = concat!(
    "0x",
    "A38A524C0D1E9AEBF9396F0487F2C9FFA17B9E95F4D5EF885B0DA29F443998AABDED76D07A18EA7A",
    "D0FB8C8A37BA26BC0449972E35CCE5EFEFA26200AF11C9D48A09E3DFF74EEA189C2742272D3EADB6",
    "B0122A51F29C394EC3BD7582C99AD70EA31BE92817A97B3C2318786F1775CF51E5F91B8726E8FE9A",
    "38DC7A3964A8B4CFC30ABB2123E8A1BFBE4D7367C71AA63748200CBCD1FFE4CA973B78B993D4FB5E",
    "BDB7425D3045F7AAD5246CAF00DE90E652855D288915CD1910ACB3CCD343BED3D9CF3A1A2C521D4F",
    "F11AA436BCDFF494F989FF60B7D1765611C705FBE6FCA8261486A820574DA39F288A5D39C14183FA",
    "6EEFDBCECA41A52C401C9AD64549AD870458BE43543C2246CBEB39AFCF620BE5FDB3764E650918D4",
    "06E6C1D01A8496AA3E170F7D50388785487DE096E003A0E1CF4743FB35D7CF1E1A58038C19C1295F",
    "50D51F1D9F434E4B69ABABC345495FAE01D718C7ECAE74003B853EFA7A7170D892D6A8774287C6CF",
    "404978575137DFCB6903002C37DF8E10A3E526DF8BF111345F3F20F668CE73B8339A13325DB571C1",
    "A7BD56373412979B2840000000000000000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000000000000000000000000000000000000",
);

fn factorial(n: u32) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * k)
}

#[test]
fn factorial_500_hex() {
    let f = factorial(500);
    assert_eq!(f.to_string_radix(Radix::Hexadecimal), FACTORIAL_500_HEX);
    assert_eq!(FACTORIAL_500_HEX.parse::<BigInt>().unwrap(), f);
    assert_eq!(format!("{:X}", f), &FACTORIAL_500_HEX[2..]);
}

#[test]
fn factorial_30_decimal() {
    assert_eq!(factorial(30).to_string(), "265252859812191058636308480000000");
}

#[test]
fn literals() {
    assert_eq!("0x1A".parse::<BigInt>().unwrap(), 26);
    assert_eq!("-0b101".parse::<BigInt>().unwrap(), -5);
    assert_eq!(BigInt::from(2).pow(10), 1024);
}

#[test]
fn truncating_remainder() {
    assert_eq!(BigInt::from(7) % BigInt::from(-3), 1);
    assert_eq!(BigInt::from(-7) % BigInt::from(3), -1);
    assert_eq!(BigInt::from(7) / BigInt::from(-3), -2);
    assert_eq!(BigInt::from(-7) / BigInt::from(3), -2);
    // shifts floor instead
    assert_eq!(BigInt::from(-7) >> 1u32, -4);
}

#[test]
fn errors_are_reported() {
    let err = "12#4".parse::<BigInt>().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidDigit('#'));
    assert_eq!(err.index, 2);
    assert_eq!(err.to_string(), "invalid digit '#' at index 2");
    assert_eq!(BigInt::one().div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
}

#[test]
fn gcd_and_lcm_of_factorials() {
    let a = factorial(40);
    let b = factorial(25) * 7919;
    assert_eq!(a.gcd(&b), factorial(25));
    assert_eq!(a.lcm(&b), &a * 7919);
}

#[test]
fn roots_of_powers() {
    let base: BigInt = "123456789123456789123456789".parse().unwrap();
    for degree in 1..=5u32 {
        let p = base.pow(degree as u64);
        assert_eq!(p.nth_root(degree), base);
        assert_eq!((&p - 1).nth_root(degree), &base - 1);
    }
}

#[test]
fn mersenne_pow_mod() {
    // Fermat: 3^(p-1) = 1 mod p for the prime p = 2^127 - 1
    let p: BigInt = (BigInt::one() << 127u32) - 1;
    let e = (1u128 << 127) - 2;
    let mut acc = BigInt::one();
    let mut base = BigInt::from(3);
    let mut k = e;
    while k != 0 {
        if k & 1 == 1 {
            acc = acc * &base % &p;
        }
        base = base.square() % &p;
        k >>= 1;
    }
    assert_eq!(acc, 1);
    let m = BigInt::from(1_000_000_007u64);
    let r = BigInt::from(3).pow_mod(u64::MAX, &m);
    assert!(!r.is_negative() && r < m);
}
