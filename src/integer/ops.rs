// src/integer/ops.rs

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use super::big_int::BigInt;

// Operators mirror the primitive integer types: division by zero panics,
// everything recoverable goes through the named Result methods.

macro_rules! forward_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, |a, b| BigInt::add(a, b));
forward_binop!(Sub, sub, |a, b| BigInt::sub(a, b));
forward_binop!(Mul, mul, |a, b| BigInt::mul(a, b));
forward_binop!(Div, div, |a, b| match BigInt::div(a, b) {
    Ok(q) => q,
    Err(e) => panic!("{}", e),
});
forward_binop!(Rem, rem, |a, b| match BigInt::rem(a, b) {
    Ok(r) => r,
    Err(e) => panic!("{}", e),
});
forward_binop!(BitAnd, bitand, |a, b| BigInt::and(a, b));
forward_binop!(BitOr, bitor, |a, b| BigInt::or(a, b));
forward_binop!(BitXor, bitxor, |a, b| BigInt::xor(a, b));

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        BigInt::not(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        BigInt::not(&self)
    }
}

impl Shl<i64> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: i64) -> BigInt {
        BigInt::shl(self, n)
    }
}

impl Shl<i64> for BigInt {
    type Output = BigInt;

    fn shl(self, n: i64) -> BigInt {
        BigInt::shl(&self, n)
    }
}

impl Shr<i64> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> BigInt {
        BigInt::shr(self, n)
    }
}

impl Shr<i64> for BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> BigInt {
        BigInt::shr(&self, n)
    }
}
