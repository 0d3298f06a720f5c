// src/decimal/ops.rs

use std::ops::{Add, Mul, Neg, Sub};

use super::big_decimal::BigDecimal;

// Add and Sub are exact and total; Mul panics only when the summed
// exponent leaves the 32-bit range. Division always needs a rounding
// decision, so it stays on the named methods.

macro_rules! forward_decimal_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&BigDecimal> for &BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $trait<BigDecimal> for BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&BigDecimal> for BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<BigDecimal> for &BigDecimal {
            type Output = BigDecimal;

            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                $trait::$method(self, &rhs)
            }
        }
    };
}

forward_decimal_binop!(Add, add, |a, b| BigDecimal::add(a, b));
forward_decimal_binop!(Sub, sub, |a, b| BigDecimal::sub(a, b));
forward_decimal_binop!(Mul, mul, |a, b| match BigDecimal::mul(a, b) {
    Ok(p) => p,
    Err(e) => panic!("{}", e),
});

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::neg(self)
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::parse(s).unwrap()
    }

    #[test]
    fn operators_delegate() {
        assert_eq!(&dec("1.5") + &dec("0.25"), dec("1.75"));
        assert_eq!(dec("1.5") - dec("0.25"), dec("1.25"));
        assert_eq!(&dec("1.5") * &dec("2"), dec("3.0"));
        assert_eq!(-dec("1.5"), dec("-1.5"));
    }
}
