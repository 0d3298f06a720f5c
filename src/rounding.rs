// src/rounding.rs

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::integer::BigInt;

/// How to resolve a quotient that cannot be represented exactly.
///
/// `Unnecessary` asserts exactness: any discarded remainder becomes an
/// arithmetic failure instead of a rounded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbor, ties away from zero.
    HalfUp,
    /// Nearest neighbor, ties toward zero.
    HalfDown,
    /// Nearest neighbor, ties to the even neighbor.
    HalfEven,
    /// No rounding permitted.
    Unnecessary,
}

/// The shared rounded integer division behind decimal division and rescale.
pub struct RoundingEngine;

impl RoundingEngine {
    /// `x / y` rounded under `mode`.
    ///
    /// The truncated quotient is incremented away from zero in the
    /// direction of the exact quotient's sign whenever the mode asks for
    /// it; the half modes compare twice the remainder against the divisor.
    pub fn divide_rounded(x: &BigInt, y: &BigInt, mode: RoundingMode) -> Result<BigInt> {
        let (q, r) = x.div_rem(y)?;
        if r.is_zero() {
            return Ok(q);
        }
        let qsign: i8 = if x.signum() * y.signum() < 0 { -1 } else { 1 };
        let increment = match mode {
            RoundingMode::Unnecessary => {
                return Err(Error::Arithmetic("rounding necessary"));
            }
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => qsign > 0,
            RoundingMode::Floor => qsign < 0,
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
                let doubled = r.abs().mul(&BigInt::two());
                match doubled.cmp(&y.abs()) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => match mode {
                        RoundingMode::HalfUp => true,
                        RoundingMode::HalfDown => false,
                        _ => q.is_odd(),
                    },
                }
            }
        };
        if !increment {
            return Ok(q);
        }
        Ok(if qsign > 0 {
            q.add(&BigInt::one())
        } else {
            q.sub(&BigInt::one())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divide(x: i64, y: i64, mode: RoundingMode) -> i64 {
        RoundingEngine::divide_rounded(&BigInt::from_i64(x), &BigInt::from_i64(y), mode)
            .unwrap()
            .to_i64()
            .unwrap()
    }

    #[test]
    fn exact_quotients_ignore_the_mode() {
        for mode in [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::Unnecessary,
        ] {
            assert_eq!(divide(12, 4, mode), 3);
            assert_eq!(divide(-12, 4, mode), -3);
        }
    }

    #[test]
    fn directed_modes() {
        assert_eq!(divide(7, 2, RoundingMode::Up), 4);
        assert_eq!(divide(-7, 2, RoundingMode::Up), -4);
        assert_eq!(divide(7, 2, RoundingMode::Down), 3);
        assert_eq!(divide(-7, 2, RoundingMode::Down), -3);
        assert_eq!(divide(7, 2, RoundingMode::Ceiling), 4);
        assert_eq!(divide(-7, 2, RoundingMode::Ceiling), -3);
        assert_eq!(divide(7, 2, RoundingMode::Floor), 3);
        assert_eq!(divide(-7, 2, RoundingMode::Floor), -4);
        // a zero truncated quotient still rounds directionally
        assert_eq!(divide(1, 3, RoundingMode::Ceiling), 1);
        assert_eq!(divide(-1, 3, RoundingMode::Ceiling), 0);
        assert_eq!(divide(1, 3, RoundingMode::Floor), 0);
        assert_eq!(divide(-1, 3, RoundingMode::Floor), -1);
        assert_eq!(divide(-1, -3, RoundingMode::Ceiling), 1);
        assert_eq!(divide(1, -3, RoundingMode::Floor), -1);
    }

    #[test]
    fn half_modes() {
        assert_eq!(divide(5, 2, RoundingMode::HalfUp), 3);
        assert_eq!(divide(-5, 2, RoundingMode::HalfUp), -3);
        assert_eq!(divide(5, 2, RoundingMode::HalfDown), 2);
        assert_eq!(divide(5, 2, RoundingMode::HalfEven), 2);
        assert_eq!(divide(7, 2, RoundingMode::HalfEven), 4);
        assert_eq!(divide(-7, 2, RoundingMode::HalfEven), -4);
        assert_eq!(divide(11, 4, RoundingMode::HalfDown), 3);
        assert_eq!(divide(9, 4, RoundingMode::HalfUp), 2);
    }

    #[test]
    fn unnecessary_rejects_inexact() {
        assert!(matches!(
            RoundingEngine::divide_rounded(
                &BigInt::from_i64(7),
                &BigInt::from_i64(2),
                RoundingMode::Unnecessary
            ),
            Err(Error::Arithmetic(_))
        ));
    }
}
