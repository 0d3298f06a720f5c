// src/decimal/divide.rs

use std::cmp::Ordering;

use log::debug;

use crate::context::MathContext;
use crate::error::{Error, Result};
use crate::integer::BigInt;
use crate::rounding::{RoundingEngine, RoundingMode};
use super::big_decimal::{checked_exponent, BigDecimal};

impl BigDecimal {
    /// Exact division. Fails when the quotient has an infinite decimal
    /// expansion; an exact result lands on the preferred exponent
    /// `self.exponent - rhs.exponent` or better.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        check_divisor(self, rhs)?;
        let preferred = (self.exponent as i64 - rhs.exponent as i64)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        if self.is_zero() {
            return Ok(Self::new(BigInt::zero(), preferred));
        }
        let wp = working_precision(self.precision(), rhs.precision(), 0);
        let ctx = MathContext::new(wp, RoundingMode::Unnecessary);
        let q = match self.divide_with_context(rhs, &ctx) {
            Ok(q) => q,
            Err(Error::Arithmetic("rounding necessary")) => {
                return Err(Error::Arithmetic("non-terminating decimal expansion"));
            }
            Err(e) => return Err(e),
        };
        if q.exponent() > preferred {
            return q.rescale(preferred, RoundingMode::Unnecessary);
        }
        Ok(q)
    }

    /// Division rounded to the context's precision.
    ///
    /// The coefficients are normalized so the scaled quotient falls in
    /// (0.1, 1], the dividend is raised by `ctx.precision` digits, and the
    /// rounded coefficient quotient is placed back on the preferred
    /// exponent; an exact quotient then sheds its trailing zeros.
    pub fn divide_with_context(&self, rhs: &Self, ctx: &MathContext) -> Result<Self> {
        if ctx.is_unlimited() {
            return self.divide(rhs);
        }
        check_divisor(self, rhs)?;
        let preferred = self.exponent as i64 - rhs.exponent as i64;
        if self.is_zero() {
            return Ok(Self::new(
                BigInt::zero(),
                preferred.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        let xprec = self.precision() as i64;
        let yprec = rhs.precision() as i64;
        let mut x = self.coefficient.clone();
        let mut y = rhs.coefficient.clone();
        let adjust = if compare_magnitude_normalized(&x, xprec, &y, yprec) == Ordering::Greater
        {
            y = y.mul(&BigInt::ten());
            1i64
        } else {
            0i64
        };
        let delta = ctx.precision as i64 - (xprec - yprec);
        if delta > 0 {
            x = x.mul(&BigInt::pow10(delta as u64));
        } else if delta < 0 {
            y = y.mul(&BigInt::pow10((-delta) as u64));
        }
        debug!(
            "context divide at precision {}: delta {}, adjust {}",
            ctx.precision, delta, adjust
        );
        let q = RoundingEngine::divide_rounded(&x, &y, ctx.mode)?;
        let exponent = checked_exponent(preferred - delta + adjust, q.is_zero())?;
        let mut result = Self::new(q, exponent).round_to_context(ctx)?;
        if let Ok(product) = result.mul(rhs) {
            if product.compare(self) == Ordering::Equal {
                result = result.strip_toward(preferred);
            }
        }
        Ok(result)
    }

    /// The integer part of `self / rhs`, always at exponent 0.
    pub fn divide_integer(&self, rhs: &Self) -> Result<Self> {
        check_divisor(self, rhs)?;
        if self.is_zero() {
            return Ok(Self::new(BigInt::zero(), 0));
        }
        let spread = (self.exponent as i64 - rhs.exponent as i64).unsigned_abs();
        let wp = working_precision(self.precision(), rhs.precision(), spread);
        let q = self.divide_with_context(rhs, &MathContext::new(wp, RoundingMode::Down))?;
        match q.exponent().cmp(&0) {
            Ordering::Less => q.rescale(0, RoundingMode::Down),
            Ordering::Greater => q.rescale(0, RoundingMode::Unnecessary),
            Ordering::Equal => Ok(q),
        }
    }

    /// `self - (self divide_integer rhs) * rhs`; the sign follows `self`.
    pub fn remainder(&self, rhs: &Self) -> Result<Self> {
        let integral = self.divide_integer(rhs)?;
        Ok(self.sub(&integral.mul(rhs)?))
    }

    // Remove trailing zeros, but never past the preferred exponent.
    fn strip_toward(&self, preferred: i64) -> Self {
        let mut coefficient = self.coefficient.clone();
        let mut exponent = self.exponent as i64;
        while exponent < preferred && exponent < i32::MAX as i64 && !coefficient.is_zero() {
            let (q, r) = coefficient.div_rem_by_nonzero(&BigInt::ten());
            if !r.is_zero() {
                break;
            }
            coefficient = q;
            exponent += 1;
        }
        Self::new(coefficient, exponent as i32)
    }
}

fn check_divisor(dividend: &BigDecimal, divisor: &BigDecimal) -> Result<()> {
    if divisor.is_zero() {
        return Err(if dividend.is_zero() {
            Error::Arithmetic("zero divided by zero")
        } else {
            Error::Arithmetic("division by zero")
        });
    }
    Ok(())
}

// Enough working digits to hold any terminating quotient of the operands:
// dividend precision plus ceil(10/3) digits per divisor digit.
fn working_precision(xprec: u32, yprec: u32, extra: u64) -> u32 {
    let wp = xprec as i64 + (10 * yprec as i64 + 2) / 3 + extra.min(i64::MAX as u64) as i64;
    wp.min(i32::MAX as i64) as u32
}

// Compare |x| and |y| with the shorter coefficient scaled up to the digit
// count of the longer, deciding whether the raw quotient exceeds one.
fn compare_magnitude_normalized(x: &BigInt, xprec: i64, y: &BigInt, yprec: i64) -> Ordering {
    let xa = x.abs();
    let ya = y.abs();
    match xprec.cmp(&yprec) {
        Ordering::Less => xa.mul(&BigInt::pow10((yprec - xprec) as u64)).cmp(&ya),
        Ordering::Greater => xa.cmp(&ya.mul(&BigInt::pow10((xprec - yprec) as u64))),
        Ordering::Equal => xa.cmp(&ya),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::parse(s).unwrap()
    }

    #[test]
    fn exact_division_hits_the_preferred_exponent() {
        let q = dec("1.0").divide(&dec("0.25")).unwrap();
        assert_eq!(q.to_string(), "4");
        let q = dec("10").divide(&dec("0.2")).unwrap();
        assert_eq!(q.to_string(), "5E+1");
        let q = dec("1.000").divide(&dec("8")).unwrap();
        assert_eq!(q.to_string(), "0.125");
    }

    #[test]
    fn exact_division_rejects_infinite_expansions() {
        assert!(matches!(
            dec("1").divide(&dec("3")),
            Err(Error::Arithmetic("non-terminating decimal expansion"))
        ));
    }

    #[test]
    fn zero_dividend_takes_the_preferred_exponent() {
        let q = dec("0.00").divide(&dec("5")).unwrap();
        assert!(q.is_zero());
        assert_eq!(q.exponent(), -2);
    }

    #[test]
    fn division_by_zero_reports_both_flavors() {
        assert!(matches!(
            dec("1").divide(&dec("0")),
            Err(Error::Arithmetic("division by zero"))
        ));
        assert!(matches!(
            dec("0").divide(&dec("0")),
            Err(Error::Arithmetic("zero divided by zero"))
        ));
    }

    #[test]
    fn context_division_rounds_to_precision() {
        let ctx = MathContext::new(5, RoundingMode::HalfUp);
        let q = dec("1").divide_with_context(&dec("3"), &ctx).unwrap();
        assert_eq!(q.coefficient(), &BigInt::from_i64(33333));
        assert_eq!(q.exponent(), -5);
        assert_eq!(q.to_string(), "0.33333");

        let q = dec("2").divide_with_context(&dec("3"), &ctx).unwrap();
        assert_eq!(q.to_string(), "0.66667");

        let q = dec("5").divide_with_context(&dec("3"), &ctx).unwrap();
        assert_eq!(q.to_string(), "1.6667");
    }

    #[test]
    fn context_division_strips_exact_quotients() {
        let ctx = MathContext::new(9, RoundingMode::HalfUp);
        let q = dec("6").divide_with_context(&dec("2"), &ctx).unwrap();
        assert_eq!(q.to_string(), "3");
        let q = dec("1.0").divide_with_context(&dec("0.25"), &ctx).unwrap();
        assert_eq!(q.to_string(), "4");
    }

    #[test]
    fn context_division_respects_the_mode() {
        let down = MathContext::new(3, RoundingMode::Down);
        assert_eq!(dec("2").divide_with_context(&dec("3"), &down).unwrap().to_string(), "0.666");
        let even = MathContext::new(1, RoundingMode::HalfEven);
        assert_eq!(dec("5").divide_with_context(&dec("4"), &even).unwrap().to_string(), "1");
        assert_eq!(dec("15").divide_with_context(&dec("4"), &even).unwrap().to_string(), "4");
    }

    #[test]
    fn signs_flow_through_division() {
        let ctx = MathContext::new(4, RoundingMode::HalfUp);
        assert_eq!(dec("-1").divide_with_context(&dec("3"), &ctx).unwrap().to_string(), "-0.3333");
        assert_eq!(dec("1").divide_with_context(&dec("-3"), &ctx).unwrap().to_string(), "-0.3333");
        assert_eq!(dec("-1").divide_with_context(&dec("-3"), &ctx).unwrap().to_string(), "0.3333");
    }

    #[test]
    fn divide_integer_lands_on_exponent_zero() {
        assert_eq!(dec("5.5").divide_integer(&dec("2")).unwrap().to_string(), "2");
        assert_eq!(dec("-5.5").divide_integer(&dec("2")).unwrap().to_string(), "-2");
        assert_eq!(dec("0.4").divide_integer(&dec("2")).unwrap().to_string(), "0");
        let q = dec("600").divide_integer(&dec("2")).unwrap();
        assert_eq!(q.exponent(), 0);
        assert_eq!(q.to_string(), "300");
        assert_eq!(dec("1E+4").divide_integer(&dec("3")).unwrap().to_string(), "3333");
    }

    #[test]
    fn remainder_follows_the_dividend_sign() {
        assert_eq!(dec("5.5").remainder(&dec("2")).unwrap().to_string(), "1.5");
        assert_eq!(dec("-5.5").remainder(&dec("2")).unwrap().to_string(), "-1.5");
        assert_eq!(dec("5.5").remainder(&dec("-2")).unwrap().to_string(), "1.5");
        assert_eq!(dec("7").remainder(&dec("7")).unwrap().to_string(), "0");
    }
}
