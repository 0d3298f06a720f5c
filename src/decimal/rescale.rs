// src/decimal/rescale.rs

use crate::context::MathContext;
use crate::error::{Error, Result};
use crate::integer::BigInt;
use crate::rounding::{RoundingEngine, RoundingMode};
use super::big_decimal::{checked_exponent, BigDecimal};

impl BigDecimal {
    /// Re-express the value at `new_exp`.
    ///
    /// Raising the exponent drops low-order digits through the rounding
    /// engine; lowering it appends zeros to the coefficient. Identity at
    /// the current exponent regardless of mode.
    pub fn rescale(&self, new_exp: i32, mode: RoundingMode) -> Result<Self> {
        if new_exp == self.exponent {
            return Ok(self.clone());
        }
        if self.coefficient.is_zero() {
            return Ok(Self::new(BigInt::zero(), new_exp));
        }
        if new_exp > self.exponent {
            let decrease = new_exp as i64 - self.exponent as i64;
            if decrease > self.precision() as i64 {
                // every digit is discarded; only the directed modes can
                // pull the quotient off zero
                let q = round_vanished(self.signum(), mode)?;
                return Ok(Self::new(q, new_exp));
            }
            let divisor = BigInt::pow10(decrease as u64);
            let q = RoundingEngine::divide_rounded(&self.coefficient, &divisor, mode)?;
            return Ok(Self::new(q, new_exp));
        }
        let increase = self.exponent as i64 - new_exp as i64;
        let coefficient = self.coefficient.mul(&BigInt::pow10(increase as u64));
        Ok(Self::new(coefficient, new_exp))
    }

    /// Rescale to the exponent of `other`.
    pub fn quantize(&self, other: &Self, mode: RoundingMode) -> Result<Self> {
        self.rescale(other.exponent(), mode)
    }

    /// Truncate to the context's precision, rounding under its mode. A
    /// second pass handles the carry that lengthens the coefficient, as in
    /// 999 -> 100 at two digits.
    pub fn round_to_context(&self, ctx: &MathContext) -> Result<Self> {
        if ctx.is_unlimited() {
            return Ok(self.clone());
        }
        let precision = self.precision();
        if precision <= ctx.precision {
            return Ok(self.clone());
        }
        let drop = (precision - ctx.precision) as i64;
        let q = RoundingEngine::divide_rounded(
            &self.coefficient,
            &BigInt::pow10(drop as u64),
            ctx.mode,
        )?;
        let exponent = checked_exponent(self.exponent as i64 + drop, q.is_zero())?;
        let result = Self::new(q, exponent);
        if result.precision() > ctx.precision {
            return result.round_to_context(ctx);
        }
        Ok(result)
    }
}

// |coefficient| < 10^decrease with room to spare, so the truncated quotient
// is zero and the half modes can never reach the midpoint.
fn round_vanished(sign: i8, mode: RoundingMode) -> Result<BigInt> {
    let increment = match mode {
        RoundingMode::Unnecessary => return Err(Error::Arithmetic("rounding necessary")),
        RoundingMode::Up => true,
        RoundingMode::Ceiling => sign > 0,
        RoundingMode::Floor => sign < 0,
        _ => false,
    };
    Ok(if !increment {
        BigInt::zero()
    } else if sign > 0 {
        BigInt::one()
    } else {
        BigInt::negative_one()
    })
}
