// src/decimal/big_decimal.rs

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use crate::context::MathContext;
use crate::error::{Error, Result};
use crate::integer::BigInt;

/// Arbitrary-precision decimal: `coefficient * 10^exponent`.
///
/// The exponent is bounded to i32; NaN, the infinities, and negative zero
/// are not representable. Values are immutable; the digit count of the
/// coefficient is computed lazily and cached, which is the only interior
/// write and never changes the observable value.
#[derive(Debug)]
pub struct BigDecimal {
    pub(crate) coefficient: BigInt,
    pub(crate) exponent: i32,
    cached_precision: AtomicU32,
}

impl BigDecimal {
    pub fn new(coefficient: BigInt, exponent: i32) -> Self {
        BigDecimal {
            coefficient,
            exponent,
            cached_precision: AtomicU32::new(0),
        }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    pub fn ten() -> Self {
        Self::new(BigInt::ten(), 0)
    }

    pub fn from_bigint(coefficient: BigInt) -> Self {
        Self::new(coefficient, 0)
    }

    pub fn from_i32(v: i32) -> Self {
        Self::new(BigInt::from_i32(v), 0)
    }

    pub fn from_u32(v: u32) -> Self {
        Self::new(BigInt::from_u32(v), 0)
    }

    pub fn from_i64(v: i64) -> Self {
        Self::new(BigInt::from_i64(v), 0)
    }

    pub fn from_u64(v: u64) -> Self {
        Self::new(BigInt::from_u64(v), 0)
    }

    /// The exact decimal expansion of an IEEE-754 double. NaN and the
    /// infinities overflow; every finite double is a dyadic rational and
    /// converts without loss.
    pub fn from_f64(v: f64) -> Result<Self> {
        let bits = v.to_bits();
        let exp = ((bits >> 52) & 0x7FF) as i64;
        let frac = bits & 0xF_FFFF_FFFF_FFFF;
        if exp == 0x7FF {
            return Err(Error::Overflow("NaN or infinity is not representable"));
        }
        if exp == 0 && frac == 0 {
            return Ok(Self::zero());
        }
        let (mut significand, mut e2) = if exp == 0 {
            (frac, -1074i64)
        } else {
            (frac | 1u64 << 52, exp - 1075)
        };
        // shed trailing zero bits so the representation is canonical
        while significand & 1 == 0 {
            significand >>= 1;
            e2 += 1;
        }
        let negative = bits >> 63 == 1;
        let sig = BigInt::from_u64(significand);
        let value = if e2 >= 0 {
            // sig * 2^e2 is an integer
            Self::new(sig.shl(e2), 0)
        } else {
            // sig * 2^e2 == sig * 5^(-e2) * 10^e2
            let coeff = sig.mul(&BigInt::five().pow(-e2)?);
            Self::new(coeff, e2 as i32)
        };
        Ok(if negative { value.neg() } else { value })
    }

    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn signum(&self) -> i8 {
        self.coefficient.signum()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Decimal digit count of the coefficient, 1 for zero. Computed on
    /// first use and published idempotently.
    pub fn precision(&self) -> u32 {
        let cached = self.cached_precision.load(AtomicOrdering::Relaxed);
        if cached != 0 {
            return cached;
        }
        let computed = self.coefficient.decimal_digit_count();
        self.cached_precision.store(computed, AtomicOrdering::Relaxed);
        computed
    }

    /// Scale both coefficients to the smaller exponent.
    pub(crate) fn aligned(&self, other: &Self) -> (BigInt, BigInt, i32) {
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => (
                self.coefficient.clone(),
                other.coefficient.clone(),
                self.exponent,
            ),
            Ordering::Less => {
                let lift = other.exponent as i64 - self.exponent as i64;
                (
                    self.coefficient.clone(),
                    other.coefficient.mul(&BigInt::pow10(lift as u64)),
                    self.exponent,
                )
            }
            Ordering::Greater => {
                let lift = self.exponent as i64 - other.exponent as i64;
                (
                    self.coefficient.mul(&BigInt::pow10(lift as u64)),
                    other.coefficient.clone(),
                    other.exponent,
                )
            }
        }
    }

    /// Exact addition; the result takes the smaller input exponent.
    pub fn add(&self, other: &Self) -> Self {
        let (a, b, exponent) = self.aligned(other);
        Self::new(a.add(&b), exponent)
    }

    /// Exact subtraction; the result takes the smaller input exponent.
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, exponent) = self.aligned(other);
        Self::new(a.sub(&b), exponent)
    }

    pub fn neg(&self) -> Self {
        Self::new(self.coefficient.neg(), self.exponent)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// Exact multiplication: no alignment, exponents add.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let coefficient = self.coefficient.mul(&other.coefficient);
        let exponent = checked_exponent(
            self.exponent as i64 + other.exponent as i64,
            coefficient.is_zero(),
        )?;
        Ok(Self::new(coefficient, exponent))
    }

    /// Numerical comparison after alignment. Unlike `==`, this treats
    /// `1.0` and `1.00` as equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.signum() != other.signum() {
            return self.signum().cmp(&other.signum());
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }

    pub fn min(&self, other: &Self) -> Self {
        if self.compare(other) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    pub fn max(&self, other: &Self) -> Self {
        if self.compare(other) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Shift the decimal point `n` places to the left (divide by 10^n).
    pub fn move_point_left(&self, n: i64) -> Result<Self> {
        let exponent = checked_exponent(self.exponent as i64 - n, self.is_zero())?;
        Ok(Self::new(self.coefficient.clone(), exponent))
    }

    /// Shift the decimal point `n` places to the right (multiply by 10^n).
    pub fn move_point_right(&self, n: i64) -> Result<Self> {
        let exponent = checked_exponent(self.exponent as i64 + n, self.is_zero())?;
        Ok(Self::new(self.coefficient.clone(), exponent))
    }

    /// Drop trailing zero digits from the coefficient, raising the exponent
    /// accordingly. Zero collapses to exponent 0.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.coefficient.is_zero() {
            return Self::zero();
        }
        let mut coefficient = self.coefficient.clone();
        let mut exponent = self.exponent as i64;
        while exponent < i32::MAX as i64 {
            let (q, r) = coefficient.div_rem_by_nonzero(&BigInt::ten());
            if !r.is_zero() {
                break;
            }
            coefficient = q;
            exponent += 1;
        }
        Self::new(coefficient, exponent as i32)
    }

    /// Exact power for a context-free call: `0 <= n <= 999_999_999`.
    pub fn pow(&self, n: i64) -> Result<Self> {
        if !(0..=POW_LIMIT).contains(&n) {
            return Err(Error::OutOfRange("exponent must lie in [0, 999999999]"));
        }
        let exponent = checked_exponent(
            self.exponent as i64 * n,
            self.coefficient.is_zero() && n > 0,
        )?;
        let coefficient = self.coefficient.pow(n)?;
        Ok(Self::new(coefficient, exponent))
    }

    /// Context-governed power with `|n| <= 999_999_999`.
    ///
    /// Runs square-and-multiply over the 31 magnitude bits at an elevated
    /// working precision, takes the reciprocal for a negative exponent, and
    /// rounds back to the caller's context.
    pub fn pow_with_context(&self, n: i64, ctx: &MathContext) -> Result<Self> {
        if ctx.is_unlimited() {
            if n < 0 {
                return Err(Error::Arithmetic(
                    "negative exponent requires a bounded precision",
                ));
            }
            return self.pow(n);
        }
        if n.unsigned_abs() > POW_LIMIT as u64 {
            return Err(Error::OutOfRange("exponent must lie in [-999999999, 999999999]"));
        }
        let mag = n.unsigned_abs() as u32;
        let digits = crate::integer::big_int::u32_digit_count(mag);
        if digits > ctx.precision {
            return Err(Error::OutOfRange(
                "exponent has more digits than the context precision",
            ));
        }
        let elevated = MathContext::new(ctx.precision + digits + 1, ctx.mode);
        let mut acc = Self::one();
        let mut m = mag;
        let mut seen = false;
        for i in 1..=31 {
            m <<= 1;
            if m & 0x8000_0000 != 0 {
                seen = true;
                acc = acc.mul(self)?.round_to_context(&elevated)?;
            }
            if i == 31 {
                break;
            }
            if seen {
                acc = acc.mul(&acc)?.round_to_context(&elevated)?;
            }
        }
        if n < 0 {
            acc = Self::one().divide_with_context(&acc, &elevated)?;
        }
        acc.round_to_context(ctx)
    }
}

pub(crate) const POW_LIMIT: i64 = 999_999_999;

/// Narrow a candidate exponent to i32. Losing information is an overflow
/// unless the coefficient is zero, in which case the exponent saturates.
pub(crate) fn checked_exponent(candidate: i64, coefficient_is_zero: bool) -> Result<i32> {
    match i32::try_from(candidate) {
        Ok(e) => Ok(e),
        Err(_) => {
            if coefficient_is_zero {
                Ok(if candidate > 0 { i32::MAX } else { i32::MIN })
            } else {
                Err(Error::Overflow("exponent outside the 32-bit range"))
            }
        }
    }
}

impl Clone for BigDecimal {
    fn clone(&self) -> Self {
        BigDecimal {
            coefficient: self.coefficient.clone(),
            exponent: self.exponent,
            cached_precision: AtomicU32::new(
                self.cached_precision.load(AtomicOrdering::Relaxed),
            ),
        }
    }
}

// Representation equality: 1.0 and 1.00 differ. Numerical comparison is
// `compare`; `Ord` is deliberately absent because it would disagree with
// `==` across equal values of different exponent.
impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent && self.coefficient == other.coefficient
    }
}

impl Eq for BigDecimal {}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficient.hash(state);
        self.exponent.hash(state);
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_scientific_string())
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

macro_rules! impl_decimal_from {
    ($($t:ty => $via:ident),* $(,)?) => {
        $(
            impl From<$t> for BigDecimal {
                fn from(v: $t) -> BigDecimal {
                    BigDecimal::$via(v)
                }
            }
        )*
    };
}

impl_decimal_from! {
    i32 => from_i32,
    i64 => from_i64,
    u32 => from_u32,
    u64 => from_u64,
    BigInt => from_bigint,
}
