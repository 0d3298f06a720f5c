// src/transcendental.rs

use std::cmp::Ordering;

use log::debug;

use crate::decimal::BigDecimal;
use crate::error::{Error, Result};
use crate::integer::BigInt;
use crate::rounding::{RoundingEngine, RoundingMode};

// Every routine works to a caller-supplied decimal scale (digits right of
// the point). Iterative kernels run one digit deeper (scale + 1) and the
// iterates are cut back to the working exponent after each operation so
// intermediate precision stays bounded.

/// Scaled division: `dividend / divisor` with exactly `scale` fraction
/// digits, rounded under `mode`.
pub fn cdivide(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    scale: i32,
    mode: RoundingMode,
) -> Result<BigDecimal> {
    if divisor.is_zero() {
        return Err(Error::Arithmetic("division by zero"));
    }
    // pad whichever coefficient aligns the quotient onto 10^-scale
    let shift = dividend.exponent() as i64 - divisor.exponent() as i64 + scale as i64;
    let (x, y) = if shift >= 0 {
        (
            dividend.coefficient().mul(&BigInt::pow10(shift as u64)),
            divisor.coefficient().clone(),
        )
    } else {
        (
            dividend.coefficient().clone(),
            divisor.coefficient().mul(&BigInt::pow10((-shift) as u64)),
        )
    };
    let q = RoundingEngine::divide_rounded(&x, &y, mode)?;
    Ok(BigDecimal::new(q, -scale))
}

/// `x^n` for integer `n`, every intermediate held at `10^-scale`.
/// A negative `n` inverts the positive power under half-even rounding.
pub fn int_power(x: &BigDecimal, n: i64, scale: i32) -> Result<BigDecimal> {
    if scale < 0 {
        return Err(Error::OutOfRange("scale must be non-negative"));
    }
    if n < 0 {
        let flipped = n
            .checked_neg()
            .ok_or(Error::OutOfRange("exponent magnitude too large"))?;
        let denominator = int_power(x, flipped, scale)?;
        return cdivide(&BigDecimal::one(), &denominator, scale, RoundingMode::HalfEven);
    }
    let mut total = BigDecimal::one();
    let mut square = x.clone();
    let mut e = n as u64;
    while e > 0 {
        if e & 1 == 1 {
            total = total.mul(&square)?.rescale(-scale, RoundingMode::HalfEven)?;
        }
        e >>= 1;
        if e > 0 {
            square = square.mul(&square)?.rescale(-scale, RoundingMode::HalfEven)?;
        }
    }
    Ok(total)
}

/// The `index`-th root of a non-negative `x` by Newton iteration, worked
/// at `scale + 1` and delivered at `scale`.
pub fn int_root(x: &BigDecimal, index: i64, scale: i32) -> Result<BigDecimal> {
    if scale < 1 {
        return Err(Error::OutOfRange("scale must be at least 1"));
    }
    if index < 1 {
        return Err(Error::OutOfRange("root index must be at least 1"));
    }
    if x.signum() < 0 {
        return Err(Error::Arithmetic("root of a negative value"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::new(BigInt::zero(), -scale));
    }
    let sp1 = scale
        .checked_add(1)
        .ok_or(Error::Overflow("scale too large"))?;
    let tolerance = BigDecimal::new(BigInt::five(), -sp1);
    let index_dec = BigDecimal::from_i64(index);
    let index_minus_one = BigDecimal::from_i64(index - 1);
    let mut current = cdivide(x, &index_dec, sp1, RoundingMode::HalfEven)?;
    if current.is_zero() {
        current = BigDecimal::new(BigInt::one(), -sp1);
    }
    let mut iterations = 0u32;
    loop {
        let previous = current.clone();
        let power = int_power(&current, index - 1, sp1)?;
        let denominator = index_dec.mul(&power)?.rescale(-sp1, RoundingMode::HalfEven)?;
        if denominator.is_zero() {
            break;
        }
        let full_power = power.mul(&current)?.rescale(-sp1, RoundingMode::HalfEven)?;
        let weighted = index_minus_one
            .mul(&full_power)?
            .rescale(-sp1, RoundingMode::HalfEven)?;
        let numerator = x.add(&weighted);
        current = cdivide(&numerator, &denominator, sp1, RoundingMode::Down)?;
        iterations += 1;
        if current.sub(&previous).abs().compare(&tolerance) != Ordering::Greater {
            break;
        }
    }
    debug!("int_root({}) converged after {} iterations", index, iterations);
    current.rescale(-scale, RoundingMode::HalfEven)
}

/// Square root by integer Newton iteration on `x * 10^(2*scale)`,
/// truncated to `scale` fraction digits.
pub fn sqrt(x: &BigDecimal, scale: i32) -> Result<BigDecimal> {
    if scale < 1 {
        return Err(Error::OutOfRange("scale must be at least 1"));
    }
    if x.signum() < 0 {
        return Err(Error::Arithmetic("square root of a negative value"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::new(BigInt::zero(), -scale));
    }
    let target_exp = -2 * scale as i64;
    let exponent = x.exponent() as i64;
    let n = match exponent.cmp(&target_exp) {
        Ordering::Greater => x
            .coefficient()
            .mul(&BigInt::pow10((exponent - target_exp) as u64)),
        Ordering::Less => RoundingEngine::divide_rounded(
            x.coefficient(),
            &BigInt::pow10((target_exp - exponent) as u64),
            RoundingMode::Down,
        )?,
        Ordering::Equal => x.coefficient().clone(),
    };
    if n.is_zero() {
        return Ok(BigDecimal::new(BigInt::zero(), -scale));
    }
    let bitlen = n.bit_length();
    let shift = ((bitlen + 2) / 2) as i64;
    let mut seed = n.shr(shift);
    if seed.is_zero() {
        seed = BigInt::one();
    }
    // one step moves any positive seed to or above the true root; the
    // sequence then descends monotonically onto it
    let mut current = seed.add(&n.div(&seed)?).shr(1);
    let mut iterations = 1u32;
    loop {
        let next = current.add(&n.div(&current)?).shr(1);
        if next.cmp(&current) != Ordering::Less {
            break;
        }
        current = next;
        iterations += 1;
    }
    debug!("sqrt: {} iterations for a {}-bit radicand", iterations, bitlen);
    Ok(BigDecimal::new(current, -scale))
}

/// `e^x` to `scale` fraction digits: the Taylor series directly for
/// fractional `x`, otherwise `expTaylor(1 + xf/xw)^xw`.
pub fn exp(x: &BigDecimal, scale: i32) -> Result<BigDecimal> {
    if scale < 1 {
        return Err(Error::OutOfRange("scale must be at least 1"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::one());
    }
    if x.signum() < 0 {
        let denominator = exp(&x.neg(), scale)?;
        return cdivide(&BigDecimal::one(), &denominator, scale, RoundingMode::HalfEven);
    }
    let whole = x.rescale(0, RoundingMode::Down)?;
    if whole.is_zero() {
        return exp_taylor(x, scale);
    }
    let fraction = x.sub(&whole);
    let z = BigDecimal::one().add(&cdivide(&fraction, &whole, scale, RoundingMode::HalfEven)?);
    let t = exp_taylor(&z, scale)?;
    // t^whole, in i64-sized bites when the integer part is enormous
    let mut remaining = whole.coefficient().clone();
    let chunk = BigInt::from_i64(i64::MAX);
    let mut result = BigDecimal::one();
    loop {
        if let Some(part) = remaining.to_i64() {
            result = result
                .mul(&int_power(&t, part, scale)?)?
                .rescale(-scale, RoundingMode::HalfEven)?;
            break;
        }
        result = result
            .mul(&int_power(&t, i64::MAX, scale)?)?
            .rescale(-scale, RoundingMode::HalfEven)?;
        remaining = remaining.sub(&chunk);
    }
    Ok(result)
}

// sum = 1 + x + x^2/2! + x^3/3! + ..., one term per pass, stopping when a
// pass leaves the half-even rescaled sum unchanged.
fn exp_taylor(x: &BigDecimal, scale: i32) -> Result<BigDecimal> {
    let mut sum = BigDecimal::one()
        .add(x)
        .rescale(-scale, RoundingMode::HalfEven)?;
    let mut power = x.rescale(-scale, RoundingMode::HalfEven)?;
    let mut factorial = BigInt::one();
    let mut k = 1i64;
    loop {
        k += 1;
        power = power.mul(x)?.rescale(-scale, RoundingMode::HalfEven)?;
        factorial = factorial.mul(&BigInt::from_i64(k));
        let term = cdivide(
            &power,
            &BigDecimal::from_bigint(factorial.clone()),
            scale,
            RoundingMode::HalfEven,
        )?;
        let next = sum.add(&term).rescale(-scale, RoundingMode::HalfEven)?;
        if next == sum {
            debug!("exp series settled after {} terms", k);
            return Ok(next);
        }
        sum = next;
    }
}

/// Natural logarithm of a positive `x` to `scale` fraction digits.
///
/// Values with several digits left of the point are reduced through
/// `x = r^m  =>  ln(x) = m * ln(r)` before the Newton inversion of `exp`.
pub fn ln(x: &BigDecimal, scale: i32) -> Result<BigDecimal> {
    if scale < 1 {
        return Err(Error::OutOfRange("scale must be at least 1"));
    }
    if x.signum() <= 0 {
        return Err(Error::Arithmetic("logarithm of a non-positive value"));
    }
    let magnitude = x.to_scientific_string().len() as i64 + x.exponent() as i64 - 1;
    let result = if magnitude < 3 {
        ln_newton(x, scale)?
    } else {
        let root = int_root(x, magnitude, scale)?;
        ln_newton(&root, scale)?.mul(&BigDecimal::from_i64(magnitude))?
    };
    result.rescale(-scale, RoundingMode::HalfEven)
}

// Newton inversion of exp at scale + 1: step by (e^y - n) / e^y until the
// step size falls under the tolerance.
fn ln_newton(n: &BigDecimal, scale: i32) -> Result<BigDecimal> {
    let sp1 = scale
        .checked_add(1)
        .ok_or(Error::Overflow("scale too large"))?;
    let tolerance = BigDecimal::new(BigInt::five(), -sp1);
    let mut current = n.rescale(-sp1, RoundingMode::HalfEven)?;
    let mut iterations = 0u32;
    loop {
        let e_current = exp(&current, sp1)?;
        let term = cdivide(&e_current.sub(n), &e_current, sp1, RoundingMode::Down)?;
        current = current.sub(&term).rescale(-sp1, RoundingMode::Down)?;
        iterations += 1;
        if term.abs().compare(&tolerance) == Ordering::Less {
            break;
        }
    }
    debug!("ln converged after {} newton iterations", iterations);
    Ok(current)
}
