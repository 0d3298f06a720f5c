// src/integer/big_int.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::magnitude;
use crate::radix;

/// Arbitrary-precision signed integer.
///
/// The value is held in sign/magnitude form: `sign` is -1, 0, or +1 and
/// `magnitude` is a big-endian array of 32-bit digits with no leading zero.
/// Zero is the empty magnitude with sign 0, which makes every mathematical
/// value have exactly one representation, so equality is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: i8,
    pub(crate) magnitude: Vec<u32>,
}

lazy_static! {
    static ref ZERO: BigInt = BigInt { sign: 0, magnitude: Vec::new() };
    static ref ONE: BigInt = BigInt { sign: 1, magnitude: vec![1] };
    static ref TWO: BigInt = BigInt { sign: 1, magnitude: vec![2] };
    static ref FIVE: BigInt = BigInt { sign: 1, magnitude: vec![5] };
    static ref TEN: BigInt = BigInt { sign: 1, magnitude: vec![10] };
    static ref NEGATIVE_ONE: BigInt = BigInt { sign: -1, magnitude: vec![1] };
    static ref POWERS_OF_TEN: Vec<BigInt> =
        (0..=11).map(|i| BigInt::from_u64(10u64.pow(i))).collect();
}

impl BigInt {
    /// Build a value from an explicit sign and big-endian magnitude.
    ///
    /// The magnitude is trimmed; an empty (or all-zero) magnitude yields
    /// zero regardless of `sign`, but a nonzero magnitude with sign 0 is
    /// rejected.
    pub fn of(sign: i8, magnitude: Vec<u32>) -> Result<Self> {
        if !(-1..=1).contains(&sign) {
            return Err(Error::OutOfRange("sign must be -1, 0, or +1"));
        }
        let mut magnitude = magnitude;
        magnitude::trim(&mut magnitude);
        if magnitude.is_empty() {
            return Ok(Self::zero());
        }
        if sign == 0 {
            return Err(Error::InvalidOperation("zero sign with a nonzero magnitude"));
        }
        Ok(BigInt { sign, magnitude })
    }

    pub(crate) fn from_sign_magnitude(sign: i8, mut magnitude: Vec<u32>) -> Self {
        magnitude::trim(&mut magnitude);
        if magnitude.is_empty() {
            Self::zero()
        } else {
            debug_assert!(sign == 1 || sign == -1);
            BigInt { sign, magnitude }
        }
    }

    pub fn zero() -> Self {
        ZERO.clone()
    }

    pub fn one() -> Self {
        ONE.clone()
    }

    pub fn two() -> Self {
        TWO.clone()
    }

    pub fn five() -> Self {
        FIVE.clone()
    }

    pub fn ten() -> Self {
        TEN.clone()
    }

    pub fn negative_one() -> Self {
        NEGATIVE_ONE.clone()
    }

    /// `10^n`, served from the cached low powers where possible.
    pub fn pow10(n: u64) -> Self {
        if n < POWERS_OF_TEN.len() as u64 {
            return POWERS_OF_TEN[n as usize].clone();
        }
        match Self::ten().pow(n as i64) {
            Ok(v) => v,
            Err(_) => unreachable!("non-negative exponent"),
        }
    }

    pub fn signum(&self) -> i8 {
        self.sign
    }

    /// Borrow the big-endian magnitude digits.
    pub fn magnitude(&self) -> &[u32] {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    pub fn is_one(&self) -> bool {
        self.sign == 1 && self.magnitude == [1]
    }

    pub fn is_even(&self) -> bool {
        self.magnitude.last().map_or(true, |&d| d & 1 == 0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.sign == 0 {
            return other.clone();
        }
        if other.sign == 0 {
            return self.clone();
        }
        if self.sign == other.sign {
            return BigInt {
                sign: self.sign,
                magnitude: magnitude::add(&self.magnitude, &other.magnitude),
            };
        }
        match magnitude::compare(&self.magnitude, &other.magnitude) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_sign_magnitude(
                self.sign,
                magnitude::sub(&self.magnitude, &other.magnitude),
            ),
            Ordering::Less => Self::from_sign_magnitude(
                other.sign,
                magnitude::sub(&other.magnitude, &self.magnitude),
            ),
        }
    }

    pub fn sub(&self, other: &BigInt) -> BigInt {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> BigInt {
        BigInt {
            sign: -self.sign,
            magnitude: self.magnitude.clone(),
        }
    }

    pub fn abs(&self) -> BigInt {
        if self.sign < 0 {
            self.neg()
        } else {
            self.clone()
        }
    }

    pub fn mul(&self, other: &BigInt) -> BigInt {
        if self.sign == 0 || other.sign == 0 {
            return Self::zero();
        }
        BigInt {
            sign: self.sign * other.sign,
            magnitude: magnitude::mul(&self.magnitude, &other.magnitude),
        }
    }

    /// Truncating division: `q` rounds toward zero, `r` keeps the sign of
    /// `self`, and `q * other + r == self`.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = magnitude::div_rem(&self.magnitude, &other.magnitude)?;
        let quotient = Self::from_sign_magnitude(self.sign * other.sign, q);
        let remainder = Self::from_sign_magnitude(self.sign, r);
        Ok((quotient, remainder))
    }

    pub fn div(&self, other: &BigInt) -> Result<BigInt> {
        Ok(self.div_rem(other)?.0)
    }

    pub fn rem(&self, other: &BigInt) -> Result<BigInt> {
        Ok(self.div_rem(other)?.1)
    }

    pub(crate) fn div_rem_by_nonzero(&self, other: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!other.is_zero());
        match self.div_rem(other) {
            Ok(pair) => pair,
            Err(_) => unreachable!("divisor checked nonzero"),
        }
    }

    /// Binary exponentiation. A negative exponent is out of range;
    /// `pow(0) == 1` for every base, zero included.
    pub fn pow(&self, exp: i64) -> Result<BigInt> {
        if exp < 0 {
            return Err(Error::OutOfRange("negative exponent"));
        }
        let mut acc = Self::one();
        let mut base = self.clone();
        let mut e = exp as u64;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        Ok(acc)
    }

    /// `self^exp mod m`, reducing after every multiply.
    pub fn mod_pow(&self, exp: &BigInt, m: &BigInt) -> Result<BigInt> {
        if exp.sign < 0 {
            return Err(Error::OutOfRange("negative exponent"));
        }
        if m.is_zero() {
            return Err(Error::DivideByZero);
        }
        let mut acc = Self::one().rem(m)?;
        let mut base = self.rem(m)?;
        let bits = exp.bit_length();
        for i in 0..bits {
            if exp.magnitude_bit(i) {
                acc = acc.mul(&base).rem(m)?;
            }
            if i + 1 < bits {
                base = base.mul(&base).rem(m)?;
            }
        }
        Ok(acc)
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// Euclidean steps knock the operands down to comparable lengths, then
    /// Stein's binary algorithm finishes; operands that fit in a u64 take a
    /// native fast path.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero()
            && (a.magnitude.len() as i64 - b.magnitude.len() as i64).abs() >= 2
        {
            let (_, r) = a.div_rem_by_nonzero(&b);
            a = b;
            b = r;
        }
        if b.is_zero() {
            return a;
        }
        if let (Some(x), Some(y)) = (a.to_u64(), b.to_u64()) {
            return Self::from_u64(u64_gcd(x, y));
        }
        binary_gcd(a, b)
    }

    /// Index of the lowest set bit, -1 for zero.
    pub fn lowest_set_bit(&self) -> i64 {
        if self.sign == 0 {
            return -1;
        }
        magnitude_trailing_zeros(&self.magnitude) as i64
    }

    /// Bits in the minimal two's-complement representation, sign excluded.
    /// A negative power of two needs one bit fewer than its positive twin.
    pub fn bit_length(&self) -> u64 {
        if self.sign == 0 {
            return 0;
        }
        let bits = (self.magnitude.len() as u64 - 1) * 32
            + (32 - self.magnitude[0].leading_zeros()) as u64;
        if self.sign < 0 && self.is_magnitude_power_of_two() {
            bits - 1
        } else {
            bits
        }
    }

    /// Population count of the two's-complement representation: for a
    /// negative value the bits that differ from the (set) sign bit.
    pub fn bit_count(&self) -> u64 {
        if self.sign == 0 {
            return 0;
        }
        let pop: u64 = self.magnitude.iter().map(|d| d.count_ones() as u64).sum();
        if self.sign > 0 {
            pop
        } else {
            pop + magnitude_trailing_zeros(&self.magnitude) - 1
        }
    }

    /// Decimal digit count of the magnitude (1 for zero). Counts nine
    /// digits per division by 10^9, then looks the residual word up.
    pub fn decimal_digit_count(&self) -> u32 {
        if self.sign == 0 {
            return 1;
        }
        let mut work = self.magnitude.clone();
        let mut start = 0usize;
        let mut digits = 0u32;
        loop {
            let active = &work[start..];
            if active.len() == 1 && active[0] < 1_000_000_000 {
                return digits + u32_digit_count(active[0]);
            }
            magnitude::div_rem_small_in_place(&mut work[start..], 1_000_000_000);
            digits += 9;
            while start < work.len() && work[start] == 0 {
                start += 1;
            }
        }
    }

    /// Left shift; a negative count delegates to `shr`.
    pub fn shl(&self, n: i64) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        if n < 0 {
            return self.shr_unsigned(n.unsigned_abs());
        }
        Self::from_sign_magnitude(self.sign, magnitude::shl_bits(&self.magnitude, n as u64))
    }

    /// Arithmetic right shift (floor division by 2^n); a negative count
    /// delegates to `shl`. Shifting a negative value past its bit length
    /// yields -1.
    pub fn shr(&self, n: i64) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        if n < 0 {
            return Self::from_sign_magnitude(
                self.sign,
                magnitude::shl_bits(&self.magnitude, n.unsigned_abs()),
            );
        }
        self.shr_unsigned(n as u64)
    }

    fn shr_unsigned(&self, bits: u64) -> BigInt {
        if self.is_zero() {
            return self.clone();
        }
        let shifted = magnitude::shr_bits(&self.magnitude, bits);
        if self.sign > 0 {
            return Self::from_sign_magnitude(1, shifted);
        }
        // floor semantics: round away from zero when set bits fall off
        let mut mag = shifted;
        if magnitude::low_bits_nonzero(&self.magnitude, bits) {
            mag = magnitude::add(&mag, &[1]);
        }
        Self::from_sign_magnitude(-1, mag)
    }

    pub(crate) fn is_magnitude_power_of_two(&self) -> bool {
        !self.magnitude.is_empty()
            && self.magnitude[0].is_power_of_two()
            && self.magnitude[1..].iter().all(|&d| d == 0)
    }

    /// Bit `i` of the magnitude viewed little-endian.
    pub(crate) fn magnitude_bit(&self, i: u64) -> bool {
        let word = (i / 32) as usize;
        let len = self.magnitude.len();
        if word >= len {
            return false;
        }
        self.magnitude[len - 1 - word] >> (i % 32) & 1 == 1
    }

    /// Parse base-10 digits with an optional sign.
    pub fn parse(s: &str) -> Result<BigInt> {
        Self::parse_radix(s, 10)
    }

    /// Parse in any radix from 2 to 36; digits are case-insensitive.
    pub fn parse_radix(s: &str, radix: u32) -> Result<BigInt> {
        let (sign, mag) = radix::parse(s, radix)?;
        Ok(Self::from_sign_magnitude(sign, mag))
    }

    /// Format in any radix from 2 to 36 with uppercase digits.
    pub fn to_radix_string(&self, radix: u32) -> Result<String> {
        radix::format(self.sign, &self.magnitude, radix)
    }

    pub(crate) fn to_decimal_string(&self) -> String {
        match self.to_radix_string(10) {
            Ok(s) => s,
            Err(_) => unreachable!("radix 10 is always valid"),
        }
    }
}

pub(crate) fn magnitude_trailing_zeros(mag: &[u32]) -> u64 {
    for (i, &d) in mag.iter().rev().enumerate() {
        if d != 0 {
            return i as u64 * 32 + d.trailing_zeros() as u64;
        }
    }
    0
}

const U32_DIGIT_THRESHOLDS: [u32; 9] = [
    9,
    99,
    999,
    9_999,
    99_999,
    999_999,
    9_999_999,
    99_999_999,
    999_999_999,
];

pub(crate) fn u32_digit_count(v: u32) -> u32 {
    for (i, &t) in U32_DIGIT_THRESHOLDS.iter().enumerate() {
        if v <= t {
            return i as u32 + 1;
        }
    }
    10
}

fn u64_gcd(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

// Stein's algorithm on two nonzero values of comparable length.
fn binary_gcd(a: BigInt, b: BigInt) -> BigInt {
    let s1 = a.lowest_set_bit();
    let s2 = b.lowest_set_bit();
    let k = s1.min(s2);
    let mut u = a.shr(s1);
    let mut v = b.shr(s2);
    while u != v {
        if u < v {
            std::mem::swap(&mut u, &mut v);
        }
        u = u.sub(&v);
        u = u.shr(u.lowest_set_bit());
    }
    u.shl(k)
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let mag = magnitude::compare(&self.magnitude, &other.magnitude);
        if self.sign < 0 {
            mag.reverse()
        } else {
            mag
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
