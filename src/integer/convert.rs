// src/integer/convert.rs

use crate::error::{Error, Result};
use super::big_int::BigInt;

impl BigInt {
    pub fn from_i32(v: i32) -> BigInt {
        Self::from_i64(v as i64)
    }

    pub fn from_u32(v: u32) -> BigInt {
        if v == 0 {
            Self::zero()
        } else {
            Self::from_sign_magnitude(1, vec![v])
        }
    }

    pub fn from_i64(v: i64) -> BigInt {
        let sign: i8 = match v {
            0 => return Self::zero(),
            v if v < 0 => -1,
            _ => 1,
        };
        let mag = v.unsigned_abs();
        Self::from_sign_magnitude(sign, vec![(mag >> 32) as u32, mag as u32])
    }

    pub fn from_u64(v: u64) -> BigInt {
        if v == 0 {
            return Self::zero();
        }
        Self::from_sign_magnitude(1, vec![(v >> 32) as u32, v as u32])
    }

    /// Reconstruct the integer part of an IEEE-754 double exactly.
    /// NaN and the infinities overflow; everything else decomposes into
    /// sign, significand, and biased exponent, truncating toward zero.
    pub fn from_f64(v: f64) -> Result<BigInt> {
        let bits = v.to_bits();
        let exp = ((bits >> 52) & 0x7FF) as i64;
        let frac = bits & 0xF_FFFF_FFFF_FFFF;
        if exp == 0x7FF {
            return Err(Error::Overflow("NaN or infinity has no integer value"));
        }
        if exp == 0 && frac == 0 {
            return Ok(Self::zero());
        }
        let significand = frac | 1u64 << 52;
        let value = Self::from_u64(significand);
        let shift = exp - 1075;
        let value = if shift >= 0 {
            value.shl(shift)
        } else {
            value.shr(-shift)
        };
        Ok(if bits >> 63 == 1 { value.neg() } else { value })
    }

    /// Interpret big-endian bytes as a two's-complement integer.
    pub fn from_bytes_twos_complement(bytes: &[u8]) -> Result<BigInt> {
        if bytes.is_empty() {
            return Err(Error::Format("empty byte array"));
        }
        let negative = bytes[0] & 0x80 != 0;
        if !negative {
            return Ok(Self::from_sign_magnitude(1, pack_words(bytes)));
        }
        // negate: complement every byte, then add one from the low end
        let mut work: Vec<u8> = bytes.iter().map(|&b| !b).collect();
        let mut carry = 1u16;
        for b in work.iter_mut().rev() {
            let t = *b as u16 + carry;
            *b = t as u8;
            carry = t >> 8;
        }
        Ok(Self::from_sign_magnitude(-1, pack_words(&work)))
    }

    pub fn to_u32(&self) -> Option<u32> {
        if self.sign < 0 {
            return None;
        }
        match self.magnitude.len() {
            0 => Some(0),
            1 => Some(self.magnitude[0]),
            _ => None,
        }
    }

    pub fn to_i32(&self) -> Option<i32> {
        let mag = match self.magnitude.len() {
            0 => 0u32,
            1 => self.magnitude[0],
            _ => return None,
        };
        if self.sign >= 0 {
            if mag <= i32::MAX as u32 {
                Some(mag as i32)
            } else {
                None
            }
        } else if mag <= 1u32 << 31 {
            // the asymmetric end: 0x80000000 is exactly i32::MIN
            Some((mag as i32).wrapping_neg())
        } else {
            None
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.sign < 0 {
            return None;
        }
        self.magnitude_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        if self.sign >= 0 {
            if mag <= i64::MAX as u64 {
                Some(mag as i64)
            } else {
                None
            }
        } else if mag <= 1u64 << 63 {
            Some((mag as i64).wrapping_neg())
        } else {
            None
        }
    }

    fn magnitude_u64(&self) -> Option<u64> {
        match self.magnitude.len() {
            0 => Some(0),
            1 => Some(self.magnitude[0] as u64),
            2 => Some((self.magnitude[0] as u64) << 32 | self.magnitude[1] as u64),
            _ => None,
        }
    }
}

fn pack_words(bytes: &[u8]) -> Vec<u32> {
    let mut words = Vec::with_capacity(bytes.len() / 4 + 1);
    let lead = bytes.len() % 4;
    if lead > 0 {
        let mut w = 0u32;
        for &b in &bytes[..lead] {
            w = w << 8 | b as u32;
        }
        words.push(w);
    }
    for chunk in bytes[lead..].chunks_exact(4) {
        words.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    words
}

macro_rules! impl_from_primitive {
    ($($t:ty => $via:ident),* $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> BigInt {
                    BigInt::$via(v.into())
                }
            }
        )*
    };
}

impl_from_primitive! {
    i8 => from_i64,
    i16 => from_i64,
    i32 => from_i64,
    i64 => from_i64,
    u8 => from_u64,
    u16 => from_u64,
    u32 => from_u64,
    u64 => from_u64,
}
