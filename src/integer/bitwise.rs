// src/integer/bitwise.rs

use crate::error::{Error, Result};
use super::big_int::BigInt;

// Bitwise operations view the value as an infinite two's-complement bit
// stream. The store stays sign/magnitude; the stream is produced word by
// word on the fly and the result is converted back afterwards.

impl BigInt {
    /// Little-endian magnitude word `i`, zero beyond the array.
    fn mag_le(&self, i: usize) -> u32 {
        let len = self.magnitude.len();
        if i < len {
            self.magnitude[len - 1 - i]
        } else {
            0
        }
    }

    /// Little-endian index of the first nonzero magnitude word. Only
    /// meaningful for nonzero values.
    fn first_nonzero_le(&self) -> usize {
        let len = self.magnitude.len();
        for i in (0..len).rev() {
            if self.magnitude[i] != 0 {
                return len - 1 - i;
            }
        }
        0
    }

    /// Word `i` of the two's-complement representation, little-endian.
    ///
    /// For a negative value the words below the first nonzero one pass
    /// through as zero, the first nonzero word is negated, and every word
    /// above it is complemented; beyond the magnitude that yields the
    /// all-ones sign extension.
    fn twos_word(&self, i: usize, first_nonzero: usize) -> u32 {
        if self.sign >= 0 {
            self.mag_le(i)
        } else if i < first_nonzero {
            0
        } else if i == first_nonzero {
            self.mag_le(i).wrapping_neg()
        } else {
            !self.mag_le(i)
        }
    }

    fn combine(&self, other: &BigInt, f: impl Fn(u32, u32) -> u32) -> BigInt {
        let n = self.magnitude.len().max(other.magnitude.len()) + 1;
        let fa = if self.sign < 0 { self.first_nonzero_le() } else { 0 };
        let fb = if other.sign < 0 { other.first_nonzero_le() } else { 0 };
        let mut words = Vec::with_capacity(n);
        for i in 0..n {
            words.push(f(self.twos_word(i, fa), other.twos_word(i, fb)));
        }
        Self::from_twos_complement_le(words)
    }

    // The top word is a pure sign extension (0 or all ones) because the
    // buffer is one word longer than either magnitude.
    fn from_twos_complement_le(mut words: Vec<u32>) -> BigInt {
        let negative = words.last().map_or(false, |&w| w & 0x8000_0000 != 0);
        if negative {
            let mut carry = 1u64;
            for w in words.iter_mut() {
                let t = (!*w) as u64 + carry;
                *w = t as u32;
                carry = t >> 32;
            }
        }
        words.reverse();
        Self::from_sign_magnitude(if negative { -1 } else { 1 }, words)
    }

    pub fn and(&self, other: &BigInt) -> BigInt {
        self.combine(other, |a, b| a & b)
    }

    pub fn or(&self, other: &BigInt) -> BigInt {
        self.combine(other, |a, b| a | b)
    }

    pub fn xor(&self, other: &BigInt) -> BigInt {
        self.combine(other, |a, b| a ^ b)
    }

    /// `self & !other` in the two's-complement view.
    pub fn and_not(&self, other: &BigInt) -> BigInt {
        self.combine(other, |a, b| a & !b)
    }

    /// Bitwise complement: `!x == -x - 1`.
    pub fn not(&self) -> BigInt {
        self.neg().sub(&Self::one())
    }

    /// Test bit `n` of the two's-complement representation; beyond the
    /// magnitude this reads the sign extension.
    pub fn test_bit(&self, n: i64) -> Result<bool> {
        if n < 0 {
            return Err(Error::Arithmetic("negative bit index"));
        }
        let word = (n / 32) as usize;
        let bit = (n % 32) as u32;
        let fnz = if self.sign < 0 { self.first_nonzero_le() } else { 0 };
        Ok(self.twos_word(word, fnz) >> bit & 1 == 1)
    }

    pub fn set_bit(&self, n: i64) -> Result<BigInt> {
        Ok(self.or(&Self::single_bit(n)?))
    }

    pub fn clear_bit(&self, n: i64) -> Result<BigInt> {
        Ok(self.and_not(&Self::single_bit(n)?))
    }

    pub fn flip_bit(&self, n: i64) -> Result<BigInt> {
        Ok(self.xor(&Self::single_bit(n)?))
    }

    fn single_bit(n: i64) -> Result<BigInt> {
        if n < 0 {
            return Err(Error::Arithmetic("negative bit index"));
        }
        Ok(Self::one().shl(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInt {
        BigInt::parse(s).unwrap()
    }

    #[test]
    fn and_or_xor_match_i64_semantics() {
        let samples: [i64; 8] = [0, 1, -1, 7, -7, 0x1234_5678, -0x1234_5678, i64::MIN / 2];
        for &a in &samples {
            for &b in &samples {
                let (x, y) = (BigInt::from_i64(a), BigInt::from_i64(b));
                assert_eq!(x.and(&y).to_i64().unwrap(), a & b, "{} & {}", a, b);
                assert_eq!(x.or(&y).to_i64().unwrap(), a | b, "{} | {}", a, b);
                assert_eq!(x.xor(&y).to_i64().unwrap(), a ^ b, "{} ^ {}", a, b);
                assert_eq!(x.and_not(&y).to_i64().unwrap(), a & !b, "{} &! {}", a, b);
            }
        }
    }

    #[test]
    fn not_is_an_involution() {
        for s in ["0", "1", "-1", "123456789012345678901234567890", "-42"] {
            let x = int(s);
            assert_eq!(x.not().not(), x);
        }
        assert_eq!(int("5").not(), int("-6"));
        assert_eq!(int("-1").not(), BigInt::zero());
    }

    #[test]
    fn masking_against_all_ones_is_identity() {
        let x = int("123456789012345678901234567890");
        let ones = BigInt::one().shl(128).sub(&BigInt::one());
        assert_eq!(x.and(&ones), x);
    }

    #[test]
    fn sign_extension_reaches_distant_bits() {
        let neg = BigInt::of(-1, vec![0xAAAA_AAAA, 0xAAAA_AAAA]).unwrap();
        let pos = BigInt::of(1, vec![0xAAAA_AAAA, 0xAAAA_AAAA]).unwrap();
        assert!(neg.test_bit(1000).unwrap());
        assert!(!pos.test_bit(1000).unwrap());
        assert!(neg.test_bit(64).unwrap());
        assert!(!pos.test_bit(64).unwrap());
    }

    #[test]
    fn test_bit_matches_shifted_parity() {
        for s in ["6", "-6", "1099511627776", "-1099511627776"] {
            let x = int(s);
            for n in 0..80 {
                let expect = x.shr(n).is_odd();
                assert_eq!(x.test_bit(n).unwrap(), expect, "{} bit {}", s, n);
            }
        }
    }

    #[test]
    fn single_bit_edits() {
        let x = int("8");
        assert_eq!(x.set_bit(0).unwrap(), int("9"));
        assert_eq!(x.set_bit(3).unwrap(), x);
        assert_eq!(x.clear_bit(3).unwrap(), BigInt::zero());
        assert_eq!(x.clear_bit(70).unwrap(), x);
        assert_eq!(x.flip_bit(1).unwrap(), int("10"));
        // setting a bit far out extends the magnitude
        let wide = x.set_bit(100).unwrap();
        assert!(wide.test_bit(100).unwrap());
        assert_eq!(wide.clear_bit(100).unwrap(), x);
        // negative values keep the symmetric convention
        let neg = int("-8");
        assert_eq!(neg.set_bit(0).unwrap(), int("-7"));
        assert_eq!(neg.clear_bit(70).unwrap(), neg.sub(&BigInt::one().shl(70)));
    }

    #[test]
    fn negative_bit_indices_fail() {
        let x = int("1");
        assert!(matches!(x.test_bit(-1), Err(Error::Arithmetic(_))));
        assert!(matches!(x.set_bit(-1), Err(Error::Arithmetic(_))));
        assert!(matches!(x.clear_bit(-1), Err(Error::Arithmetic(_))));
        assert!(matches!(x.flip_bit(-1), Err(Error::Arithmetic(_))));
    }
}
