// src/radix/format.rs

use crate::error::{Error, Result};
use crate::magnitude;
use super::tables::{MAX_RADIX, MIN_RADIX, RADIX};

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Format a sign/magnitude pair in the given radix.
///
/// A working copy is repeatedly divided in place by the super-radix; the
/// collected super-digit remainders are emitted most significant first, the
/// leading group unpadded and every later group zero-padded to the full
/// digits-per-word width.
pub fn format(sign: i8, mag: &[u32], radix: u32) -> Result<String> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::OutOfRange("radix must lie in [2, 36]"));
    }
    if mag.is_empty() {
        return Ok("0".to_string());
    }
    let dpw = RADIX.digits_per_word[radix as usize] as usize;
    let super_radix = RADIX.super_radix[radix as usize];

    let mut work = mag.to_vec();
    let mut start = 0usize;
    let mut groups: Vec<u32> = Vec::new();
    while start < work.len() {
        let rem = magnitude::div_rem_small_in_place(&mut work[start..], super_radix);
        groups.push(rem);
        while start < work.len() && work[start] == 0 {
            start += 1;
        }
    }

    let mut out = String::with_capacity(groups.len() * dpw + 1);
    if sign < 0 {
        out.push('-');
    }
    for (i, &g) in groups.iter().rev().enumerate() {
        let pad = if i == 0 { 0 } else { dpw };
        push_super_digit(&mut out, g, radix, pad);
    }
    Ok(out)
}

fn push_super_digit(out: &mut String, mut value: u32, radix: u32, pad: usize) {
    // digits_per_word peaks at 31 for radix 2
    let mut buf = [0u8; 32];
    let mut n = 0;
    loop {
        buf[n] = ALPHABET[(value % radix) as usize];
        n += 1;
        value /= radix;
        if value == 0 {
            break;
        }
    }
    for _ in n..pad {
        out.push('0');
    }
    for i in (0..n).rev() {
        out.push(buf[i] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::parse::parse;

    #[test]
    fn zero_formats_as_zero_in_every_radix() {
        for r in MIN_RADIX..=MAX_RADIX {
            assert_eq!(format(0, &[], r).unwrap(), "0");
        }
    }

    #[test]
    fn formats_small_values() {
        assert_eq!(format(1, &[42], 10).unwrap(), "42");
        assert_eq!(format(-1, &[255], 16).unwrap(), "-FF");
        assert_eq!(format(1, &[5], 2).unwrap(), "101");
    }

    #[test]
    fn inner_super_digits_are_zero_padded() {
        // 10^9 needs a zero-filled low super-digit in radix 10
        assert_eq!(format(1, &[0x3B9A_CA00], 10).unwrap(), "1000000000");
        // 2^32 = 4294967296
        assert_eq!(format(1, &[1, 0], 10).unwrap(), "4294967296");
    }

    #[test]
    fn round_trips_through_parse() {
        let samples = [
            "123456789012345678901234567890",
            "-98765432109876543210",
            "1",
            "4294967295",
            "4294967296",
        ];
        for s in samples {
            let (sign, mag) = parse(s, 10).unwrap();
            assert_eq!(format(sign, &mag, 10).unwrap(), s);
        }
    }

    #[test]
    fn rejects_radix_outside_bounds() {
        assert!(matches!(format(1, &[1], 37), Err(Error::OutOfRange(_))));
        assert!(matches!(format(1, &[1], 0), Err(Error::OutOfRange(_))));
    }
}
