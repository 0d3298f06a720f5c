// src/radix/tables.rs

use lazy_static::lazy_static;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Per-radix constants for super-digit chunking.
///
/// `digits_per_word[r]` is the largest `k` with `r^k <= 2^32 - 1`,
/// `super_radix[r] = r^k`, and `bits_per_digit_x1024[r]` is
/// `ceil(1024 * log2(r))`, used to pre-size parse buffers.
pub struct RadixTables {
    pub digits_per_word: [u32; 37],
    pub super_radix: [u32; 37],
    pub bits_per_digit_x1024: [u32; 37],
}

lazy_static! {
    pub static ref RADIX: RadixTables = {
        let mut digits_per_word = [0u32; 37];
        let mut super_radix = [0u32; 37];
        let mut bits_per_digit_x1024 = [0u32; 37];
        for r in MIN_RADIX..=MAX_RADIX {
            let mut pow = 1u64;
            let mut k = 0u32;
            while pow * r as u64 <= u32::MAX as u64 {
                pow *= r as u64;
                k += 1;
            }
            digits_per_word[r as usize] = k;
            super_radix[r as usize] = pow as u32;
            bits_per_digit_x1024[r as usize] = (1024.0 * (r as f64).log2()).ceil() as u32;
        }
        RadixTables {
            digits_per_word,
            super_radix,
            bits_per_digit_x1024,
        }
    };
}
