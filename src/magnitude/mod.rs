// src/magnitude/mod.rs

pub mod division;
pub mod ops;
pub mod shift;

// Re-export the routines the rest of the crate works with
pub use division::div_rem;
pub use ops::{add, compare, div_rem_small_in_place, mul, mul_add_in_place, sub, trim};
pub use shift::{low_bits_nonzero, normalize_shift, shl_bits, shr_bits};
