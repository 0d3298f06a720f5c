// src/decimal/mod.rs

pub mod big_decimal;
pub mod divide;
pub mod format;
pub mod ops;
pub mod parse;
pub mod rescale;

// Re-export the main type for convenience
pub use big_decimal::BigDecimal;
