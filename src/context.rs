// src/context.rs

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingMode;

/// Precision and rounding policy for context-governed decimal operations.
///
/// A precision of 0 means exact, unlimited arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MathContext {
    pub precision: u32,
    pub mode: RoundingMode,
}

impl MathContext {
    pub const fn new(precision: u32, mode: RoundingMode) -> Self {
        MathContext { precision, mode }
    }

    pub const BASIC_DEFAULT: MathContext = MathContext::new(9, RoundingMode::HalfUp);
    pub const DECIMAL32: MathContext = MathContext::new(7, RoundingMode::HalfEven);
    pub const DECIMAL64: MathContext = MathContext::new(16, RoundingMode::HalfEven);
    pub const DECIMAL128: MathContext = MathContext::new(34, RoundingMode::HalfEven);
    pub const UNLIMITED: MathContext = MathContext::new(0, RoundingMode::HalfUp);

    pub fn is_unlimited(&self) -> bool {
        self.precision == 0
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::BASIC_DEFAULT
    }
}
