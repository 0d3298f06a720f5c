// src/lib.rs

pub mod context;
pub mod decimal;
pub mod error;
pub mod integer;
pub mod locale;
pub mod magnitude;
pub mod radix;
pub mod rounding;
pub mod transcendental;

mod serialize;

pub use context::MathContext;
pub use decimal::BigDecimal;
pub use error::{Error, Result};
pub use integer::BigInt;
pub use locale::{DefaultLocale, Locale};
pub use rounding::{RoundingEngine, RoundingMode};
