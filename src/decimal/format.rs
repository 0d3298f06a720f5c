// src/decimal/format.rs

use crate::locale::{DefaultLocale, Locale};
use super::big_decimal::BigDecimal;

impl BigDecimal {
    /// Scientific string form with the default locale.
    ///
    /// Plain notation is used iff `exponent <= 0` and the adjusted exponent
    /// (`exponent + digits - 1`) is at least -6; otherwise one digit leads
    /// the separator and the adjusted exponent follows an explicit `E`.
    pub fn to_scientific_string(&self) -> String {
        self.to_scientific_string_with_locale(&DefaultLocale)
    }

    pub fn to_scientific_string_with_locale(&self, locale: &dyn Locale) -> String {
        let separator = locale.decimal_separator();
        let digits = self.coefficient.abs().to_decimal_string();
        let negative = self.coefficient.signum() < 0;
        let l = digits.len() as i64;
        let e = self.exponent as i64;
        let adjusted = e + l - 1;
        let mut out = String::with_capacity(digits.len() + separator.len() + 8);
        if negative {
            out.push('-');
        }
        if e <= 0 && adjusted >= -6 {
            push_plain(&mut out, &digits, e, separator);
        } else {
            out.push_str(&digits[..1]);
            if l > 1 {
                out.push_str(separator);
                out.push_str(&digits[1..]);
            }
            out.push('E');
            if adjusted >= 0 {
                out.push('+');
            }
            out.push_str(&adjusted.to_string());
        }
        out
    }

    /// Plain string: no exponent marker, zeros appended or prefixed as
    /// needed.
    pub fn to_plain_string(&self) -> String {
        let digits = self.coefficient.abs().to_decimal_string();
        let negative = self.coefficient.signum() < 0;
        let e = self.exponent as i64;
        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        if e > 0 {
            out.push_str(&digits);
            for _ in 0..e {
                out.push('0');
            }
        } else {
            push_plain(&mut out, &digits, e, DefaultLocale.decimal_separator());
        }
        out
    }
}

// `e <= 0` here: insert the separator `-e` digits from the right, zero
// filling when the point falls left of every digit.
fn push_plain(out: &mut String, digits: &str, e: i64, separator: &str) {
    let point = digits.len() as i64 + e;
    if e == 0 {
        out.push_str(digits);
    } else if point <= 0 {
        out.push('0');
        out.push_str(separator);
        for _ in 0..-point {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        out.push_str(&digits[..point as usize]);
        out.push_str(separator);
        out.push_str(&digits[point as usize..]);
    }
}
