// src/decimal/parse.rs

use crate::error::{Error, Result};
use crate::integer::BigInt;
use crate::locale::{DefaultLocale, Locale};
use super::big_decimal::{checked_exponent, BigDecimal};

impl BigDecimal {
    /// Parse `[+-]?INT(.FRAC)?([eE][+-]?EXP)?` with the default locale's
    /// separator. At least one digit must appear in the combined
    /// integer/fraction portion.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_locale(s, &DefaultLocale)
    }

    /// Parse with a caller-supplied locale for the decimal separator.
    pub fn parse_with_locale(s: &str, locale: &dyn Locale) -> Result<Self> {
        let separator = locale.decimal_separator();
        let mut rest = s;
        if rest.is_empty() {
            return Err(Error::Format("empty input"));
        }
        let mut negative = false;
        if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('-') {
            rest = stripped;
            negative = true;
        }

        let mut digits = String::with_capacity(rest.len());
        let int_count = consume_digits(&mut rest, &mut digits);
        let mut frac_count = 0usize;
        if !separator.is_empty() && rest.starts_with(separator) {
            rest = &rest[separator.len()..];
            frac_count = consume_digits(&mut rest, &mut digits);
        }
        if int_count + frac_count == 0 {
            return Err(Error::Format("no digits"));
        }

        let mut explicit_exp = 0i64;
        if !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            if marker != b'e' && marker != b'E' {
                return Err(Error::Format("unexpected trailing characters"));
            }
            rest = &rest[1..];
            let mut exp_negative = false;
            if let Some(stripped) = rest.strip_prefix('+') {
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix('-') {
                rest = stripped;
                exp_negative = true;
            }
            if rest.is_empty() {
                return Err(Error::Format("missing exponent digits"));
            }
            for &b in rest.as_bytes() {
                if !b.is_ascii_digit() {
                    return Err(Error::Format("bad exponent digit"));
                }
                explicit_exp = explicit_exp
                    .saturating_mul(10)
                    .saturating_add((b - b'0') as i64);
            }
            if exp_negative {
                explicit_exp = explicit_exp.saturating_neg();
            }
        }

        let mut coefficient = BigInt::parse(&digits)?;
        if negative {
            coefficient = coefficient.neg();
        }
        let exponent = checked_exponent(
            (-(frac_count as i64)).saturating_add(explicit_exp),
            coefficient.is_zero(),
        )?;
        Ok(Self::new(coefficient, exponent))
    }
}

fn consume_digits(rest: &mut &str, out: &mut String) -> usize {
    let bytes = rest.as_bytes();
    let mut n = 0;
    while n < bytes.len() && bytes[n].is_ascii_digit() {
        n += 1;
    }
    out.push_str(&rest[..n]);
    *rest = &rest[n..];
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::BigInt;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::parse(s).unwrap()
    }

    #[test]
    fn plain_forms() {
        assert_eq!(dec("0").coefficient(), &BigInt::zero());
        assert_eq!(dec("42").coefficient(), &BigInt::from_i64(42));
        assert_eq!(dec("42").exponent(), 0);
        assert_eq!(dec("-3.14").coefficient(), &BigInt::from_i64(-314));
        assert_eq!(dec("-3.14").exponent(), -2);
        assert_eq!(dec("+0.5").coefficient(), &BigInt::five());
        assert_eq!(dec(".5").exponent(), -1);
        assert_eq!(dec("5.").exponent(), 0);
        assert_eq!(dec("001.50").coefficient(), &BigInt::from_i64(150));
        assert_eq!(dec("001.50").exponent(), -2);
    }

    #[test]
    fn exponent_forms() {
        assert_eq!(dec("1e3").exponent(), 3);
        assert_eq!(dec("1E+3").exponent(), 3);
        assert_eq!(dec("1.5e-2").exponent(), -3);
        assert_eq!(dec("1.5e-2").coefficient(), &BigInt::from_i64(15));
        assert_eq!(dec("-2.5E4").coefficient(), &BigInt::from_i64(-25));
        assert_eq!(dec("-2.5E4").exponent(), 3);
    }

    #[test]
    fn zero_with_huge_exponent_clamps() {
        let v = dec("0E999999999999999999999");
        assert!(v.is_zero());
        assert_eq!(v.exponent(), i32::MAX);
        let v = dec("0E-999999999999999999999");
        assert_eq!(v.exponent(), i32::MIN);
    }

    #[test]
    fn nonzero_with_huge_exponent_overflows() {
        assert!(matches!(dec_err("1E9999999999"), Error::Overflow(_)));
    }

    fn dec_err(s: &str) -> Error {
        BigDecimal::parse(s).unwrap_err()
    }

    #[test]
    fn malformed_inputs_fail() {
        for bad in ["", "+", "-", ".", "e5", "1.2.3", "1e", "1e+", "1x", "--1", "1 "] {
            assert!(
                matches!(BigDecimal::parse(bad), Err(Error::Format(_))),
                "{:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn custom_locale_separator() {
        struct Comma;
        impl crate::locale::Locale for Comma {
            fn decimal_separator(&self) -> &str {
                ","
            }
        }
        let v = BigDecimal::parse_with_locale("3,14", &Comma).unwrap();
        assert_eq!(v.coefficient(), &BigInt::from_i64(314));
        assert_eq!(v.exponent(), -2);
        assert!(BigDecimal::parse_with_locale("3.14", &Comma).is_err());
    }
}
