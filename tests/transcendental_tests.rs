// Integration tests for the transcendental kernel at caller-chosen scales.
use std::cmp::Ordering;

use bignumber::transcendental::{cdivide, exp, int_power, int_root, ln, sqrt};
use bignumber::{BigDecimal, RoundingMode};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

#[test]
fn sqrt_of_two_at_twenty_digits() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let r = sqrt(&dec("2.0"), 20).unwrap();
    assert_eq!(r.to_string(), "1.41421356237309504880");
}

#[test]
fn sqrt_recovers_perfect_squares() {
    for (x, root) in [("144", "12"), ("0.0625", "0.25"), ("1E+8", "1E+4")] {
        let r = sqrt(&dec(x), 10).unwrap();
        assert_eq!(r.compare(&dec(root)), Ordering::Equal, "sqrt({})", x);
    }
}

#[test]
fn exp_of_one_at_forty_six_digits() {
    let e = exp(&dec("1"), 46).unwrap();
    assert_eq!(
        e.to_string(),
        "2.7182818284590452353602874713526624977572470937"
    );
}

#[test]
fn ln_at_thirty_two_digits() {
    let r = ln(&dec("2.65"), 32).unwrap();
    assert_eq!(r.to_string(), "0.97455963999813084070924556288652");
}

#[test]
fn ln_of_large_values_goes_through_the_root_reduction() {
    // ln(1000) = 6.907755278982137...
    let r = ln(&dec("1000"), 15).unwrap();
    let err = r.sub(&dec("6.907755278982137")).abs();
    assert_eq!(err.compare(&dec("0.000000000000005")), Ordering::Less);
}

#[test]
fn exp_and_ln_are_inverse_at_modest_scale() {
    for s in ["0.5", "1.25", "3"] {
        let x = dec(s);
        let y = exp(&x, 25).unwrap();
        let back = ln(&y, 15).unwrap();
        let err = back.sub(&x).abs();
        assert_eq!(
            err.compare(&dec("0.00000000000001")),
            Ordering::Less,
            "ln(exp({}))",
            s
        );
    }
}

#[test]
fn int_power_matches_exact_power_for_wide_scales() {
    let r = int_power(&dec("1.5"), 10, 20).unwrap();
    // 1.5^10 = 57.6650390625 exactly
    assert_eq!(r.compare(&dec("57.6650390625")), Ordering::Equal);
    let r = int_power(&dec("10"), -3, 6).unwrap();
    assert_eq!(r.compare(&dec("0.001")), Ordering::Equal);
}

#[test]
fn int_root_inverts_int_power() {
    for (base, idx) in [("7", 3i64), ("1.9", 5), ("123", 2)] {
        let x = dec(base);
        let powered = int_power(&x, idx, 30).unwrap();
        let back = int_root(&powered, idx, 12).unwrap();
        let err = back.sub(&x).abs();
        assert_eq!(
            err.compare(&dec("0.00000000001")),
            Ordering::Less,
            "root {} of {}^{}",
            idx,
            base,
            idx
        );
    }
}

#[test]
fn cdivide_aligns_mixed_exponents() {
    let q = cdivide(&dec("1E+4"), &dec("0.003"), 6, RoundingMode::HalfEven).unwrap();
    assert_eq!(q.to_string(), "3333333.333333");
    let q = cdivide(&dec("1"), &dec("3"), 3, RoundingMode::Up).unwrap();
    assert_eq!(q.to_string(), "0.334");
}

#[test]
fn scale_bounds_are_enforced() {
    assert!(sqrt(&dec("2"), 0).is_err());
    assert!(exp(&dec("2"), 0).is_err());
    assert!(ln(&dec("2"), 0).is_err());
    assert!(int_root(&dec("2"), 2, 0).is_err());
    assert!(int_power(&dec("2"), 2, -1).is_err());
    assert!(int_power(&dec("2"), 2, 0).is_ok());
}
