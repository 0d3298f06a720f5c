// Serialization round-trips through serde_json string forms.
use bignumber::{BigDecimal, BigInt, MathContext, RoundingMode};

#[test]
fn bigint_round_trips_as_a_decimal_string() {
    let values = ["0", "-1", "123456789012345678901234567890"];
    for s in values {
        let v = BigInt::parse(s).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", s));
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}

#[test]
fn bigdecimal_round_trips_with_its_exponent() {
    let values = ["0", "1.00", "-3.14", "1E+9", "4.5E-12", "0.000001"];
    for s in values {
        let v = BigDecimal::parse(s).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: BigDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v, "{}", s);
        assert_eq!(back.exponent(), v.exponent(), "{}", s);
    }
}

#[test]
fn context_and_mode_serialize_structurally() {
    let ctx = MathContext::new(34, RoundingMode::HalfEven);
    let json = serde_json::to_string(&ctx).unwrap();
    let back: MathContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ctx);
    assert_eq!(
        serde_json::to_string(&RoundingMode::HalfUp).unwrap(),
        "\"HalfUp\""
    );
}

#[test]
fn malformed_strings_are_rejected_at_deserialization() {
    assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    assert!(serde_json::from_str::<BigDecimal>("\"1..2\"").is_err());
}
