//! Canonical encoding and decoding tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tbsweep_core::Value;
use tbsweep_core::common::DecodeError;
use tbsweep_core::sweep::{Combination, decode, encode, encode_pairs, lookup};

#[rstest]
#[case(vec![("EX1_PY", Value::from("0")), ("EX2_PY", Value::from("1"))], "EX1_PY:0,EX2_PY:1")]
#[case(vec![("SMPL_ORDER_PY", Value::Int(2))], "SMPL_ORDER_PY:2")]
#[case(vec![("EN_PY", Value::Bool(false)), ("N_PY", Value::Int(-3))], "EN_PY:False,N_PY:-3")]
#[case(vec![("GAIN_PY", Value::Real(2.0))], "GAIN_PY:2.0")]
#[case(vec![("GAIN_PY", Value::Real(1e16))], "GAIN_PY:1e+16")]
#[case(vec![("STEP_PY", Value::Real(1e-5))], "STEP_PY:1e-05")]
#[case(vec![("SEED_PY", Value::UInt(u64::MAX))], "SEED_PY:18446744073709551615")]
#[case(vec![], "")]
fn encodes_wire_format(#[case] pairs: Vec<(&str, Value)>, #[case] expected: &str) {
    let combo = Combination::from_pairs(pairs);
    assert_eq!(encode(&combo), expected);
}

#[test]
fn encoding_is_repeatable() {
    let combo = Combination::from_pairs([("A", 1), ("B", 2)]);
    assert_eq!(encode(&combo), encode(&combo.clone()));
}

#[rstest]
#[case(("A", 1), ("A", 2))]
#[case(("A", 1), ("B", 1))]
fn differing_name_or_value_differs(#[case] a: (&str, i64), #[case] b: (&str, i64)) {
    let left = Combination::from_pairs([a, ("Z", 0)]);
    let right = Combination::from_pairs([b, ("Z", 0)]);
    assert_ne!(encode(&left), encode(&right));
}

#[test]
fn int_and_text_of_same_digits_collide() {
    let int = Combination::from_pairs([("A", Value::Int(1))]);
    let text = Combination::from_pairs([("A", Value::from("1"))]);
    assert_ne!(int, text);
    assert_eq!(encode(&int), encode(&text));
}

#[test]
fn encode_pairs_matches_combination_encoding() {
    let combo = Combination::from_pairs([("SMPL_ORDER_PY", 0), ("VAR2_PY", 0)]);
    assert_eq!(
        encode_pairs([("SMPL_ORDER_PY", "0"), ("VAR2_PY", "0")]),
        encode(&combo)
    );
}

#[test]
fn decode_inverts_encode_for_plain_values() {
    let combo = Combination::from_pairs([
        ("FIDEL_TYPE_PY", Value::Int(3)),
        ("ABS_ERR_TYPE_PY", Value::from("1")),
    ]);
    let decoded = decode(&encode(&combo)).unwrap();
    assert_eq!(
        decoded,
        vec![
            ("FIDEL_TYPE_PY".to_string(), "3".to_string()),
            ("ABS_ERR_TYPE_PY".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn embedded_delimiters_are_not_escaped() {
    let combo = Combination::from_pairs([("A", "x,y"), ("B", "z")]);
    let id = encode(&combo);
    assert_eq!(id, "A:x,y,B:z");
    assert_eq!(
        decode(&id),
        Err(DecodeError::MissingSeparator {
            index: 1,
            pair: "y".to_string()
        })
    );
}

#[test]
fn lookup_reads_single_key() {
    let id = "FIDEL_TYPE_PY:2,ABS_ERR_TYPE_PY:0,REL_ERR_TYPE_PY:1";
    assert_eq!(lookup(id, "REL_ERR_TYPE_PY"), Some("1"));
    assert_eq!(lookup(id, "VAR2_PY"), None);
}
