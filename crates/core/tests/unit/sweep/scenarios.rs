//! End-to-end sweeps: enumerate, encode, and register.

use pretty_assertions::assert_eq;
use tbsweep_core::sweep::{
    DEFAULT_GENERIC, Dimension, Registration, combination_count, encode, enumerate, sweep,
};
use tbsweep_core::{Value, config::presets};

use crate::common::harness::{init_tracing, int_dim};

#[test]
fn single_combination_round_trip() {
    let dims = [Dimension::new("EX1_PY", ["0"]), Dimension::new("EX2_PY", ["1"])];
    let combos: Vec<_> = enumerate(&dims).collect();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].get("EX1_PY"), Some(&Value::from("0")));
    assert_eq!(combos[0].get("EX2_PY"), Some(&Value::from("1")));
    assert_eq!(encode(&combos[0]), "EX1_PY:0,EX2_PY:1");
}

#[test]
fn multi_value_dimension_in_order() {
    let dims = [
        Dimension::new("SMPL_ORDER_PY", [0, 1, 2]),
        Dimension::new("VAR2_PY", ["0"]),
    ];
    let ids: Vec<String> = enumerate(&dims).map(|c| encode(&c)).collect();
    assert_eq!(
        ids,
        vec![
            "SMPL_ORDER_PY:0,VAR2_PY:0",
            "SMPL_ORDER_PY:1,VAR2_PY:0",
            "SMPL_ORDER_PY:2,VAR2_PY:0",
        ]
    );
}

#[test]
fn seven_dimension_worst_case() {
    let sizes = [3, 4, 4, 2, 2, 2, 2];
    let dims: Vec<Dimension> = sizes
        .iter()
        .enumerate()
        .map(|(i, &n)| int_dim(&format!("P{i}_PY"), n))
        .collect();
    assert_eq!(combination_count(&dims), 768);
    let mut ids: Vec<String> = enumerate(&dims).map(|c| encode(&c)).collect();
    assert_eq!(ids.len(), 768);
    assert_eq!(ids[0], "P0_PY:0,P1_PY:0,P2_PY:0,P3_PY:0,P4_PY:0,P5_PY:0,P6_PY:0");
    assert_eq!(ids[1], "P0_PY:0,P1_PY:0,P2_PY:0,P3_PY:0,P4_PY:0,P5_PY:0,P6_PY:1");
    assert_eq!(ids[767], "P0_PY:2,P1_PY:3,P2_PY:3,P3_PY:1,P4_PY:1,P5_PY:1,P6_PY:1");
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 768);
}

#[test]
fn empty_dimension_registers_nothing() {
    init_tracing();
    let dims = [
        Dimension::new("SMPL_ORDER_PY", [0, 1, 2]),
        Dimension::new::<_, Value>("VAR2_PY", []),
    ];
    let mut registered: Vec<Registration> = Vec::new();
    assert_eq!(sweep(&dims, DEFAULT_GENERIC, &mut registered), Ok(0));
    assert!(registered.is_empty());
}

#[test]
fn name_and_payload_match_bit_for_bit() {
    init_tracing();
    let dims = presets::dimensions("tb_weights_vector").unwrap();
    let mut registered: Vec<Registration> = Vec::new();
    assert_eq!(sweep(&dims, DEFAULT_GENERIC, &mut registered), Ok(12));
    for r in &registered {
        assert_eq!(r.name, r.payload);
        assert_eq!(r.generic, "encoded_tb_cfg");
    }
    assert_eq!(
        registered[0].name,
        "SMPL_ORDER_PY:0,PREDICT_MODE_PY:0,W_INIT_TYPE_PY:0"
    );
    assert_eq!(
        registered[11].name,
        "SMPL_ORDER_PY:2,PREDICT_MODE_PY:1,W_INIT_TYPE_PY:1"
    );
}
