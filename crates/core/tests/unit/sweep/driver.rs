//! Sweep driver tests: rule selection, registration, and error propagation.

use mockall::Sequence;
use mockall::predicate::function;
use pretty_assertions::assert_eq;
use tbsweep_core::sweep::{
    DEFAULT_GENERIC, Dimension, DiscoveredTest, Registration, Selector, SweepDriver, sweep,
};

use crate::common::harness::{init_tracing, int_dim};
use crate::common::mocks::{FullTest, MockFramework};

fn tests(names: &[&str]) -> Vec<DiscoveredTest> {
    names.iter().copied().map(DiscoveredTest::new).collect()
}

#[test]
fn registers_each_combination_in_order() {
    let mut framework = MockFramework::new();
    let mut seq = Sequence::new();
    for id in ["A_PY:0,B_PY:0", "A_PY:0,B_PY:1", "A_PY:1,B_PY:0", "A_PY:1,B_PY:1"] {
        let _ = framework
            .expect_register()
            .with(function(move |r: &Registration| {
                r.name == id && r.payload == id && r.generic == DEFAULT_GENERIC
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
    }
    let dims = [int_dim("A_PY", 2), int_dim("B_PY", 2)];
    assert_eq!(sweep(&dims, DEFAULT_GENERIC, &mut framework), Ok(4));
}

#[test]
fn first_refusal_stops_the_sweep() {
    let mut framework = MockFramework::new();
    let _ = framework
        .expect_register()
        .times(1)
        .returning(|r| Err(format!("duplicate config {}", r.name)));
    let dims = [int_dim("A_PY", 3)];
    assert_eq!(
        sweep(&dims, DEFAULT_GENERIC, &mut framework),
        Err("duplicate config A_PY:0".to_string())
    );
}

#[test]
fn driver_error_skips_remaining_tests() {
    init_tracing();
    let driver = SweepDriver::new("tb_top_quantizer").sweep_all(vec![int_dim("A_PY", 2)]);
    let mut cases = [
        FullTest::new("first", 2),
        FullTest::new("second", 1),
        FullTest::new("third", 5),
    ];
    let err = driver.run(cases.iter_mut()).unwrap_err();
    assert_eq!(err, "second: refused A_PY:1");
    assert_eq!(cases[0].accepted.len(), 2);
    assert_eq!(cases[1].accepted.len(), 1);
    assert!(cases[2].accepted.is_empty());
}

#[test]
fn per_test_rules_and_default_runs() {
    init_tracing();
    let driver = SweepDriver::new("tb_top_predictor")
        .rule(
            Selector::Named("SPI/AXIS - Many SPI transactions".into()),
            vec![
                Dimension::new("EX1_PY", ["1"]),
                Dimension::new("EX2_PY", ["0", "1"]),
            ],
        )
        .rule(
            Selector::Predicate(Box::new(|n: &str| n.starts_with("LiteBus"))),
            vec![Dimension::new("EX1_PY", ["0"])],
        );
    let mut cases = tests(&[
        "LiteBus - Modifying SPI config",
        "SPI/AXIS - Many SPI transactions",
        "Reset values",
    ]);
    let stats = driver.run(cases.iter_mut()).unwrap();

    assert_eq!(cases[0].configs.len(), 1);
    assert_eq!(cases[0].configs[0].name, "EX1_PY:0");
    assert_eq!(
        cases[1]
            .configs
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>(),
        vec!["EX1_PY:1,EX2_PY:0", "EX1_PY:1,EX2_PY:1"]
    );
    assert!(cases[2].configs.is_empty());

    assert_eq!(stats.testbenches, 1);
    assert_eq!(stats.tests_seen, 3);
    assert_eq!(stats.tests_swept, 2);
    assert_eq!(stats.tests_skipped, 1);
    assert_eq!(stats.registrations, 3);
}

#[test]
fn empty_dimension_rule_yields_zero_registrations() {
    init_tracing();
    let driver = SweepDriver::new("tb_pred_sample").sweep_all(vec![
        int_dim("SMPL_ORDER_PY", 3),
        int_dim("VAR2_PY", 0),
    ]);
    let mut cases = tests(&["all"]);
    let stats = driver.run(cases.iter_mut()).unwrap();
    assert!(cases[0].configs.is_empty());
    assert_eq!(stats.registrations, 0);
    assert_eq!(driver.run_count("all"), 0);
}

#[test]
fn custom_generic_is_forwarded() {
    let driver = SweepDriver::new("tb_weights_vector")
        .with_generic("runner_cfg_extra")
        .sweep_all(vec![int_dim("SMPL_ORDER_PY", 1)]);
    let mut cases = tests(&["all"]);
    let _ = driver.run(cases.iter_mut()).unwrap();
    assert_eq!(cases[0].configs[0].generic, "runner_cfg_extra");
    assert_eq!(driver.generic(), "runner_cfg_extra");
}

#[test]
fn unmatched_test_is_left_alone() {
    let driver = SweepDriver::new("tb").rule(
        Selector::OneOf(vec!["a".into(), "b".into()]),
        vec![int_dim("X_PY", 2)],
    );
    assert!(driver.rule_for("c").is_none());
    assert_eq!(driver.run_count("b"), 2);
    let mut case = DiscoveredTest::new("c");
    assert_eq!(driver.sweep_test(&mut case), Ok(0));
}
