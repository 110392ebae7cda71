//! Built-in presets.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tbsweep_core::config::presets;

#[rstest]
#[case("tb_top_predictor", 1, "EX1_PY:0,EX2_PY:1")]
#[case("tb_pred_sample", 3, "SMPL_ORDER_PY:0,VAR2_PY:0")]
#[case("tb_weights_vector", 12, "SMPL_ORDER_PY:0,PREDICT_MODE_PY:0,W_INIT_TYPE_PY:0")]
#[case("tb_top_quantizer", 16, "FIDEL_TYPE_PY:0,ABS_ERR_TYPE_PY:0,REL_ERR_TYPE_PY:0")]
fn preset_runs(#[case] testbench: &str, #[case] runs: u64, #[case] first: &str) {
    let plan = presets::by_name(testbench).unwrap();
    let (previews, stats) = plan.preview();
    assert_eq!(stats.registrations, runs);
    assert_eq!(previews[0].tests[0].configs[0].name, first);
}

#[test]
fn bundle_preset_drives_all_testbenches_in_order() {
    let plan = presets::by_name(presets::ALL).unwrap();
    let drivers = plan.drivers();
    let names: Vec<&str> = drivers.iter().map(|d| d.testbench()).collect();
    assert_eq!(names, presets::TESTBENCHES.to_vec());
    let (_, stats) = plan.preview();
    assert_eq!(stats.testbenches, 4);
    assert_eq!(stats.registrations, 1 + 3 + 12 + 16);
}
