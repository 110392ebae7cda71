//! Built-in sweep plans for the Predictor IP testbenches.
//!
//! Each testbench sweeps all of its test cases over one fixed dimension set. The
//! `predictor` preset bundles all four in driving order.

use crate::common::ConfigError;
use crate::config::{RulePlan, Select, SweepPlan, TestbenchPlan};
use crate::sweep::Dimension;

/// Name of the preset that contains every testbench below.
pub const ALL: &str = "predictor";

/// Testbench names with a preset, in driving order.
pub const TESTBENCHES: [&str; 4] = [
    "tb_top_predictor",
    "tb_pred_sample",
    "tb_weights_vector",
    "tb_top_quantizer",
];

/// `'0'`/`'1'` std_logic-style flag dimension.
fn flag(name: &str) -> Dimension {
    Dimension::new(name, ["0", "1"])
}

/// Dimension set swept for `testbench`, or `None` if it has no preset.
pub fn dimensions(testbench: &str) -> Option<Vec<Dimension>> {
    let dims = match testbench {
        "tb_top_predictor" => vec![
            Dimension::new("EX1_PY", ["0"]),
            Dimension::new("EX2_PY", ["1"]),
        ],
        "tb_pred_sample" => vec![
            Dimension::new("SMPL_ORDER_PY", [0, 1, 2]),
            Dimension::new("VAR2_PY", ["0"]),
        ],
        "tb_weights_vector" => vec![
            Dimension::new("SMPL_ORDER_PY", [0, 1, 2]),
            flag("PREDICT_MODE_PY"),
            flag("W_INIT_TYPE_PY"),
        ],
        "tb_top_quantizer" => vec![
            Dimension::new("FIDEL_TYPE_PY", [0, 1, 2, 3]),
            flag("ABS_ERR_TYPE_PY"),
            flag("REL_ERR_TYPE_PY"),
        ],
        _ => return None,
    };
    Some(dims)
}

fn testbench_plan(name: &str, dimensions: Vec<Dimension>) -> TestbenchPlan {
    TestbenchPlan {
        name: name.to_string(),
        generic: None,
        tests: Vec::new(),
        rules: vec![RulePlan {
            select: Select::Any,
            dimensions,
        }],
    }
}

/// Preset names accepted by [`by_name`].
pub fn names() -> Vec<&'static str> {
    std::iter::once(ALL).chain(TESTBENCHES).collect()
}

/// Looks up a preset by name.
///
/// # Errors
///
/// [`ConfigError::UnknownPreset`] if no preset has that name.
pub fn by_name(name: &str) -> Result<SweepPlan, ConfigError> {
    let testbenches = if name == ALL {
        TESTBENCHES
            .iter()
            .filter_map(|tb| dimensions(tb).map(|d| testbench_plan(tb, d)))
            .collect()
    } else {
        let dims = dimensions(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        vec![testbench_plan(name, dims)]
    };
    Ok(SweepPlan {
        testbenches,
        ..SweepPlan::default()
    })
}

/// A single ad-hoc testbench plan sweeping every test case over `dimensions`.
pub fn single(testbench: &str, dimensions: Vec<Dimension>) -> SweepPlan {
    SweepPlan {
        testbenches: vec![testbench_plan(testbench, dimensions)],
        ..SweepPlan::default()
    }
}
