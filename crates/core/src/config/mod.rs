//! Sweep plans.
//!
//! A sweep plan is the declarative form of the per-testbench driving scripts. It provides:
//! 1. **Defaults:** The payload generic name and the implicit test case name.
//! 2. **Structures:** Plan, testbench, and rule entries deserialized from JSON.
//! 3. **Validation:** Empty and duplicate names are rejected; empty value lists are not.
//! 4. **Presets:** Built-in plans for the Predictor IP testbenches (see [`presets`]).
//!
//! Dimensions are JSON arrays of `{ "name", "values" }` objects so declaration order,
//! and therefore run naming, survives deserialization.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::stats::SweepStats;
use crate::sweep::{Dimension, DiscoveredTest, Selector, SweepDriver};

/// Built-in sweep plans.
pub mod presets;

/// Default configuration constants.
mod defaults {
    /// Testbench generic that receives the encoded configuration.
    pub const GENERIC: &str = crate::sweep::encode::DEFAULT_GENERIC;

    /// Name the framework gives a testbench without explicit test cases.
    pub const IMPLICIT_TEST: &str = "all";
}

/// Root of a sweep plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    /// Generic receiving the payload unless a testbench overrides it.
    #[serde(default = "SweepPlan::default_generic")]
    pub generic: String,

    /// Testbenches in the order they are driven.
    #[serde(default)]
    pub testbenches: Vec<TestbenchPlan>,
}

impl SweepPlan {
    fn default_generic() -> String {
        defaults::GENERIC.to_string()
    }

    /// Parses and validates a plan from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed input, or a validation error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let plan: Self = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reads, parses, and validates a plan file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks names across the whole plan.
    ///
    /// # Errors
    ///
    /// The first empty testbench name, empty dimension name, or duplicate dimension found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, tb) in self.testbenches.iter().enumerate() {
            if tb.name.is_empty() {
                return Err(ConfigError::EmptyTestbenchName { index });
            }
            for (rule, entry) in tb.rules.iter().enumerate() {
                let mut seen = HashSet::new();
                for (index, dim) in entry.dimensions.iter().enumerate() {
                    if dim.name.is_empty() {
                        return Err(ConfigError::EmptyDimensionName {
                            testbench: tb.name.clone(),
                            rule,
                            index,
                        });
                    }
                    if !seen.insert(dim.name.as_str()) {
                        return Err(ConfigError::DuplicateDimension {
                            testbench: tb.name.clone(),
                            rule,
                            name: dim.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the testbench entry named `name`.
    pub fn testbench(&self, name: &str) -> Option<&TestbenchPlan> {
        self.testbenches.iter().find(|tb| tb.name == name)
    }

    /// Builds one driver per testbench.
    pub fn drivers(&self) -> Vec<SweepDriver> {
        self.testbenches
            .iter()
            .map(|tb| tb.driver(&self.generic))
            .collect()
    }

    /// Drives every testbench against its listed test cases without a framework.
    ///
    /// # Returns
    ///
    /// The registrations each test case would receive, and the combined statistics.
    pub fn preview(&self) -> (Vec<TestbenchPreview>, SweepStats) {
        let mut total = SweepStats::default();
        let previews = self
            .testbenches
            .iter()
            .map(|tb| {
                let preview = tb.preview(&self.generic);
                total.merge(&preview.stats);
                preview
            })
            .collect();
        (previews, total)
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            generic: Self::default_generic(),
            testbenches: Vec::new(),
        }
    }
}

/// Sweep description for one testbench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestbenchPlan {
    /// Testbench entity name (e.g. `tb_top_quantizer`).
    pub name: String,

    /// Generic override for this testbench.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<String>,

    /// Test case names inside the testbench. Empty means the implicit `all` test.
    #[serde(default)]
    pub tests: Vec<String>,

    /// Rules, first match wins.
    #[serde(default)]
    pub rules: Vec<RulePlan>,
}

impl TestbenchPlan {
    /// Test case names, falling back to the implicit test when none are listed.
    pub fn test_names(&self) -> Vec<&str> {
        if self.tests.is_empty() {
            vec![defaults::IMPLICIT_TEST]
        } else {
            self.tests.iter().map(String::as_str).collect()
        }
    }

    /// Builds the driver for this testbench.
    pub fn driver(&self, plan_generic: &str) -> SweepDriver {
        let generic = self.generic.as_deref().unwrap_or(plan_generic);
        self.rules.iter().fold(
            SweepDriver::new(self.name.clone()).with_generic(generic),
            |driver, rule| driver.rule(rule.select.to_selector(), rule.dimensions.clone()),
        )
    }

    /// Sweeps the listed test cases into recording stubs.
    pub fn preview(&self, plan_generic: &str) -> TestbenchPreview {
        let driver = self.driver(plan_generic);
        let mut tests: Vec<DiscoveredTest> = self
            .test_names()
            .into_iter()
            .map(DiscoveredTest::new)
            .collect();
        let stats = match driver.run(tests.iter_mut()) {
            Ok(stats) => stats,
            Err(never) => match never {},
        };
        TestbenchPreview {
            testbench: self.name.clone(),
            tests,
            stats,
        }
    }
}

/// Selector as written in a plan file.
///
/// Absent or `"any"` selects every test case; otherwise one of
/// `{ "test": name }`, `{ "one_of": [..] }`, `{ "except": [..] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Select {
    /// Every test case.
    #[default]
    Any,
    /// Exactly one test case.
    Test(String),
    /// Any of the listed test cases.
    OneOf(Vec<String>),
    /// Every test case except the listed ones.
    Except(Vec<String>),
}

impl Select {
    /// Converts to the driver's selector.
    pub fn to_selector(&self) -> Selector {
        match self {
            Self::Any => Selector::Any,
            Self::Test(name) => Selector::Named(name.clone()),
            Self::OneOf(names) => Selector::OneOf(names.clone()),
            Self::Except(names) => Selector::Except(names.clone()),
        }
    }
}

/// One rule of a testbench plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulePlan {
    /// Test cases the rule applies to.
    #[serde(default)]
    pub select: Select,

    /// Dimensions in declaration order.
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// Result of [`TestbenchPlan::preview`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestbenchPreview {
    /// Testbench name.
    pub testbench: String,
    /// Test cases with the registrations they received.
    pub tests: Vec<DiscoveredTest>,
    /// Counters for this testbench.
    #[serde(skip)]
    pub stats: SweepStats,
}

impl TestbenchPreview {
    /// Full run names as a framework lists them: `<testbench>.<test>.<config>`.
    ///
    /// Test cases without registrations appear once, without a config suffix.
    pub fn run_names(&self) -> Vec<String> {
        self.tests
            .iter()
            .flat_map(|t| {
                if t.configs.is_empty() {
                    vec![format!("{}.{}", self.testbench, t.name)]
                } else {
                    t.configs
                        .iter()
                        .map(|c| format!("{}.{}.{}", self.testbench, t.name, c.name))
                        .collect()
                }
            })
            .collect()
    }
}
