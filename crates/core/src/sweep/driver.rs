//! Sweep Driver.
//!
//! The boundary between the pure enumerate/encode pipeline and the test-execution
//! framework that owns the registered runs. It performs:
//! 1. **Selection:** Picks the first rule whose selector matches a discovered test case.
//! 2. **Expansion:** Enumerates the rule's dimensions and encodes every combination.
//! 3. **Registration:** Issues one [`Registration`] per combination to the injected [`Registrar`].
//!
//! A test case that matches no rule, or whose rule declares no dimensions, receives no
//! registrations and falls back to the framework's single default run. A rule with an
//! empty dimension also registers nothing; that is reported, never raised.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::stats::SweepStats;
use crate::sweep::dimension::Dimension;
use crate::sweep::encode::{DEFAULT_GENERIC, encode};
use crate::sweep::enumerate::{combination_count, enumerate};

/// One simulation run handed to the framework.
///
/// `name` and `payload` are the same encoded identifier; `generic` names the testbench
/// generic the payload is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Display name of the run.
    pub name: String,
    /// Testbench generic receiving the payload.
    pub generic: String,
    /// Encoded configuration delivered to the testbench.
    pub payload: String,
}

/// Collaborator that accepts run registrations.
///
/// Implemented by the framework adapter (e.g. a VUnit test object in the Python bindings)
/// and by recording stubs in tests.
pub trait Registrar {
    /// Error raised by the framework when a registration is refused.
    type Error;

    /// Registers one run.
    ///
    /// # Errors
    ///
    /// Whatever the framework reports; the driver stops at the first error.
    fn register(&mut self, registration: Registration) -> Result<(), Self::Error>;
}

impl Registrar for Vec<Registration> {
    type Error = Infallible;

    fn register(&mut self, registration: Registration) -> Result<(), Infallible> {
        self.push(registration);
        Ok(())
    }
}

/// A discovered test case that can receive configurations.
pub trait TestCase: Registrar {
    /// Test case name as reported by the framework's discovery.
    fn name(&self) -> &str;
}

/// A test case known only by name, recording the registrations it receives.
///
/// Used wherever there is no live framework: the CLI preview and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveredTest {
    /// Test case name.
    pub name: String,
    /// Registrations received, in issue order.
    pub configs: Vec<Registration>,
}

impl DiscoveredTest {
    /// Creates a test case with no registrations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configs: Vec::new(),
        }
    }
}

impl Registrar for DiscoveredTest {
    type Error = Infallible;

    fn register(&mut self, registration: Registration) -> Result<(), Infallible> {
        self.configs.register(registration)
    }
}

impl TestCase for DiscoveredTest {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Sweeps one test case over `dimensions`.
///
/// # Arguments
///
/// * `dimensions` - Dimensions in declaration order; empty means "not swept".
/// * `generic` - Testbench generic the payload is bound to.
/// * `registrar` - Receives one registration per combination.
///
/// # Returns
///
/// The number of registrations issued.
///
/// # Errors
///
/// The first error returned by `registrar`; earlier registrations are not rolled back.
pub fn sweep<R>(
    dimensions: &[Dimension],
    generic: &str,
    registrar: &mut R,
) -> Result<usize, R::Error>
where
    R: Registrar + ?Sized,
{
    if dimensions.is_empty() {
        return Ok(0);
    }
    let mut issued = 0;
    for combination in enumerate(dimensions) {
        let id = encode(&combination);
        debug!(config = %id, "registering run");
        registrar.register(Registration {
            name: id.clone(),
            generic: generic.to_string(),
            payload: id,
        })?;
        issued += 1;
    }
    Ok(issued)
}

/// Chooses which discovered test cases a rule applies to.
pub enum Selector {
    /// Every test case.
    Any,
    /// The test case with exactly this name.
    Named(String),
    /// Any of the listed test cases.
    OneOf(Vec<String>),
    /// Every test case except the listed ones.
    Except(Vec<String>),
    /// A caller-supplied predicate over the test case name.
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Selector {
    /// Returns `true` if the selector applies to `test`.
    pub fn matches(&self, test: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => name == test,
            Self::OneOf(names) => names.iter().any(|n| n == test),
            Self::Except(names) => !names.iter().any(|n| n == test),
            Self::Predicate(f) => f(test),
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::OneOf(names) => f.debug_tuple("OneOf").field(names).finish(),
            Self::Except(names) => f.debug_tuple("Except").field(names).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A selector and the dimensions its test cases are swept over.
#[derive(Debug)]
pub struct SweepRule {
    /// Which test cases the rule applies to.
    pub selector: Selector,
    /// Dimensions for the matching test cases.
    pub dimensions: Vec<Dimension>,
}

/// Sweep description for one testbench.
///
/// Rules are tried in declaration order; the first match wins.
#[derive(Debug)]
pub struct SweepDriver {
    testbench: String,
    generic: String,
    rules: Vec<SweepRule>,
}

impl SweepDriver {
    /// Creates a driver for `testbench` with no rules and the default generic.
    pub fn new(testbench: impl Into<String>) -> Self {
        Self {
            testbench: testbench.into(),
            generic: DEFAULT_GENERIC.to_string(),
            rules: Vec::new(),
        }
    }

    /// Overrides the generic that receives the payload.
    #[must_use]
    pub fn with_generic(mut self, generic: impl Into<String>) -> Self {
        self.generic = generic.into();
        self
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, selector: Selector, dimensions: Vec<Dimension>) -> Self {
        self.rules.push(SweepRule {
            selector,
            dimensions,
        });
        self
    }

    /// Appends a rule that applies to every test case not matched earlier.
    #[must_use]
    pub fn sweep_all(self, dimensions: Vec<Dimension>) -> Self {
        self.rule(Selector::Any, dimensions)
    }

    /// Testbench name.
    pub fn testbench(&self) -> &str {
        &self.testbench
    }

    /// Generic receiving the payload.
    pub fn generic(&self) -> &str {
        &self.generic
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[SweepRule] {
        &self.rules
    }

    /// Returns the first rule matching `test`.
    pub fn rule_for(&self, test: &str) -> Option<&SweepRule> {
        self.rules.iter().find(|r| r.selector.matches(test))
    }

    /// Number of runs `test` would be registered with.
    pub fn run_count(&self, test: &str) -> usize {
        self.rule_for(test).map_or(0, |r| {
            if r.dimensions.is_empty() {
                0
            } else {
                combination_count(&r.dimensions)
            }
        })
    }

    /// Sweeps a single discovered test case.
    ///
    /// # Returns
    ///
    /// The number of registrations issued to `test`.
    ///
    /// # Errors
    ///
    /// The first error returned by the test case's registrar.
    pub fn sweep_test<T>(&self, test: &mut T) -> Result<usize, T::Error>
    where
        T: TestCase + ?Sized,
    {
        let Some(rule) = self.rule_for(test.name()) else {
            debug!(testbench = %self.testbench, test = test.name(), "no matching rule");
            return Ok(0);
        };
        if rule.dimensions.iter().any(Dimension::is_empty) {
            warn!(
                testbench = %self.testbench,
                test = test.name(),
                "rule has an empty dimension; no runs registered"
            );
        }
        let issued = sweep(&rule.dimensions, &self.generic, test)?;
        info!(testbench = %self.testbench, test = test.name(), runs = issued, "swept test case");
        Ok(issued)
    }

    /// Sweeps every discovered test case of the testbench.
    ///
    /// # Errors
    ///
    /// The first registration error; test cases after it are not visited.
    pub fn run<'t, T, I>(&self, tests: I) -> Result<SweepStats, T::Error>
    where
        T: TestCase + ?Sized + 't,
        I: IntoIterator<Item = &'t mut T>,
    {
        let mut stats = SweepStats {
            testbenches: 1,
            ..SweepStats::default()
        };
        for test in tests {
            let issued = self.sweep_test(test)?;
            stats.record(issued);
        }
        info!(
            testbench = %self.testbench,
            tests = stats.tests_seen,
            registrations = stats.registrations,
            "testbench sweep complete"
        );
        Ok(stats)
    }
}
