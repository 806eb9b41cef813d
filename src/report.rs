use std::{
    process::{ExitCode, Termination},
    time::Duration,
};

use crate::outcome::TestOutcome;

pub type TestOutcomes<'t> = Vec<(&'t str, TestOutcome)>;

#[derive(Debug)]
#[non_exhaustive]
pub struct TestReport<'t> {
    pub outcomes: TestOutcomes<'t>,
    pub duration: Duration,
}

impl<'t> TestReport<'t> {
    /// Number of tests that ran and passed.
    pub fn passed(&self) -> usize {
        self.count(TestOutcome::passed)
    }

    /// Number of tests that were skipped, by `#[ignore]` or by their group.
    pub fn ignored(&self) -> usize {
        self.count(TestOutcome::ignored)
    }

    pub fn failed(&self) -> usize {
        self.count(TestOutcome::failed)
    }

    /// Number of tests whose function was executed.
    ///
    /// Skipped tests and tests rejected as misconfigured are not counted.
    pub fn run(&self) -> usize {
        self.outcomes.len() - self.ignored() - self.count(TestOutcome::misconfigured)
    }

    pub fn outcome(&self, name: &str) -> Option<&TestOutcome> {
        self.outcomes
            .iter()
            .find_map(|(test, outcome)| (*test == name).then_some(outcome))
    }

    pub fn is_good(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_good())
    }

    fn count(&self, f: impl Fn(&TestOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| f(outcome)).count()
    }
}

impl Termination for TestReport<'_> {
    fn report(self) -> ExitCode {
        match self.is_good() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}
