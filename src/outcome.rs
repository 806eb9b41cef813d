use std::{borrow::Cow, time::Duration};

use crate::test::TestResult;

#[derive(Debug)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn is_good(&self) -> bool {
        self.status.is_good()
    }

    pub fn is_bad(&self) -> bool {
        self.status.is_bad()
    }

    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn ignored(&self) -> bool {
        self.status.ignored()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }

    pub fn misconfigured(&self) -> bool {
        self.status.misconfigured()
    }
}

/// The status of a single test.
///
/// Skipped tests, including the ones skipped because their group is not
/// enabled, are [`Ignored`](Self::Ignored) and count as good.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Ignored { reason: Option<Cow<'static, str>> },
    Failed(TestFailure),
}

impl TestStatus {
    pub fn is_good(&self) -> bool {
        matches!(self, TestStatus::Passed | TestStatus::Ignored { .. })
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn ignored(&self) -> bool {
        matches!(self, TestStatus::Ignored { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    /// Failed without being executed.
    pub fn misconfigured(&self) -> bool {
        matches!(self, TestStatus::Failed(TestFailure::Misconfigured(_)))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            TestStatus::Ignored { reason } => reason.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The test returned an error.
    Error(String),

    /// The test panicked.
    Panicked(String),

    /// The test was rejected before running, its configuration is invalid.
    Misconfigured(String),
}

impl From<TestResult> for TestStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => TestStatus::Passed,
            Err(err) => TestStatus::Failed(TestFailure::Error(err)),
        }
    }
}
