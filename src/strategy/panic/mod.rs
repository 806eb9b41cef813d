//! Panic handling for the harness.
//!
//! Tests can panic. Like in the built in Rust test harness, a panic means the
//! test failed, so panics are caught and turned into a structured status.
//!
//! A panic handler is responsible for actually executing the test function and
//! deciding the resulting [`TestStatus`]. The runner organizes when and where
//! tests are executed, but the panic handler is the piece that runs the test.

use std::panic::UnwindSafe;

use crate::{
    outcome::TestStatus,
    test::{TestMeta, TestResult},
};

mod default;
pub use default::*;

/// A strategy for executing a test function and translating panics into a [`TestStatus`].
///
/// The handler is passed by shared reference and asked once per test that
/// is not ignored.
pub trait TestPanicHandler<Extra> {
    /// Execute the given test function and return a [`TestStatus`].
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        meta: &TestMeta<Extra>,
    ) -> TestStatus;
}
