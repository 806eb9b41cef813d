//! Test execution.
//!
//! A runner coordinates running tests and producing [`TestOutcome`] values.
//!
//! The harness passes the runner an iterator of test execution functions.
//! These functions already include the ignore decision and panic handling
//! (they return a [`TestStatus`]), so the runner only orders and times them.
//!
//! Group gates read their switch right before each test, so a test that
//! changes the switch affects every test decided after it.

use crate::{
    outcome::{TestOutcome, TestStatus},
    test::TestMeta,
};

mod simple;
pub use simple::*;

/// A strategy for running tests and producing [`TestOutcome`] values.
pub trait TestRunner<Extra> {
    /// Run the given tests and return their outcomes.
    ///
    /// The input iterator yields `(f, meta)` pairs where `f` is the test execution function.
    fn run<'t, I, F>(&self, tests: I) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: Iterator<Item = (F, &'t TestMeta<Extra>)>,
        F: FnOnce() -> TestStatus,
        Extra: 't;
}
