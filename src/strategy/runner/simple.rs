use std::time::Instant;

use crate::{
    outcome::{TestOutcome, TestStatus},
    runner::TestRunner,
    test::TestMeta,
};

/// Runs tests one after another on the calling thread, in order.
#[derive(Debug, Default, Clone)]
pub struct SimpleRunner;

impl<Extra> TestRunner<Extra> for SimpleRunner {
    fn run<'t, I, F>(&self, tests: I) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: Iterator<Item = (F, &'t TestMeta<Extra>)>,
        F: FnOnce() -> TestStatus,
        Extra: 't,
    {
        tests.map(|(test, meta)| {
            let now = Instant::now();
            let status = test();
            let duration = now.elapsed();
            (meta, TestOutcome { status, duration })
        })
    }
}
