use std::{
    any::Any,
    panic::{UnwindSafe, catch_unwind},
};

use crate::{
    outcome::{TestFailure, TestStatus},
    panic::TestPanicHandler,
    test::{TestMeta, TestResult},
};

/// The default [`TestPanicHandler`] implementation.
///
/// A test passes when it returns `Ok(())` and does not panic, and it fails when
/// it returns an error or panics.
#[derive(Debug, Default, Clone)]
pub struct DefaultPanicHandler;

impl DefaultPanicHandler {
    /// Convert a panic payload into a string.
    ///
    /// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
    /// Other payload types are formatted as a generic placeholder.
    pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
        err.downcast::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|err| err.downcast::<String>().map(|s| *s))
            .unwrap_or_else(|_| String::from("Box<dyn Any>"))
    }
}

impl<Extra> TestPanicHandler<Extra> for DefaultPanicHandler {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        _: &TestMeta<Extra>,
    ) -> TestStatus {
        match catch_unwind(f) {
            Ok(result) => result.into(),
            Err(err) => TestStatus::Failed(TestFailure::Panicked(Self::payload_as_string(err))),
        }
    }
}
