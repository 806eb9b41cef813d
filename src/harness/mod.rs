
pub use test::TestHarness;

use crate::{
    ignore::GroupIgnore, panic::DefaultPanicHandler, runner::SimpleRunner, test::Test,
};

/// Build a harness for `tests` with group gating enabled.
///
/// Enabled groups are read from environment variables, tests without a group
/// declaration run, `#[ignore]`-style metadata is respected.
/// Tests run one after another, in order.
/// Replace any strategy with the `with_*` methods.
pub fn harness<'t, Extra>(
    tests: &'t [Test<Extra>],
) -> TestHarness<'t, Extra, GroupIgnore, DefaultPanicHandler, SimpleRunner> {
    TestHarness {
        tests,
        ignore: GroupIgnore::default(),
        panic_handler: DefaultPanicHandler,
        runner: SimpleRunner,
    }
}
