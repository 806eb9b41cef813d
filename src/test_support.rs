use std::{borrow::Cow, panic::RefUnwindSafe};

use crate::{
    TestHarness,
    ignore::{IgnoreStatus, NoIgnore},
    panic::DefaultPanicHandler,
    runner::SimpleRunner,
    test::{Test, TestFn, TestFnHandle, TestMeta},
};

pub struct BuildTest<Extra> {
    pub func: TestFnHandle,
    pub name: Cow<'static, str>,
    pub ignore: IgnoreStatus,
    pub extra: Extra,
}

impl<Extra: Default> Default for BuildTest<Extra> {
    fn default() -> Self {
        Self {
            func: TestFnHandle::Static(&|| ()),
            name: Default::default(),
            ignore: Default::default(),
            extra: Default::default(),
        }
    }
}

impl<Extra> From<BuildTest<Extra>> for Test<Extra> {
    fn from(value: BuildTest<Extra>) -> Self {
        Test::new(
            value.func,
            TestMeta {
                name: value.name,
                ignore: value.ignore,
                extra: value.extra,
            },
        )
    }
}

impl<F> From<F> for TestFnHandle
where
    F: TestFn + Send + Sync + RefUnwindSafe + 'static,
{
    fn from(value: F) -> Self {
        TestFnHandle::Owned(Box::new(value))
    }
}

macro_rules! test {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::test::Test::from($crate::test_support::BuildTest {
            $($field: From::from($value),)*
            ..($crate::test_support::BuildTest {
                name: concat!(module_path!(), "::", file!(), ":", line!(), ":", column!()).into(),
                ..Default::default()
            })
        })
    };
}

pub(crate) use test;

pub fn harness<'t, Extra>(
    tests: &'t [Test<Extra>],
) -> TestHarness<'t, Extra, NoIgnore, DefaultPanicHandler, SimpleRunner> {
    TestHarness {
        tests,
        ignore: NoIgnore,
        panic_handler: DefaultPanicHandler,
        runner: SimpleRunner,
    }
}
