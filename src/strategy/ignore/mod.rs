//! Deciding, right before a test runs, whether it should run at all.
//!
//! The harness asks its [`TestIgnore`] strategy once per test.
//! The answer is an [`IgnoreStatus`]: run the test, or record it as ignored,
//! optionally with a reason.
//! A strategy may also reject a test with an [`Error`], the harness then
//! reports it as misconfigured without running it.
//!
//! [`DefaultIgnore`] respects the `ignore` metadata of a test, like `#[ignore]`
//! does for the built in harness.
//! [`GroupIgnore`] additionally gates tests by their test groups.

use std::borrow::Cow;

use crate::{Error, test::TestMeta};

mod no;
pub use no::*;

mod default;
pub use default::*;

mod group;
pub use group::*;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum IgnoreStatus {
    #[default]
    Run,
    Ignore,
    IgnoreWithReason(Cow<'static, str>),
}

impl IgnoreStatus {
    pub fn runs(&self) -> bool {
        matches!(self, Self::Run)
    }
}

impl From<bool> for IgnoreStatus {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Ignore,
            false => Self::Run,
        }
    }
}

impl From<&'static str> for IgnoreStatus {
    fn from(value: &'static str) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

impl From<String> for IgnoreStatus {
    fn from(value: String) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

/// A strategy deciding whether a test runs.
///
/// The harness asks the strategy right before running each test, so state
/// changed by earlier tests is visible to later decisions.
pub trait TestIgnore<Extra> {
    fn ignore(&self, meta: &TestMeta<Extra>) -> Result<IgnoreStatus, Error>;
}

impl<Extra, F> TestIgnore<Extra> for F
where
    F: Fn(&TestMeta<Extra>) -> IgnoreStatus,
{
    fn ignore(&self, meta: &TestMeta<Extra>) -> Result<IgnoreStatus, Error> {
        Ok(self(meta))
    }
}
