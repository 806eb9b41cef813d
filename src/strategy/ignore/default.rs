use crate::{
    Error,
    ignore::{IgnoreStatus, TestIgnore},
    test::TestMeta,
};

/// Respects the `ignore` metadata of tests, like the built in harness does.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DefaultIgnore {
    /// Run ignored tests too.
    IncludeIgnored,

    /// Run only ignored tests.
    IgnoredOnly,

    #[default]
    Default,
}

impl<Extra> TestIgnore<Extra> for DefaultIgnore {
    fn ignore(&self, meta: &TestMeta<Extra>) -> Result<IgnoreStatus, Error> {
        Ok(match (self, &meta.ignore) {
            (DefaultIgnore::IgnoredOnly, IgnoreStatus::Run) => IgnoreStatus::Ignore,
            (DefaultIgnore::IncludeIgnored, _)
            | (DefaultIgnore::IgnoredOnly, IgnoreStatus::Ignore)
            | (DefaultIgnore::IgnoredOnly, IgnoreStatus::IgnoreWithReason(_))
            | (DefaultIgnore::Default, IgnoreStatus::Run) => IgnoreStatus::Run,
            (DefaultIgnore::Default, status) => status.clone(),
        })
    }
}
