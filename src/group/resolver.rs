use std::{borrow::Cow, collections::BTreeSet, fmt::Display};

use crate::{
    group::{EnabledGroups, spec::join},
    ignore::IgnoreStatus,
};

/// A test group is enabled if:
/// - [`ALL_GROUPS`](crate::group::ALL_GROUPS) is enabled,
/// - nothing is enabled and nothing is declared, or
/// - at least one declared group is enabled.
pub fn is_group_enabled(enabled: &EnabledGroups, declared: &BTreeSet<String>) -> bool {
    if enabled.contains_all() || (enabled.is_empty() && declared.is_empty()) {
        return true;
    }

    enabled.iter().any(|group| declared.contains(group))
}

/// Decide whether a unit declaring `declared` runs under `enabled`.
pub fn decide(enabled: EnabledGroups, declared: BTreeSet<String>) -> Decision {
    match is_group_enabled(&enabled, &declared) {
        true => Decision::Run,
        false => Decision::Skip(GroupSkip { enabled, declared }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Run,
    Skip(GroupSkip),
}

impl Decision {
    pub fn runs(&self) -> bool {
        matches!(self, Decision::Run)
    }

    pub fn skips(&self) -> bool {
        matches!(self, Decision::Skip(_))
    }
}

impl From<Decision> for IgnoreStatus {
    fn from(value: Decision) -> Self {
        match value {
            Decision::Run => IgnoreStatus::Run,
            Decision::Skip(skip) => skip.into(),
        }
    }
}

/// Why a test was skipped: the groups that were enabled and the ones the test
/// declared, without any overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSkip {
    pub enabled: EnabledGroups,
    pub declared: BTreeSet<String>,
}

impl Display for GroupSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "None of the test groups [{}] are enabled. Enabled test groups: {}",
            join(self.declared.iter().map(String::as_str)),
            self.enabled
        )
    }
}

impl From<GroupSkip> for IgnoreStatus {
    fn from(value: GroupSkip) -> Self {
        IgnoreStatus::IgnoreWithReason(Cow::Owned(value.to_string()))
    }
}

/// What to do with a test that has no group declaration at all.
///
/// The policy is fixed when the gate is built and holds for every test it
/// decides on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MissingDeclaration {
    /// Run the test as if it was not gated.
    #[default]
    Run,

    /// Reject the test with a configuration error.
    Fail,
}
