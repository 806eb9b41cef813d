use std::{collections::BTreeSet, fmt::Display};

use crate::group::{ALL_GROUPS, ConfigProvider};

/// The set of currently enabled test groups.
///
/// Parsed from a single external value, for example the environment variable
/// named by a [`GroupDeclaration`](crate::group::GroupDeclaration)'s key.
/// Group names are separated by one or more commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledGroups(BTreeSet<String>);

impl EnabledGroups {
    /// Parse an external value into a set of group names.
    ///
    /// A missing, empty or blank value yields the empty set.
    /// Otherwise the whole value is trimmed and split on runs of commas,
    /// empty tokens are dropped.
    /// Individual tokens keep their inner whitespace.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::default();
        };

        Self(
            value
                .split(',')
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Read and parse the value stored under `key`.
    ///
    /// The provider is asked every time, so changes between two tests are
    /// picked up.
    pub fn read(provider: &impl ConfigProvider, key: &str) -> Self {
        Self::parse(provider.value(key).as_deref())
    }

    pub fn contains(&self, group: &str) -> bool {
        self.0.contains(group)
    }

    pub fn contains_all(&self) -> bool {
        self.contains(ALL_GROUPS)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for EnabledGroups {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for EnabledGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", join(self.iter()))
    }
}

pub(crate) fn join<'s>(groups: impl Iterator<Item = &'s str>) -> String {
    groups.collect::<Vec<_>>().join(", ")
}
