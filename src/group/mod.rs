//! Test groups and the decision whether a group is enabled.
//!
//! Test units (or whole modules) declare which named groups they belong to
//! with a [`GroupDeclaration`].
//! Which groups are enabled is decided outside of the test code, through a
//! single value per declaration key, for example the environment variable
//! `testgroup=slow,network`.
//! Before a test runs, the gate resolves its declaration, reads the enabled
//! groups for the declaration's key and either lets the test run or skips it
//! with a [`GroupSkip`] reason.
//!
//! The harness integration lives in
//! [`GroupIgnore`](crate::ignore::GroupIgnore).

mod declaration;
pub use declaration::*;

mod provider;
pub use provider::*;

mod resolver;
pub use resolver::*;

mod spec;
pub use spec::EnabledGroups;

/// Key of the external value consulted when a declaration does not name one.
pub const DEFAULT_KEY: &str = "testgroup";

/// Enabling this group runs every test, regardless of its declaration.
pub const ALL_GROUPS: &str = "all";
