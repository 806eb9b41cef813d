//! Switch groups of tests on and off from the outside.
//!
//! Tests are grouped by attaching a [`GroupDeclaration`](group::GroupDeclaration)
//! to their [`TestUnit`](group::TestUnit) or to the unit's module.
//! A [`GroupIgnore`](ignore::GroupIgnore) plugged into the [`harness()`] reads
//! the enabled groups from a [`ConfigProvider`](group::ConfigProvider) right
//! before each test and skips the tests whose groups are not enabled.

pub mod group;
pub mod outcome;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod error;
pub use error::*;

#[cfg(test)]
mod test_support;
