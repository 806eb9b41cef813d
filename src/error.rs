use thiserror::Error;

/// Errors raised while deciding whether a test may run.
///
/// The decision logic itself is total. Errors only come from policies that
/// reject a configuration, like a test without any group declaration while
/// [`MissingDeclaration::Fail`](crate::group::MissingDeclaration::Fail) is
/// active.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("test {test:?} declares no test group and no module declaration applies")]
    MissingDeclaration { test: String },
}

pub type Result<T> = std::result::Result<T, Error>;
