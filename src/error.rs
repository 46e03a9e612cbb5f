use std::fmt;

/// A `Result` type alias for this crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that encapsulates all possible errors in this crate.
///
/// Most structural misuse of an adapter chain (reversing a forward-only
/// chain, chaining sequences with different element types, using a chain
/// after it has been consumed) is rejected by the type system. The errors
/// here cover the remaining preconditions that can only be checked when a
/// stage is constructed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A step adapter was requested with a step size of zero.
    ZeroStep,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::ZeroStep => write!(f, "step size must be non-zero"),
        }
    }
}

impl std::error::Error for Error {}
