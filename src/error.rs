use std::error;
use std::fmt;
use std::result;

/// Errors returned by queries that need at least one element in the set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operation requires a non-empty tree.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTree => write!(f, "tree is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
