use std::fmt::Debug;

use thiserror::Error;

/// Errors reported by graph construction, mutation and queries.
///
/// Every failure is surfaced immediately; no operation leaves a graph in a
/// partially-updated state when it returns an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation referenced a vertex key that is not part of the graph's
    /// (fixed) key set.  `key` holds the `Debug` rendering of that key.
    #[error("no such vertex key: {key}")]
    NoSuchKey {
        /// Rendered key.
        key: String,
    },

    /// An argument was rejected for a reason other than an unknown key,
    /// e.g. more vertices than the graph's index type can address.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong.
        message: String,
    },
}

impl Error {
    /// Build a `NoSuchKey` error for the given key.
    pub fn no_such_key<K: Debug + ?Sized>(key: &K) -> Self {
        Error::NoSuchKey { key: format!("{:?}", key) }
    }

    /// Build an `InvalidArgument` error with the given message.
    pub fn invalid_argument<M: Into<String>>(message: M) -> Self {
        Error::InvalidArgument { message: message.into() }
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
