use std::io;

use thiserror::Error;

/// Result alias used across the store.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for store operations.
///
/// Decode variants carry the 1-based number of the row that failed, counted
/// from the start of the log file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An empty key was passed to a mutating operation.
    #[error("key is empty")]
    EmptyKey,

    /// A key longer than the maximum encodable length was passed to a
    /// mutating operation.
    #[error("key is too large: {len} (max {max})")]
    KeyTooLarge { len: usize, max: usize },

    /// A row began with a byte that is not a known op code.
    #[error("unknown op: {op:?} (row {row})")]
    UnknownOp { op: char, row: usize },

    /// A length field was not a decimal digit run followed by its separator.
    #[error("parse {what} length (row {row})")]
    ParseLength { what: &'static str, row: usize },

    /// A row claimed more payload bytes than the file holds.
    #[error("read {what} (row {row})")]
    Truncated {
        what: &'static str,
        row: usize,
        #[source]
        source: io::Error,
    },

    /// The key has no current entry in the index. Returned by `find`;
    /// `get` reports absence as a clean `None` instead.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// The key is present but was recorded without a value, so there are
    /// no bytes to read back.
    #[error("key has no value: {0:?}")]
    NoValue(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
