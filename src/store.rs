//! The store surface: open/replay wiring, the point read and write
//! operations, and key validation.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::index::{Index, ValueRef};
use crate::log::Log;
use crate::row::{self, OP_DELETE, OP_SET};

/// Longest key the codec will encode. Any key that fits in memory passes;
/// the check is a guard, not a working limit.
pub const MAX_KEY_LEN: usize = isize::MAX as usize;

/// An embedded key-value store over a single append-only log file.
///
/// Opening replays the whole log into an in-memory index. Reads are served
/// by an index lookup plus one random-access file read; writes append a row
/// to the tail of the log and update the index in place. A single thread
/// is expected to drive the store; nothing here is synchronized.
pub struct Store {
    log: Log,
    index: Index,
}

impl Store {
    /// Opens the store at `path`, creating the log file if it does not
    /// exist and replaying any existing rows.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let (log, index) = Log::open(path.as_ref())?;
        Ok(Store { log, index })
    }

    /// Records that `key` exists, with no associated value.
    pub fn set(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.log.append(&row::encode_key_row(OP_SET, key))?;
        self.index.insert(key.as_bytes().to_vec(), None);
        Ok(())
    }

    /// Removes `key`, whatever its prior state. Removing an absent key
    /// still appends a row.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.log.append(&row::encode_key_row(OP_DELETE, key))?;
        self.index.remove(key.as_bytes());
        Ok(())
    }

    /// Associates `value` with `key`.
    ///
    /// The value may be empty and may contain any bytes, separators and
    /// newlines included; only keys are validated.
    pub fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let (encoded, value_start) = row::encode_put_row(key, value);
        let offset = self.log.cursor() + value_start as u64;

        self.log.append(&encoded)?;
        self.index.insert(
            key.as_bytes().to_vec(),
            Some(ValueRef {
                offset,
                len: value.len(),
            }),
        );
        Ok(())
    }

    /// Reads the current value of `key` from the log file.
    ///
    /// An absent key is a clean `Ok(None)`, not an error. A key recorded by
    /// [`Store::set`] and never [`Store::put`] has no bytes to read back;
    /// that case is reported as [`StoreError::NoValue`], distinct from both
    /// absence and a successful read.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.index.get(key.as_bytes()) {
            None => Ok(None),
            Some(None) => Err(StoreError::NoValue(key.to_string())),
            Some(Some(value_ref)) => {
                let value = self.log.read_at(value_ref.offset, value_ref.len)?;
                Ok(Some(value))
            }
        }
    }

    /// Like [`Store::get`], but absence is a [`StoreError::KeyNotFound`]
    /// error instead of a clean empty result. Every other outcome passes
    /// through unchanged.
    pub fn find(&self, key: &str) -> Result<Vec<u8>> {
        match self.get(key)? {
            Some(value) => Ok(value),
            None => Err(StoreError::KeyNotFound(key.to_string())),
        }
    }

    /// Whether `key` currently appears in the index. Answered without any
    /// file I/O.
    pub fn exists(&self, key: &str) -> bool {
        self.index.contains_key(key.as_bytes())
    }

    /// Offset at which the next row will be appended; always equals the
    /// log file's current length.
    pub fn write_cursor(&self) -> u64 {
        self.log.cursor()
    }
}

/// Rejects keys the codec must not encode. Applied before any row is
/// built; values are never inspected.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::EmptyKey);
    }
    if key.len() > MAX_KEY_LEN {
        return Err(StoreError::KeyTooLarge {
            len: key.len(),
            max: MAX_KEY_LEN,
        });
    }
    Ok(())
}
