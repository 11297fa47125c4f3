//! Embedded Append-Only Key-Value Store
//!
//! This library provides a minimal key-value store backed by a single
//! append-only log file. Opening a store replays the log from its first
//! byte to rebuild an in-memory index; after that, point reads are served
//! with one random-access file read and point writes are appended to the
//! tail of the log.
//!
//! # Modules
//!
//! - `store`: Entry point to the store. Open a log file and serve reads and writes against it.
//! - `error`: The unified error type returned by every fallible operation.
//! - `row`: Encoding and decoding of the three log row kinds.
//! - `log`: The log file handles, replay, appends, and random-access reads.
//! - `index`: The in-memory mapping from key to value location.
//!
//! # Example
//!
//! ```rust
//! use logdb::Store;
//!
//! fn main() -> logdb::Result<()> {
//!     let mut store = Store::open("./lib_example.db")?;
//!
//!     store.put("fruit", b"apple")?;
//!     assert_eq!(store.get("fruit")?, Some(b"apple".to_vec()));
//!
//!     store.delete("fruit")?;
//!     assert!(!store.exists("fruit"));
//! #   std::fs::remove_file("./lib_example.db").ok();
//!     Ok(())
//! }
//! ```
//!
//! # On-disk format
//!
//! The log file is a sequence of rows, one per mutating operation, each
//! terminated by a newline. Lengths are decimal ASCII and payloads are
//! framed by those lengths rather than by delimiters, so values may
//! contain any bytes. See the `row` module for the exact layouts.

/// Entry point to the store.
pub mod store;

/// Errors returned by store operations.
pub mod error;

mod index;
mod log;
mod row;




pub use error::{Result, StoreError};
pub use store::{Store, MAX_KEY_LEN};
