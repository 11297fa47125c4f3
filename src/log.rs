//! Append-only log file access.
//!
//! Owns the file handles and the write cursor, replays existing rows into
//! a fresh index at open time, and serves the append and random-access
//! read paths for everything above it.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::Result;
use crate::index::{Index, ValueRef};
use crate::row::{Row, RowReader};

/// A single append-only log file.
///
/// Two independent handles are kept: one strictly for reads, one opened
/// append-only for writes. `cursor` always equals the file's current
/// length, so every appended row lands exactly at end-of-file.
#[derive(Debug)]
pub(crate) struct Log {
    reader: File,
    writer: File,
    cursor: u64,
}

impl Log {
    /// Opens the log file at `path`, creating it if it does not exist, and
    /// replays its rows into a fresh index.
    ///
    /// Any decode failure aborts the open; the store never comes up on a
    /// partially readable file.
    pub(crate) fn open(path: &Path) -> Result<(Self, Index)> {
        let writer = OpenOptions::new().append(true).create(true).open(path)?;
        let reader = OpenOptions::new().read(true).open(path)?;

        let mut log = Log {
            reader,
            writer,
            cursor: 0,
        };
        let index = log.replay()?;

        Ok((log, index))
    }

    /// Scans every row from offset 0, applying each to a fresh index.
    ///
    /// Later rows override earlier ones for the same key. The total number
    /// of bytes consumed becomes the write cursor, so the next append
    /// continues exactly after the last row.
    fn replay(&mut self) -> Result<Index> {
        let mut index = Index::new();
        let mut rows = RowReader::new(BufReader::new(&self.reader));

        for row in rows.by_ref() {
            match row? {
                Row::Set { key } => {
                    index.insert(key, None);
                }
                Row::Delete { key } => {
                    index.remove(&key);
                }
                Row::Put { key, offset, len } => {
                    index.insert(key, Some(ValueRef { offset, len }));
                }
            }
        }
        self.cursor = rows.cursor();

        Ok(index)
    }

    /// Appends one encoded row and advances the cursor by its length.
    pub(crate) fn append(&mut self, row: &[u8]) -> Result<()> {
        self.writer.write_all(row)?;
        self.cursor += row.len() as u64;
        Ok(())
    }

    /// Reads exactly `len` bytes starting at `offset`.
    pub(crate) fn read_at(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        let mut reader = &self.reader;
        reader.seek(SeekFrom::Start(offset))?;

        let mut value = vec![0u8; len];
        reader.read_exact(&mut value)?;
        Ok(value)
    }

    /// Offset of the next append; always the current file length.
    pub(crate) fn cursor(&self) -> u64 {
        self.cursor
    }
}
