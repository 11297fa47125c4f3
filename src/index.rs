use std::collections::HashMap;

/// Location of a value's bytes within the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueRef {
    /// Absolute offset of the value's first byte.
    pub(crate) offset: u64,
    /// Exact byte length of the value.
    pub(crate) len: usize,
}

/// In-memory key index, rebuilt from the log at open time and kept current
/// by every subsequent write.
///
/// A key maps to `None` when it was set without a value, so lookups
/// distinguish absent, present-without-value, and present-with-value.
pub(crate) type Index = HashMap<Vec<u8>, Option<ValueRef>>;
