use crate::probe::error::ProbeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FIXED_BUFFER_CAPACITY: usize = 20;

/// What to do when the copy source is longer than the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Reject,
    Truncate,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(OverflowPolicy::Reject),
            "truncate" => Ok(OverflowPolicy::Truncate),
            other => Err(format!(
                "unknown overflow policy \"{other}\" (expected reject or truncate)"
            )),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Reject => f.write_str("reject"),
            OverflowPolicy::Truncate => f.write_str("truncate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub truncated: bool,
}

/// Fixed-capacity copy destination. Writes never go past `FIXED_BUFFER_CAPACITY`.
#[derive(Clone)]
pub struct FixedBuffer {
    bytes: [u8; FIXED_BUFFER_CAPACITY],
    len: usize,
}

impl Default for FixedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0u8; FIXED_BUFFER_CAPACITY],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Replace the buffer contents with `src`, bounded by the buffer capacity.
    pub fn copy_from(
        &mut self,
        src: &[u8],
        policy: OverflowPolicy,
    ) -> Result<CopyReport, ProbeError> {
        let capacity = self.capacity();
        let truncated = src.len() > capacity;
        if truncated && policy == OverflowPolicy::Reject {
            return Err(ProbeError::BufferOverflow {
                len: src.len(),
                capacity,
            });
        }

        let n = src.len().min(capacity);
        self.bytes[..n].copy_from_slice(&src[..n]);
        self.bytes[n..].fill(0);
        self.len = n;
        Ok(CopyReport {
            copied: n,
            truncated,
        })
    }

    pub fn filled(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Filled bytes up to, not including, the first NUL.
    pub fn as_c_str_bytes(&self) -> &[u8] {
        let filled = self.filled();
        match filled.iter().position(|&b| b == 0) {
            Some(end) => &filled[..end],
            None => filled,
        }
    }
}

impl fmt::Debug for FixedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
