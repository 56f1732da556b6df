// src/domain/pagination/limit.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("limit must be between {min} and {max}, got {value}", min = PageLimit::MIN, max = PageLimit::MAX)]
pub struct LimitOutOfRange {
    pub value: u64,
}

/// Page size requested from the store. Always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u32")]
pub struct PageLimit(u32);

impl PageLimit {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 40;

    pub fn new(value: u64) -> Result<Self, LimitOutOfRange> {
        u32::try_from(value)
            .ok()
            .filter(|limit| (Self::MIN..=Self::MAX).contains(limit))
            .map(Self)
            .ok_or(LimitOutOfRange { value })
    }

    /// Compile-time constructor for per-listing defaults.
    pub const fn from_const(value: u32) -> Self {
        assert!(value >= Self::MIN && value <= Self::MAX, "page limit out of range");
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl TryFrom<u64> for PageLimit {
    type Error = LimitOutOfRange;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageLimit> for u32 {
    fn from(value: PageLimit) -> Self {
        value.0
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
