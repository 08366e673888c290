//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Accumulated experience value. Signed so that sentinels and negative
/// totals pass through unchanged.
pub type Exp = i64;

/// Unique identifier for users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
