//! Tier storage seam

use crate::core::error::Result;
use crate::tiers::{load_tiers, Tier};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read-only source of the currently configured tiers
///
/// Implementations return the full collection in any order; resolution
/// does its own threshold selection.
pub trait TierStore: Send + Sync {
    fn list_tiers(&self) -> Result<Vec<Tier>>;
}

/// In-memory tier collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable {
    #[serde(default, rename = "tier")]
    tiers: Vec<Tier>,
}

impl TierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiers(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    pub fn push(&mut self, tier: Tier) {
        self.tiers.push(tier);
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn into_tiers(self) -> Vec<Tier> {
        self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl TierStore for TierTable {
    fn list_tiers(&self) -> Result<Vec<Tier>> {
        Ok(self.tiers.clone())
    }
}

impl FromIterator<Tier> for TierTable {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        Self::from_tiers(iter.into_iter().collect())
    }
}

/// Tier file read afresh on every listing
///
/// A missing or malformed file surfaces as an error from `list_tiers`,
/// which callers turn into the failure row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFileStore {
    path: PathBuf,
}

impl TierFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TierStore for TierFileStore {
    fn list_tiers(&self) -> Result<Vec<Tier>> {
        load_tiers(&self.path).map(TierTable::into_tiers)
    }
}
