//! Per-user experience totals

pub mod ledger;

pub use ledger::{load_ledger, ExperienceLedger, UserEntry};

use crate::core::error::Result;
use crate::core::types::{Exp, UserId};

/// Read-only source of a user's experience total
///
/// `Ok(None)` means the user has no recorded experience and counts as 0.
pub trait ExperienceSource: Send + Sync {
    fn experience_of(&self, user: UserId) -> Result<Option<Exp>>;
}
