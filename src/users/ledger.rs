//! In-memory experience ledger

use crate::core::error::Result;
use crate::core::types::{Exp, UserId};
use crate::users::ExperienceSource;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[user]]` table in a ledger file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: UserId,
    /// Absent means no experience recorded
    #[serde(default)]
    pub exp: Option<Exp>,
}

#[derive(Debug, Default, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    user: Vec<UserEntry>,
}

/// Experience totals keyed by user
#[derive(Debug, Clone, Default)]
pub struct ExperienceLedger {
    totals: AHashMap<UserId, Exp>,
    /// Every user the ledger knows about, in insertion order
    users: Vec<UserId>,
    known: AHashSet<UserId>,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = UserEntry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.register(entry.id);
            if let Some(exp) = entry.exp {
                ledger.totals.insert(entry.id, exp);
            }
        }
        ledger
    }

    pub fn set(&mut self, user: UserId, exp: Exp) {
        self.register(user);
        self.totals.insert(user, exp);
    }

    pub fn get(&self, user: UserId) -> Option<Exp> {
        self.totals.get(&user).copied()
    }

    /// Forget a user's total. The user stays known, with no experience.
    pub fn remove(&mut self, user: UserId) -> Option<Exp> {
        self.totals.remove(&user)
    }

    /// Known users, including those without a total
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn register(&mut self, user: UserId) {
        if self.known.insert(user) {
            self.users.push(user);
        }
    }
}

impl ExperienceSource for ExperienceLedger {
    fn experience_of(&self, user: UserId) -> Result<Option<Exp>> {
        Ok(self.get(user))
    }
}

/// Load a ledger from a TOML file of `[[user]]` tables
pub fn load_ledger(path: &Path) -> Result<ExperienceLedger> {
    let content = fs::read_to_string(path)?;
    let file: LedgerFile = toml::from_str(&content)?;
    let ledger = ExperienceLedger::from_entries(file.user);
    tracing::info!("Loaded {} users from {:?}", ledger.len(), path);
    Ok(ledger)
}
