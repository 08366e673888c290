//! Attach tier progress to outward user attributes
//!
//! Combines a tier store and an experience source, resolves progress for
//! each user, and merges the `exp*` fields into that user's attribute map.
//! Keys already present in the map are left alone.

use crate::core::config::config;
use crate::core::error::Result;
use crate::core::types::UserId;
use crate::progress::{resolve, try_resolve, ProgressResult};
use crate::tiers::{Tier, TierStore};
use crate::users::ExperienceSource;
use rayon::prelude::*;
use serde_json::{Map, Value};

/// Outward attribute map for one user
pub type AttributeMap = Map<String, Value>;

/// Merge progress fields into `attributes` without overwriting existing keys
pub fn merge_progress(attributes: &mut AttributeMap, result: ProgressResult) {
    for (key, value) in result.into_attributes() {
        attributes.entry(key).or_insert(value);
    }
}

/// Progress attributes backed by a tier store and an experience source
#[derive(Debug, Clone)]
pub struct UserAttributes<S, E> {
    tiers: S,
    experience: E,
    parallel_threshold: usize,
}

impl<S: TierStore, E: ExperienceSource> UserAttributes<S, E> {
    /// Uses the global config's parallel threshold
    pub fn new(tiers: S, experience: E) -> Self {
        Self {
            tiers,
            experience,
            parallel_threshold: config().parallel_threshold,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Progress for one user, reporting collaborator failures as errors
    pub fn try_progress_for(&self, user: UserId) -> Result<ProgressResult> {
        let exp_total = self.experience.experience_of(user)?.unwrap_or(0);
        let tiers = self.tiers.list_tiers()?;
        try_resolve(exp_total, &tiers)
    }

    /// Progress for one user; never fails
    pub fn progress_for(&self, user: UserId) -> ProgressResult {
        self.try_progress_for(user).unwrap_or_else(|e| {
            tracing::warn!("Progress unavailable for user {}: {}", user, e);
            ProgressResult::failure()
        })
    }

    /// Merge one user's progress into their attributes
    pub fn attach(&self, user: UserId, attributes: &mut AttributeMap) {
        merge_progress(attributes, self.progress_for(user));
    }

    /// Fresh attribute map holding only the progress fields
    pub fn attributes_for(&self, user: UserId) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        self.attach(user, &mut attributes);
        attributes
    }

    /// Merge progress into a batch of users against one tier snapshot
    ///
    /// Runs in parallel once the batch reaches the parallel threshold.
    pub fn attach_many(&self, batch: &mut [(UserId, AttributeMap)]) {
        let tiers = match self.tiers.list_tiers() {
            Ok(tiers) => Some(tiers),
            Err(e) => {
                tracing::warn!("Tier store unavailable for batch of {}: {}", batch.len(), e);
                None
            }
        };

        let attach_one = |entry: &mut (UserId, AttributeMap)| {
            let result = match &tiers {
                Some(tiers) => self.progress_against(entry.0, tiers),
                None => ProgressResult::failure(),
            };
            merge_progress(&mut entry.1, result);
        };

        if batch.len() >= self.parallel_threshold {
            tracing::debug!("Attaching progress for {} users in parallel", batch.len());
            batch.par_iter_mut().for_each(attach_one);
        } else {
            batch.iter_mut().for_each(attach_one);
        }
    }

    fn progress_against(&self, user: UserId, tiers: &[Tier]) -> ProgressResult {
        match self.experience.experience_of(user) {
            Ok(exp) => resolve(exp.unwrap_or(0), tiers),
            Err(e) => {
                tracing::warn!("Progress unavailable for user {}: {}", user, e);
                ProgressResult::failure()
            }
        }
    }
}
