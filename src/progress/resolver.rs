//! Tier resolution
//!
//! Turns an experience total and a set of tiers into the current tier,
//! progress through it, and what it takes to reach the next one. Tiers may
//! arrive in any order; ties on a threshold go to the tier listed first.

use crate::core::error::{Result, TierError};
use crate::core::types::Exp;
use crate::progress::result::{ProgressResult, TierLabel, TOP_OF_LADDER};
use crate::tiers::Tier;

/// Resolve progress, collapsing any failure into the failure sentinel
pub fn resolve(exp_total: Exp, tiers: &[Tier]) -> ProgressResult {
    match try_resolve(exp_total, tiers) {
        Ok(result) => {
            tracing::debug!(
                "Resolved exp {} against {} tiers: level={:?} percent={} next={:?} need={}",
                exp_total,
                tiers.len(),
                result.tier_label,
                result.percent,
                result.next_tier_label,
                result.next_needed
            );
            result
        }
        Err(e) => {
            tracing::warn!("Tier resolution failed for exp {}: {}", exp_total, e);
            ProgressResult::failure()
        }
    }
}

/// Resolve progress, reporting failures as errors
pub fn try_resolve(exp_total: Exp, tiers: &[Tier]) -> Result<ProgressResult> {
    if tiers.is_empty() {
        return Ok(ProgressResult::unconfigured(exp_total));
    }

    let current = current_tier(tiers, exp_total);
    let tier_label = current
        .map(|tier| TierLabel::Name(tier.name.clone()))
        .unwrap_or(TierLabel::NONE);

    let mut percent = 0;
    let mut next_tier_label = String::new();
    let mut next_needed = 0;

    if let Some(next) = next_tier(tiers, exp_total) {
        let lower = current.map_or(0, |tier| tier.min_exp_required);
        let upper = next.min_exp_required;
        let span = upper
            .checked_sub(lower)
            .ok_or(TierError::Overflow("tier span"))?;

        // Equal or inverted thresholds show a full bar
        percent = if span > 0 {
            percent_within(exp_total, lower, span)?
        } else {
            100
        };

        next_tier_label = next.name.clone();
        next_needed = remaining(upper, exp_total)?;
    } else {
        if let Some(top) = top_tier(tiers) {
            next_tier_label = top.name.clone();
            next_needed = remaining(top.min_exp_required, exp_total)?;
        }
        if next_needed == 0 {
            next_tier_label = TOP_OF_LADDER.to_string();
            percent = 100;
        }
    }

    Ok(ProgressResult {
        tier_label,
        exp_total,
        percent,
        next_tier_label,
        next_needed,
    })
}

/// Highest threshold at or below `exp`
pub fn current_tier(tiers: &[Tier], exp: Exp) -> Option<&Tier> {
    tiers
        .iter()
        .filter(|tier| tier.min_exp_required <= exp)
        .reduce(|best, tier| {
            if tier.min_exp_required > best.min_exp_required {
                tier
            } else {
                best
            }
        })
}

/// Lowest threshold strictly above `exp`
pub fn next_tier(tiers: &[Tier], exp: Exp) -> Option<&Tier> {
    tiers
        .iter()
        .filter(|tier| tier.min_exp_required > exp)
        .reduce(|best, tier| {
            if tier.min_exp_required < best.min_exp_required {
                tier
            } else {
                best
            }
        })
}

/// Highest threshold overall
pub fn top_tier(tiers: &[Tier]) -> Option<&Tier> {
    tiers.iter().reduce(|best, tier| {
        if tier.min_exp_required > best.min_exp_required {
            tier
        } else {
            best
        }
    })
}

/// Rounded percentage of `exp` through `[lower, lower + span)`, clamped to 0..=100
///
/// `span` must be positive.
fn percent_within(exp: Exp, lower: Exp, span: Exp) -> Result<i32> {
    let progressed = exp
        .checked_sub(lower)
        .ok_or(TierError::Overflow("progress within tier"))?;
    let ratio = (progressed as f64 / span as f64).clamp(0.0, 1.0);
    Ok((ratio * 100.0).round() as i32)
}

fn remaining(threshold: Exp, exp: Exp) -> Result<Exp> {
    let need = threshold
        .checked_sub(exp)
        .ok_or(TierError::Overflow("experience remaining"))?;
    Ok(need.max(0))
}
