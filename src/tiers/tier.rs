//! Tier definitions

use crate::core::error::{Result, TierError};
use crate::core::types::Exp;
use serde::{Deserialize, Serialize};

/// A named progression level gated by a minimum experience threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Display name (e.g., "Bronze", "Silver")
    pub name: String,
    /// Minimum accumulated experience required to occupy this tier
    pub min_exp_required: Exp,
}

impl Tier {
    pub fn new(name: impl Into<String>, min_exp_required: Exp) -> Self {
        Self {
            name: name.into(),
            min_exp_required,
        }
    }
}

/// Threshold as it may appear in hand-edited data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawThreshold {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Unvalidated tier entry straight from a data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecord {
    pub name: String,
    pub min_exp_required: RawThreshold,
}

impl RawThreshold {
    /// Integer value of this threshold, if it has one
    pub fn to_exp(&self) -> std::result::Result<Exp, String> {
        match self {
            RawThreshold::Int(v) => Ok(*v),
            RawThreshold::Float(f) => {
                if !f.is_finite() || f.fract() != 0.0 {
                    return Err(format!("threshold {} is not an integer", f));
                }
                if *f < i64::MIN as f64 || *f >= i64::MAX as f64 {
                    return Err(format!("threshold {} is out of range", f));
                }
                Ok(*f as i64)
            }
            RawThreshold::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("threshold '{}' is not an integer: {}", s, e)),
        }
    }
}

impl TryFrom<TierRecord> for Tier {
    type Error = TierError;

    fn try_from(record: TierRecord) -> Result<Self> {
        let min_exp_required = record
            .min_exp_required
            .to_exp()
            .map_err(|reason| TierError::MalformedTier {
                name: record.name.clone(),
                reason,
            })?;
        Ok(Tier {
            name: record.name,
            min_exp_required,
        })
    }
}
