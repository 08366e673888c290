//! Progress values as handed to the attribute layer
//!
//! The sentinels here are a wire contract with downstream clients:
//! `-1`, `0`, `"-"` and `""` each mean something different and must be
//! emitted literally.

use crate::core::types::Exp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric sentinel for "unconfigured" and "failed"
pub const SENTINEL: i64 = -1;

/// `expNext` value once the top tier has been reached
pub const TOP_OF_LADDER: &str = "-";

pub const ATTR_LEVEL: &str = "expLevel";
pub const ATTR_TOTAL: &str = "expTotal";
pub const ATTR_PERCENT: &str = "expPercent";
pub const ATTR_NEXT: &str = "expNext";
pub const ATTR_NEXT_NEED: &str = "expNextNeed";

/// Current tier as displayed: a tier name, or a bare number
///
/// `Code(0)` means the user is below every threshold, `Code(-1)` means
/// no tiers are configured or resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierLabel {
    Code(i64),
    Name(String),
}

impl TierLabel {
    /// Below the lowest threshold
    pub const NONE: TierLabel = TierLabel::Code(0);
    /// Unconfigured or failed
    pub const SENTINEL: TierLabel = TierLabel::Code(SENTINEL);

    pub fn name(&self) -> Option<&str> {
        match self {
            TierLabel::Name(name) => Some(name),
            TierLabel::Code(_) => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == TierLabel::SENTINEL
    }
}

impl From<&str> for TierLabel {
    fn from(name: &str) -> Self {
        TierLabel::Name(name.to_string())
    }
}

/// Resolved tier progress for one experience total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResult {
    #[serde(rename = "expLevel")]
    pub tier_label: TierLabel,
    #[serde(rename = "expTotal")]
    pub exp_total: Exp,
    /// 0..=100, or -1
    #[serde(rename = "expPercent")]
    pub percent: i32,
    #[serde(rename = "expNext")]
    pub next_tier_label: String,
    /// >= 0, or -1
    #[serde(rename = "expNextNeed")]
    pub next_needed: Exp,
}

impl ProgressResult {
    /// No tiers exist. The experience total is still reported.
    pub fn unconfigured(exp_total: Exp) -> Self {
        Self {
            tier_label: TierLabel::SENTINEL,
            exp_total,
            percent: SENTINEL as i32,
            next_tier_label: String::new(),
            next_needed: SENTINEL,
        }
    }

    /// Resolution failed. Every numeric field, including the total, is -1.
    pub fn failure() -> Self {
        Self {
            exp_total: SENTINEL,
            ..Self::unconfigured(SENTINEL)
        }
    }

    pub fn is_failure(&self) -> bool {
        *self == Self::failure()
    }

    pub fn is_unconfigured(&self) -> bool {
        self.tier_label.is_sentinel() && self.exp_total != SENTINEL
    }

    pub fn is_top_of_ladder(&self) -> bool {
        self.next_tier_label == TOP_OF_LADDER
    }

    /// The five attribute entries, keyed by their outward names
    pub fn into_attributes(self) -> [(&'static str, Value); 5] {
        let level = match self.tier_label {
            TierLabel::Code(code) => Value::from(code),
            TierLabel::Name(name) => Value::from(name),
        };
        [
            (ATTR_LEVEL, level),
            (ATTR_TOTAL, Value::from(self.exp_total)),
            (ATTR_PERCENT, Value::from(self.percent)),
            (ATTR_NEXT, Value::from(self.next_tier_label)),
            (ATTR_NEXT_NEED, Value::from(self.next_needed)),
        ]
    }
}
