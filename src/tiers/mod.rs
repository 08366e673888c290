//! Tier definitions and the stores that supply them

pub mod loader;
pub mod store;
pub mod tier;

pub use loader::{load_tiers, parse_tiers_json, parse_tiers_toml};
pub use store::{TierFileStore, TierStore, TierTable};
pub use tier::{RawThreshold, Tier, TierRecord};
