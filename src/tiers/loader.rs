//! Load tier definitions from TOML or JSON files

use crate::core::error::Result;
use crate::tiers::{Tier, TierRecord, TierTable};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TierFile {
    #[serde(default)]
    tier: Vec<TierRecord>,
}

/// Load tiers from a file
///
/// `.json` files hold an array of tier records; anything else is read as
/// TOML with one `[[tier]]` table per tier.
pub fn load_tiers(path: &Path) -> Result<TierTable> {
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let table = if is_json {
        parse_tiers_json(&content)?
    } else {
        parse_tiers_toml(&content)?
    };

    tracing::info!("Loaded {} tiers from {:?}", table.len(), path);
    Ok(table)
}

pub fn parse_tiers_toml(content: &str) -> Result<TierTable> {
    let file: TierFile = toml::from_str(content)?;
    validate_records(file.tier)
}

pub fn parse_tiers_json(content: &str) -> Result<TierTable> {
    let records: Vec<TierRecord> = serde_json::from_str(content)?;
    validate_records(records)
}

fn validate_records(records: Vec<TierRecord>) -> Result<TierTable> {
    records
        .into_iter()
        .map(Tier::try_from)
        .collect::<Result<TierTable>>()
}
