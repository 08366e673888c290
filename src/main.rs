//! Tier Progress - Entry Point
//!
//! Resolves tier progress for a single experience value or for every user
//! in a ledger file, and prints the resulting attributes.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tier_progress::attributes::{AttributeMap, UserAttributes};
use tier_progress::core::config::{set_config, ProgressConfig};
use tier_progress::core::error::Result;
use tier_progress::core::types::{Exp, UserId};
use tier_progress::progress::ProgressResult;
use tier_progress::tiers::TierFileStore;
use tier_progress::users::{load_ledger, ExperienceLedger};
use tracing_subscriber::EnvFilter;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Tier Progress - resolve experience tiers for user profiles
#[derive(Parser, Debug)]
#[command(name = "tier-progress")]
#[command(about = "Resolve experience tier progress and print profile attributes")]
struct Args {
    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tier definitions file, overriding the config
    #[arg(long)]
    tiers: Option<PathBuf>,

    /// Resolve a single experience total
    #[arg(long, allow_negative_numbers = true, conflicts_with = "users")]
    exp: Option<Exp>,

    /// Ledger of users to resolve (TOML `[[user]]` tables)
    #[arg(long)]
    users: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ProgressConfig::load(path)?,
        None => ProgressConfig::new(),
    };
    if let Some(tiers) = &args.tiers {
        config.tiers_path = tiers.clone();
    }

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Tier Progress starting...");

    // Tier file problems surface per user as failure rows
    let store = TierFileStore::new(config.tiers_path.clone());
    let parallel_threshold = config.parallel_threshold;
    if set_config(config).is_err() {
        tracing::warn!("Global config already set; keeping the existing one");
    }

    match &args.users {
        Some(path) => {
            let ledger = load_ledger(path)?;
            let mut batch: Vec<(UserId, AttributeMap)> = ledger
                .users()
                .iter()
                .map(|&user| (user, AttributeMap::new()))
                .collect();
            let attributes =
                UserAttributes::new(store, ledger).with_parallel_threshold(parallel_threshold);
            attributes.attach_many(&mut batch);
            print_batch(&batch, args.format)?;
        }
        None => {
            let user = UserId::new(0);
            let mut ledger = ExperienceLedger::new();
            if let Some(exp) = args.exp {
                ledger.set(user, exp);
            }
            let attributes =
                UserAttributes::new(store, ledger).with_parallel_threshold(parallel_threshold);
            print_result(&attributes.progress_for(user), args.format)?;
        }
    }

    Ok(())
}

fn print_result(result: &ProgressResult, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{}", describe(result)),
        Format::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn print_batch(batch: &[(UserId, AttributeMap)], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for (user, attributes) in batch {
                println!("{:>8}  {}", user.to_string(), describe_attributes(attributes));
            }
        }
        Format::Json => {
            let rows: Vec<_> = batch
                .iter()
                .map(|(user, attributes)| {
                    let mut row = attributes.clone();
                    row.insert("id".into(), user.0.into());
                    row
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn describe(result: &ProgressResult) -> String {
    if result.is_failure() {
        return "error resolving tier".to_string();
    }
    if result.is_unconfigured() {
        return format!("{} exp, no tiers configured", result.exp_total);
    }
    let level = result.tier_label.name().unwrap_or("(none)");
    if result.is_top_of_ladder() {
        format!("{} at {} exp, top tier reached", level, result.exp_total)
    } else {
        format!(
            "{} at {} exp, {}% to {} ({} more)",
            level, result.exp_total, result.percent, result.next_tier_label, result.next_needed
        )
    }
}

fn describe_attributes(attributes: &AttributeMap) -> String {
    match serde_json::from_value::<ProgressResult>(serde_json::Value::Object(attributes.clone())) {
        Ok(result) => describe(&result),
        Err(_) => "incomplete attributes".to_string(),
    }
}
