//! Tier Progress - experience tiers and progress attributes for user profiles

pub mod attributes;
pub mod core;
pub mod progress;
pub mod tiers;
pub mod users;
