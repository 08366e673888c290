//! Integration tests for tier resolution and the sentinel protocol

use serde_json::json;
use tier_progress::progress::{resolve, ProgressResult, TierLabel};
use tier_progress::tiers::{parse_tiers_toml, Tier};

fn bronze_silver_gold() -> Vec<Tier> {
    vec![
        Tier::new("Bronze", 0),
        Tier::new("Silver", 100),
        Tier::new("Gold", 500),
    ]
}

fn as_json(result: &ProgressResult) -> serde_json::Value {
    serde_json::to_value(result).unwrap()
}

/// Scenario 1: halfway through the first tier
#[test]
fn test_halfway_through_bronze() {
    let result = resolve(50, &bronze_silver_gold());
    assert_eq!(
        as_json(&result),
        json!({"expLevel": "Bronze", "expTotal": 50, "expPercent": 50, "expNext": "Silver", "expNextNeed": 50})
    );
}

/// Scenarios 2 and 3: at and beyond the top threshold
#[test]
fn test_top_of_ladder() {
    for exp in [500, 700] {
        let result = resolve(exp, &bronze_silver_gold());
        assert_eq!(
            as_json(&result),
            json!({"expLevel": "Gold", "expTotal": exp, "expPercent": 100, "expNext": "-", "expNextNeed": 0})
        );
    }
}

/// Scenario 4: nothing configured
#[test]
fn test_unconfigured_row() {
    let result = resolve(10, &[]);
    assert_eq!(
        as_json(&result),
        json!({"expLevel": -1, "expTotal": 10, "expPercent": -1, "expNext": "", "expNextNeed": -1})
    );
}

/// Scenario 5: a single tier starting at zero
#[test]
fn test_single_tier() {
    let result = resolve(0, &[Tier::new("A", 0)]);
    assert_eq!(
        as_json(&result),
        json!({"expLevel": "A", "expTotal": 0, "expPercent": 100, "expNext": "-", "expNextNeed": 0})
    );
}

#[test]
fn test_failure_row() {
    let tiers = vec![Tier::new("Floor", i64::MIN), Tier::new("Ceiling", i64::MAX)];
    let result = resolve(0, &tiers);
    assert_eq!(
        as_json(&result),
        json!({"expLevel": -1, "expTotal": -1, "expPercent": -1, "expNext": "", "expNextNeed": -1})
    );
}

#[test]
fn test_below_lowest_row() {
    let tiers = vec![Tier::new("Silver", 100), Tier::new("Gold", 500)];
    let result = resolve(60, &tiers);
    assert_eq!(result.tier_label, TierLabel::NONE);
    assert_eq!(
        as_json(&result),
        json!({"expLevel": 0, "expTotal": 60, "expPercent": 60, "expNext": "Silver", "expNextNeed": 40})
    );
}

#[test]
fn test_zero_placeholder_distinct_from_sentinel() {
    let below = resolve(-5, &[Tier::new("Silver", 100)]);
    let unconfigured = resolve(-5, &[]);
    assert_ne!(below.tier_label, unconfigured.tier_label);
    assert!(!below.is_unconfigured());
    assert!(unconfigured.is_unconfigured());
}

#[test]
fn test_walk_up_the_ladder() {
    let tiers = bronze_silver_gold();
    let mut last_percent = -1;
    for exp in 100..500 {
        let result = resolve(exp, &tiers);
        assert_eq!(result.tier_label, TierLabel::from("Silver"));
        assert_eq!(result.next_tier_label, "Gold");
        assert_eq!(result.next_needed, 500 - exp);
        assert!(result.percent >= last_percent);
        last_percent = result.percent;
    }
    assert_eq!(last_percent, 100);
}

#[test]
fn test_resolve_loaded_tiers() {
    let table = parse_tiers_toml(
        r#"
        [[tier]]
        name = "Gold"
        min_exp_required = "500"

        [[tier]]
        name = "Bronze"
        min_exp_required = 0

        [[tier]]
        name = "Silver"
        min_exp_required = 100
        "#,
    )
    .unwrap();

    let result = resolve(400, table.tiers());
    assert_eq!(result.tier_label, TierLabel::from("Silver"));
    assert_eq!(result.percent, 75);
    assert_eq!(result.next_needed, 100);
}
