//! Property tests for tier resolution

use proptest::prelude::*;
use tier_progress::progress::{current_tier, resolve, try_resolve, TierLabel};
use tier_progress::tiers::Tier;

fn tier_set() -> impl Strategy<Value = Vec<Tier>> {
    prop::collection::vec((0i64..20_000, "[A-Z][a-z]{2,6}"), 1..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(min, name)| Tier::new(name, min))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_fields_stay_in_range(tiers in tier_set(), exp in -1_000i64..30_000) {
        let result = resolve(exp, &tiers);
        prop_assert!(result.percent == -1 || (0..=100).contains(&result.percent));
        prop_assert!(result.next_needed == -1 || result.next_needed >= 0);
        prop_assert_eq!(result.exp_total, exp);
        prop_assert!(!result.is_failure());
    }

    #[test]
    fn prop_empty_tiers_echo_total(exp in any::<i64>()) {
        let result = resolve(exp, &[]);
        prop_assert_eq!(result.tier_label, TierLabel::SENTINEL);
        prop_assert_eq!(result.exp_total, exp);
        prop_assert_eq!(result.percent, -1);
        prop_assert_eq!(result.next_tier_label, "");
        prop_assert_eq!(result.next_needed, -1);
    }

    #[test]
    fn prop_threshold_is_inclusive(tiers in tier_set(), pick in any::<prop::sample::Index>()) {
        let exp = tiers[pick.index(tiers.len())].min_exp_required;
        let current = current_tier(&tiers, exp).unwrap();
        prop_assert_eq!(current.min_exp_required, exp);
    }

    #[test]
    fn prop_top_of_ladder(tiers in tier_set(), extra in 0i64..5_000) {
        let top = tiers.iter().map(|t| t.min_exp_required).max().unwrap();
        let result = resolve(top + extra, &tiers);
        prop_assert_eq!(result.next_tier_label, "-");
        prop_assert_eq!(result.percent, 100);
        prop_assert_eq!(result.next_needed, 0);
    }

    #[test]
    fn prop_percent_monotonic_within_tier(tiers in tier_set(), a in 0i64..20_000, b in 0i64..20_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let same_tier = current_tier(&tiers, lo) == current_tier(&tiers, hi);
        prop_assume!(same_tier);
        prop_assert!(resolve(lo, &tiers).percent <= resolve(hi, &tiers).percent);
    }

    #[test]
    fn prop_order_of_distinct_tiers_does_not_matter(tiers in tier_set(), exp in 0i64..25_000) {
        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<Tier> = tiers
            .into_iter()
            .filter(|t| seen.insert(t.min_exp_required))
            .collect();
        let mut reversed = distinct.clone();
        reversed.reverse();
        prop_assert_eq!(try_resolve(exp, &distinct).unwrap(), try_resolve(exp, &reversed).unwrap());
    }
}
