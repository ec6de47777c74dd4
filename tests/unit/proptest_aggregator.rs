//! Property-based tests for aggregation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use hostaudit::core::models::{Condition, FILE_EXISTS, FILE_MISSING, Observation, Status};
use hostaudit::core::services::{evaluate_rule, evaluate_subrule};
use proptest::prelude::*;

use crate::common::RuleBuilder;

fn observations(flags: &[bool]) -> Vec<Observation> {
    flags
        .iter()
        .enumerate()
        .map(|(i, exists)| {
            Observation::ok(
                format!("f:/p{i} -> exists"),
                if *exists { FILE_EXISTS } else { FILE_MISSING },
            )
        })
        .collect()
}

fn condition() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("all"), Just("any"), Just("none"), Just("bogus")]
}

proptest! {
    /// Status depends only on counts, not on sub-rule order
    #[test]
    fn order_does_not_matter(flags in prop::collection::vec(any::<bool>(), 0..12), policy in condition()) {
        let rule = RuleBuilder::new(1).condition(policy).build();
        let forward = evaluate_rule(&rule, &observations(&flags));

        let mut reversed = flags.clone();
        reversed.reverse();
        let backward = evaluate_rule(&rule, &observations(&reversed));

        prop_assert_eq!(forward.status, backward.status);
    }

    /// Status matches the condition applied to the count of passing sub-rules
    #[test]
    fn status_follows_condition(flags in prop::collection::vec(any::<bool>(), 0..12), policy in condition()) {
        let rule = RuleBuilder::new(1).condition(policy).build();
        let obs = observations(&flags);
        let passed = obs.iter().filter(|o| evaluate_subrule(o).passed).count();
        prop_assert_eq!(passed, flags.iter().filter(|f| **f).count());

        let expected = Condition::from_policy(policy).is_satisfied(passed, flags.len());
        let result = evaluate_rule(&rule, &obs);
        prop_assert_eq!(result.status == Status::Pass, expected);
    }

    /// Passing rules always report counts
    #[test]
    fn passing_details_are_counts(flags in prop::collection::vec(any::<bool>(), 0..12), policy in condition()) {
        let rule = RuleBuilder::new(1).condition(policy).build();
        let result = evaluate_rule(&rule, &observations(&flags));
        if result.status == Status::Pass {
            prop_assert!(result.details.ends_with("sub-rules passed"));
        }
    }

    /// File observations never carry anything but exists/missing
    #[test]
    fn file_values_are_binary(path in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let host = crate::common::MockHost::new();
        let obs = hostaudit::core::services::execute_subrule(&format!("f:{path} -> exists"), &host);
        prop_assert!(obs.value() == FILE_EXISTS || obs.value() == FILE_MISSING);
    }
}
