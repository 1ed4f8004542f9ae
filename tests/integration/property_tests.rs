//! Property tests for the Pareto primitives.

use pareto_check::data::log::{Fitness, FitnessLog};
use pareto_check::pareto::{dominates, non_dominated_sort, pareto_efficient_mask};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distinct small-integer tuples, so dominance and ties are common
fn distinct_tuples() -> impl Strategy<Value = Vec<[i32; 3]>> {
    prop::collection::btree_set(prop::array::uniform3(0i32..12), 0..40)
        .prop_map(|set: BTreeSet<[i32; 3]>| set.into_iter().collect())
}

fn costs(tuples: &[[i32; 3]]) -> Vec<[f64; 3]> {
    tuples
        .iter()
        .map(|t| Fitness::new(t[0] as f64, t[1] as f64, t[2] as f64).costs())
        .collect()
}

proptest! {
    #[test]
    fn efficient_set_equals_first_front(tuples in distinct_tuples()) {
        let costs = costs(&tuples);
        let mask = pareto_efficient_mask(&costs);
        let sort = non_dominated_sort(&costs);

        for (i, efficient) in mask.iter().enumerate() {
            prop_assert_eq!(*efficient, sort.ranks[i] == 0);
        }
    }

    #[test]
    fn fronts_are_layered(tuples in distinct_tuples()) {
        let costs = costs(&tuples);
        let sort = non_dominated_sort(&costs);

        for (k, front) in sort.fronts.iter().enumerate() {
            for &a in front {
                for &b in front {
                    prop_assert!(!dominates(&costs[a], &costs[b]));
                }
                if k > 0 {
                    prop_assert!(sort.fronts[k - 1].iter().any(|&p| dominates(&costs[p], &costs[a])));
                }
            }
        }
    }

    #[test]
    fn single_line_logs_are_never_flagged(tuples in distinct_tuples()) {
        let content: String = tuples
            .iter()
            .map(|t| format!("({},{},{});", t[0], t[1], t[2]))
            .collect();
        let log = FitnessLog::parse("run_0.txt", &content).unwrap();
        let result = pareto_check::checks::efficiency::check_front0_efficiency(&log);
        prop_assert!(!result.is_failure());
    }
}
