//! Scoped plans are sub-plans of the full plan

use std::collections::BTreeSet;

use dagplan::{DagError, SortOptions};
use proptest::prelude::*;

use super::{arb_dag, arb_selection};
use crate::common::{assert_sound, levels};

proptest! {
    #[test]
    fn test_selecting_everything_is_the_full_plan(dag in arb_dag()) {
        let full = dag.plan(SortOptions::new()).unwrap();
        let scoped = dag
            .plan(SortOptions::new().only(dag.nodes().iter().copied()))
            .unwrap();

        prop_assert_eq!(levels(&scoped), levels(&full));
    }

    #[test]
    fn test_with_dependencies_selection_is_closed(dag in arb_dag(), only in arb_selection()) {
        let plan = dag
            .plan(SortOptions::new().only(only.iter().copied()).with_dependencies())
            .unwrap();

        for level in &plan {
            for info in level {
                for dependency in dag.dependencies_of(&info.id) {
                    prop_assert!(plan.level_of(dependency).is_some());
                }
            }
        }
        for key in only.iter().filter(|key| dag.contains(key)) {
            prop_assert!(plan.level_of(key).is_some());
        }
        assert_sound(&dag, &plan);
    }

    #[test]
    fn test_scoping_is_idempotent(dag in arb_dag(), only in arb_selection()) {
        let plan = dag
            .plan(SortOptions::new().only(only.iter().copied()).with_dependencies())
            .unwrap();
        let keys: Vec<usize> = plan.iter().flatten().map(|info| info.id).collect();

        let again = dag.plan(SortOptions::new().only(keys)).unwrap();

        prop_assert_eq!(again, plan);
    }

    #[test]
    fn test_without_dependencies_keeps_exactly_the_selection(
        dag in arb_dag(),
        only in arb_selection(),
    ) {
        let full = dag.plan(SortOptions::new()).unwrap();
        let scoped = dag
            .plan(SortOptions::new().only(only.iter().copied()).without_dependencies())
            .unwrap();

        let planned: BTreeSet<usize> = scoped.iter().flatten().map(|info| info.id).collect();
        let expected: BTreeSet<usize> = only.iter().copied().filter(|key| dag.contains(key)).collect();
        prop_assert_eq!(planned, expected);

        let mut previous = None;
        for level in &scoped {
            let full_level = full.level_of(&level[0].id);
            prop_assert!(level.iter().all(|info| full.level_of(&info.id) == full_level));
            prop_assert!(previous < full_level);
            previous = full_level;
        }
    }

    #[test]
    fn test_unhandled_dependency_names_a_real_gap(dag in arb_dag(), only in arb_selection()) {
        match dag.plan(SortOptions::new().only(only.iter().copied())) {
            Ok(plan) => assert_sound(&dag, &plan),
            Err(DagError::UnhandledDependency { dependencies }) => {
                let gap = &dependencies[0];
                prop_assert!(!only.contains(&gap.id));
                prop_assert!(!gap.dependents.is_empty());
                for dependent in &gap.dependents {
                    prop_assert!(dag.dependents_of(&gap.id).contains(&dependent));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

#[test]
fn test_repeated_scoping_is_stable() {
    let dag = dagplan_test::services();
    let options = || SortOptions::new().only(["api", "mesh"]).with_dependencies();

    let first = dag.plan(options()).unwrap();
    let second = dag.plan(options()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), "cache, net -> db, mesh -> api");
}
