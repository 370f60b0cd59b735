//! Graphs with thousands of nodes

use dagplan::SortOptions;
use dagplan_test::{chain, layered, wide};

#[test]
fn test_deep_chain() {
    let plan = chain(10_000).plan(SortOptions::new()).unwrap();

    assert_eq!(plan.len(), 10_000);
    assert_eq!(plan.level_of(&9_999), Some(9_999));
}

#[test]
fn test_wide_fanout() {
    let plan = wide(10_000).plan(SortOptions::new()).unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0][0].child_ids.len(), 10_000);
}

#[test]
fn test_dense_layers() {
    let dag = layered(10, 50);
    let plan = dag.plan(SortOptions::new()).unwrap();

    assert_eq!(dag.edge_count(), 9 * 50 * 50);
    assert_eq!(plan.len(), 10);
    assert!(plan.iter().all(|level| level.len() == 50));
}

#[test]
fn test_deep_chain_scoped_with_dependencies() {
    let plan = chain(2_000)
        .plan(SortOptions::new().only([1_999usize]).with_dependencies())
        .unwrap();

    assert_eq!(plan.len(), 2_000);
}
