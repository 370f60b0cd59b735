//! Cycle detection

use dagplan::{Dag, DagError, SortOptions};

#[test]
fn test_dependency_cycle() {
    let mut dag = Dag::from_nodes(["a", "b", "c"]);
    dag.add_dependency("a", ["b"]);
    dag.add_dependency("b", ["c"]);
    dag.add_dependency("c", ["a"]);

    let err = dag.plan(SortOptions::new()).unwrap_err();

    assert_eq!(err.to_string(), "cycle detected: a -> c -> b -> a");
}

#[test]
fn test_edge_cycle() {
    let mut dag = Dag::from_nodes(["a", "b", "c"]);
    dag.add_edge("b", "a");
    dag.add_edge("a", "c");
    dag.add_edge("c", "b");

    let err = dag.sort(SortOptions::new()).unwrap_err();

    assert_eq!(err.to_string(), "cycle detected: a -> c -> b -> a");
}

#[test]
fn test_cycle_reported_even_for_scoped_plan() {
    let mut dag = Dag::from_nodes(["a", "b", "c"]);
    dag.add_edge("a", "b");
    dag.add_edge("b", "a");

    let err = dag
        .plan(SortOptions::new().only(["c"]).without_dependencies())
        .unwrap_err();

    assert!(matches!(err, DagError::CycleDetected { .. }));
}

#[test]
fn test_cycle_path_is_closed_loop() {
    let mut dag = Dag::from_nodes(["root", "x", "y", "sink"]);
    dag.add_edge("root", "x");
    dag.add_edge("x", "y");
    dag.add_edge("y", "x");
    dag.add_edge("y", "sink");

    match dag.plan(SortOptions::new()) {
        Err(DagError::CycleDetected { cycle }) => {
            assert_eq!(cycle.path(), ["x", "y", "x"]);
            assert_eq!(cycle.path().first(), cycle.path().last());
        }
        other => panic!("expected a cycle, got {other:?}"),
    }
}

#[test]
fn test_self_loop() {
    let mut dag = Dag::from_nodes([1]);
    dag.add_edge(1, 1);

    assert_eq!(
        dag.plan(SortOptions::new()).unwrap_err().to_string(),
        "cycle detected: 1 -> 1"
    );
}

#[test]
fn test_graph_is_unchanged_after_failed_plan() {
    let mut dag = Dag::from_nodes(["a", "b"]);
    dag.add_edge("a", "b");
    dag.add_edge("b", "a");
    let before = dag.clone();

    assert!(dag.plan(SortOptions::new()).is_err());
    assert!(dag.plan(SortOptions::new()).is_err());

    assert_eq!(dag.edge_count(), before.edge_count());
    assert_eq!(dag.dependencies_of(&"a"), before.dependencies_of(&"a"));
}

#[test]
fn test_cycle_feeding_a_chain_reports_the_loop() {
    let mut dag = Dag::from_nodes(["a", "b", "y", "z"]);
    dag.add_edge("y", "z");
    dag.add_edge("z", "y");
    dag.add_edge("y", "a");
    dag.add_edge("a", "b");

    assert_eq!(
        dag.plan(SortOptions::new()).unwrap_err().to_string(),
        "cycle detected: y -> z -> y"
    );
}
