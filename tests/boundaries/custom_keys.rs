//! Caller-defined key types

use std::fmt;

use dagplan::{Dag, DagError, SortOptions};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Step {
    stage: u8,
    name: &'static str,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.stage, self.name)
    }
}

fn step(stage: u8, name: &'static str) -> Step {
    Step { stage, name }
}

#[test]
fn test_struct_keys_order_by_ord() {
    let mut dag = Dag::from_nodes([step(2, "b"), step(1, "z"), step(3, "a")]);
    dag.add_edge(step(1, "z"), step(3, "a"));

    assert_eq!(
        dag.plan(SortOptions::new()).unwrap().to_string(),
        "1:z, 2:b -> 3:a"
    );
}

#[test]
fn test_struct_keys_in_errors() {
    let mut dag = Dag::from_nodes([step(1, "a")]);
    dag.add_edge(step(0, "ghost"), step(1, "a"));

    let err = dag.plan(SortOptions::new()).unwrap_err();

    assert!(matches!(err, DagError::UndefinedDependency { ref node, .. } if node.name == "ghost"));
    assert_eq!(
        err.to_string(),
        r#"undefined node "0:ghost" is depended by node(s): 1:a"#
    );
}

#[test]
fn test_char_keys() {
    let mut dag = Dag::from_nodes(['b', 'a', 'z']);
    dag.add_dependency('a', ['z']);

    let plan = dag.plan(SortOptions::new()).unwrap();

    assert_eq!(plan.to_string(), "b, z -> a");
    assert_eq!(plan.level_of(&'a'), Some(1));
}
