//! Full and scoped plans over the service graph

use dagplan::{AddOptions, Dag, SortOptions};
use dagplan_test::services;

use crate::common::{assert_sound, levels};

#[test]
fn test_full_plan() {
    let dag = services();
    let plan = dag.plan(SortOptions::new()).unwrap();

    assert_eq!(plan.to_string(), "cache, net -> db, mesh -> api -> web");
    assert_eq!(
        levels(&plan),
        [
            vec!["cache", "net"],
            vec!["db", "mesh"],
            vec!["api"],
            vec!["web"],
        ]
    );
    assert_sound(&dag, &plan);
}

#[test]
fn test_full_plan_built_with_add() {
    let mut dag = Dag::new();
    dag.add("web", AddOptions::new().dependencies(["api", "cache", "net"]));
    dag.add("api", AddOptions::new().dependencies(["db", "cache", "net"]));
    dag.add("db", AddOptions::new().dependencies(["net"]));
    dag.add("mesh", AddOptions::new().dependencies(["net"]));
    dag.add("net", AddOptions::new());
    dag.add("cache", AddOptions::new());

    assert_eq!(
        dag.plan(SortOptions::new()).unwrap().to_string(),
        "cache, net -> db, mesh -> api -> web"
    );
}

#[test]
fn test_scoped_without_policy_reports_shared_dependency() {
    let err = services()
        .plan(SortOptions::new().only(["db", "mesh"]))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        r#""net" depended by "db" and "mesh" is not included"#
    );
}

#[test]
fn test_scoped_without_dependencies() {
    let plan = services()
        .plan(SortOptions::new().only(["db", "mesh"]).without_dependencies())
        .unwrap();

    assert_eq!(plan.to_string(), "db, mesh");
}

#[test]
fn test_scoped_with_dependencies() {
    let plan = services()
        .plan(SortOptions::new().only(["db", "mesh"]).with_dependencies())
        .unwrap();

    assert_eq!(plan.to_string(), "net -> db, mesh");
}

#[test]
fn test_scoped_with_dependencies_is_transitive() {
    let plan = services()
        .plan(SortOptions::new().only(["web"]).with_dependencies())
        .unwrap();

    assert_eq!(plan.to_string(), "cache, net -> db -> api -> web");
}

#[test]
fn test_node_infos_record_consumed_edges() {
    let plan = services().plan(SortOptions::new()).unwrap();

    let api = plan.node(&"api").unwrap();
    let mut parents = api.parent_ids.clone();
    parents.sort();
    assert_eq!(parents, ["cache", "db", "net"]);
    assert_eq!(api.child_ids, ["web"]);

    let net = plan.node(&"net").unwrap();
    assert!(net.parent_ids.is_empty());
    assert_eq!(net.child_ids.len(), 4);
}
