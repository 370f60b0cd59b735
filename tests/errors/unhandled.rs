//! Unhandled dependency errors carry structured data

use dagplan::{DagError, SortOptions};
use dagplan_test::{services, shared_network};

#[test]
fn test_structured_fields() {
    let err = shared_network()
        .plan(SortOptions::new().only(["api1"]))
        .unwrap_err();

    let DagError::UnhandledDependency { dependencies } = err else {
        panic!("expected unhandled dependency");
    };

    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].id, "db1");
    assert_eq!(dependencies[0].dependents, ["api1"]);
}

#[test]
fn test_dependents_are_limited_to_selection() {
    let err = services()
        .plan(SortOptions::new().only(["db", "mesh"]))
        .unwrap_err();

    let DagError::UnhandledDependency { dependencies } = err else {
        panic!("expected unhandled dependency");
    };

    assert_eq!(dependencies[0].id, "net");
    assert_eq!(dependencies[0].dependents, ["db", "mesh"]);
}

#[test]
fn test_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(
        services()
            .plan(SortOptions::new().only(["api"]))
            .unwrap_err(),
    );

    assert!(err.to_string().ends_with("is not included"));
}
