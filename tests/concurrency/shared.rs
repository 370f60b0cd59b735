//! Concurrent planning on a shared graph

use std::sync::Arc;

use dagplan::{Dag, SharedDag, SortOptions};
use dagplan_test::{random, services};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_see_the_same_plan() {
    let dag = Arc::new(SharedDag::from(random(200, 5, 11)));
    let expected = dag.plan(SortOptions::new()).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let dag = Arc::clone(&dag);
            tokio::task::spawn_blocking(move || dag.plan(SortOptions::new()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_writers_and_readers_interleave() {
    let dag = Arc::new(SharedDag::new());
    dag.add_node(0usize);

    let writers: Vec<_> = (1..=20usize)
        .map(|i| {
            let dag = Arc::clone(&dag);
            tokio::task::spawn_blocking(move || {
                let mut guard = dag.write();
                guard.add_node(i);
                guard.add_edge(0, i);
            })
        })
        .collect();

    let readers: Vec<_> = (0..20)
        .map(|_| {
            let dag = Arc::clone(&dag);
            tokio::task::spawn_blocking(move || {
                let plan = dag.plan(SortOptions::new()).unwrap();
                assert!(plan.len() <= 2);
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.await.unwrap();
    }

    let plan = dag.plan(SortOptions::new()).unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[1].len(), 20);
}

#[test]
fn test_plain_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let dag: Dag<&str> = services();
    assert_send_sync(&dag);

    std::thread::scope(|scope| {
        let a = scope.spawn(|| dag.plan(SortOptions::new()).unwrap().to_string());
        let b = scope.spawn(|| dag.plan(SortOptions::new()).unwrap().to_string());
        assert_eq!(a.join().unwrap(), b.join().unwrap());
    });
}

#[test]
fn test_snapshot_is_detached() {
    let dag = SharedDag::from(services());
    let snapshot = dag.snapshot();

    dag.add_node("extra");

    assert!(!snapshot.contains(&"extra"));
    assert!(dag.read().contains(&"extra"));
}
