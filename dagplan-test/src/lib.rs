//! Graph fixtures for internal use in dagplan tests and benchmarks.
//!
//! This crate is not meant for public use and offers no stability guarantees.

#![cfg(not(tarpaulin_include))]

use dagplan::{AddOptions, Dag, DagOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The service graph used throughout the docs.
///
/// ```text
/// web  <- api, cache, net
/// api  <- db, cache, net
/// db   <- net
/// mesh <- net
/// ```
pub fn services() -> Dag<&'static str> {
    let mut dag = Dag::from_nodes(["web", "api", "db", "cache", "mesh", "net"]);
    dag.add_dependency("web", ["api", "cache", "net"]);
    dag.add_dependency("api", ["db", "cache", "net"]);
    dag.add_dependency("db", ["net"]);
    dag.add_dependency("mesh", ["net"]);
    dag
}

/// A smaller graph with two apis sharing a network.
///
/// ```text
/// web  <- api1, api2
/// api1 <- db1
/// api2 <- db2
/// db*  <- net
/// ```
///
/// `db3` has no dependents.
pub fn shared_network() -> Dag<&'static str> {
    let mut dag = Dag::new();
    dag.add("web", AddOptions::new().dependencies(["api1", "api2"]));
    dag.add("api1", AddOptions::new().dependencies(["db1"]));
    dag.add("api2", AddOptions::new().dependencies(["db2"]));
    dag.add("db1", AddOptions::new().dependencies(["net"]));
    dag.add("db2", AddOptions::new().dependencies(["net"]));
    dag.add("db3", AddOptions::new().dependencies(["net"]));
    dag.add_node("net");
    dag
}

/// The release pipeline with labels, for DOT output.
pub fn releases() -> Dag<&'static str> {
    let mut dag = Dag::new();
    dag.add(
        "release/web",
        AddOptions::new()
            .dependencies(["release/api", "release/cache", "release/net"])
            .labels(["a", "b", "c", "d", "e"]),
    );
    dag.add(
        "release/api",
        AddOptions::new()
            .dependencies(["release/db", "release/cache", "release/net"])
            .labels(["tier:api"]),
    );
    dag.add(
        "release/db",
        AddOptions::new()
            .dependencies(["release/net"])
            .labels(["tier:db"]),
    );
    dag.add(
        "release/mesh",
        AddOptions::new()
            .dependencies(["release/net"])
            .labels(["tier:net"]),
    );
    dag.add("release/net", AddOptions::new());
    dag.add("release/cache", AddOptions::new());
    dag
}

/// `0 -> 1 -> ... -> n-1`.
pub fn chain(n: usize) -> Dag<usize> {
    let mut dag = Dag::with_options(DagOptions::new().capacity(n).nodes(0..n));
    for i in 1..n {
        dag.add_edge(i - 1, i);
    }
    dag
}

/// One root feeding `n` independent leaves.
pub fn wide(n: usize) -> Dag<usize> {
    let mut dag = Dag::with_options(DagOptions::new().capacity(n + 1).nodes(0..=n));
    for leaf in 1..=n {
        dag.add_edge(0, leaf);
    }
    dag
}

/// `levels` full layers of `width` nodes, each node depending on every node of the layer
/// before it.
pub fn layered(levels: usize, width: usize) -> Dag<usize> {
    let total = levels * width;
    let mut dag = Dag::with_options(DagOptions::new().capacity(total).nodes(0..total));
    for level in 1..levels {
        for node in level * width..(level + 1) * width {
            dag.add_dependency(node, (level - 1) * width..level * width);
        }
    }
    dag
}

/// A reproducible random DAG on `n` nodes.
///
/// Edges only point from lower to higher keys, so the result is always acyclic. Each
/// pair is connected with probability `density` in percent.
pub fn random(n: usize, density: u32, seed: u64) -> Dag<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dag = Dag::with_options(DagOptions::new().capacity(n).nodes(0..n));
    for to in 0..n {
        for from in 0..to {
            if rng.gen_range(0..100) < density {
                dag.add_edge(from, to);
            }
        }
    }
    dag
}
