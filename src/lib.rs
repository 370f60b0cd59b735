//! Dependency Graph Planner
//!
//! A deterministic, parallelism-aware planner for directed dependency graphs. Given nodes
//! and "depends on" edges, `dagplan` computes an ordered sequence of **levels**. Every
//! dependency of a node lies in an earlier level, and nodes sharing a level can be
//! processed concurrently. A plan can be restricted to a subset of nodes, and the caller
//! decides explicitly what happens to dependencies that fall outside that subset.
//!
//! # Features
//!
//! - **Level-grouped ordering**: layered Kahn's algorithm groups nodes by dependency depth,
//!   so each level is a set of parallel-execution candidates for your own scheduler
//! - **Deterministic output**: levels, error listings and DOT export are ordered by key;
//!   planning twice yields identical results
//! - **Scoped plans**: [`SortOptions::only`] restricts the plan, and
//!   [`SortOptions::with_dependencies`] / [`SortOptions::without_dependencies`] choose how
//!   out-of-scope dependencies are treated. With neither, the plan fails instead of guessing.
//! - **Structured errors**: undefined nodes, cycles (with a witness path) and unhandled
//!   dependencies are distinct [`DagError`] variants
//! - **Any key type**: anything `Ord + Clone + Debug + Display` identifies a node; see [`Key`]
//! - **Graphviz export**: [`Dag::write_dot`] renders the graph with its labels
//!
//! # Quick Start
//!
//! ```
//! use dagplan::{AddOptions, Dag, SortOptions};
//!
//! let mut dag = Dag::new();
//!
//! // Nodes and dependencies may be declared in any order
//! dag.add("web", AddOptions::new().dependencies(["api", "cache", "net"]));
//! dag.add("api", AddOptions::new().dependencies(["db", "cache", "net"]));
//! dag.add("db", AddOptions::new().dependencies(["net"]));
//! dag.add("mesh", AddOptions::new().dependencies(["net"]));
//! dag.add_nodes(["cache", "net"]);
//!
//! let plan = dag.plan(SortOptions::new()).unwrap();
//! assert_eq!(plan.to_string(), "cache, net -> db, mesh -> api -> web");
//!
//! // Each level can be handed to a scheduler as one parallel batch
//! for (depth, level) in plan.iter().enumerate() {
//!     let ids: Vec<_> = level.iter().map(|node| node.id).collect();
//!     println!("level {depth}: {ids:?}");
//! }
//! ```
//!
//! # Core Concepts
//!
//! ## Dag
//!
//! A [`Dag`] stores nodes, edges and labels. An edge `(from, to)` means `to` depends on
//! `from`. Nothing is validated while building, so a dependency may be declared before the
//! node it names. Dangling references are reported when the graph is planned.
//!
//! ## Topology
//!
//! [`Dag::plan`] (an alias of [`Dag::sort`]) returns a [`Topology`]: levels of
//! [`NodeInfo`] records, each carrying the node's parents and children. Its `Display` form
//! joins levels with `" -> "` and nodes within a level with `", "`.
//!
//! ## Scoped Plans
//!
//! Acting on part of a system raises a question the planner refuses to answer silently:
//! what about a selected node's dependencies that were not selected?
//!
//! ```
//! use dagplan::{DagError, SortOptions, StrDag};
//!
//! let mut dag = StrDag::from_nodes(["web", "api", "db", "cache", "mesh", "net"]);
//! dag.add_dependency("web", ["api", "cache", "net"]);
//! dag.add_dependency("api", ["db", "cache", "net"]);
//! dag.add_dependency("db", ["net"]);
//! dag.add_dependency("mesh", ["net"]);
//!
//! // No policy: the plan names the dependency and who needs it
//! let err = dag.plan(SortOptions::new().only(["db", "mesh"])).unwrap_err();
//! assert!(matches!(err, DagError::UnhandledDependency { .. }));
//! assert_eq!(err.to_string(), r#""net" depended by "db" and "mesh" is not included"#);
//!
//! // Pull dependencies in
//! let plan = dag.plan(SortOptions::new().only(["db", "mesh"]).with_dependencies()).unwrap();
//! assert_eq!(plan.to_string(), "net -> db, mesh");
//!
//! // Or knowingly leave them out
//! let plan = dag.plan(SortOptions::new().only(["db", "mesh"]).without_dependencies()).unwrap();
//! assert_eq!(plan.to_string(), "db, mesh");
//! ```
//!
//! # Error Handling
//!
//! Planning returns [`DagResult<T, K>`] (an alias for `Result<T, DagError<K>>`):
//!
//! - [`DagError::UndefinedDependency`]: an edge starts at a node that was never registered
//! - [`DagError::UndefinedDependent`]: an edge ends at a node that was never registered
//! - [`DagError::CycleDetected`]: the graph has a cycle; one witness path is reported
//! - [`DagError::UnhandledDependency`]: a scoped plan needs an unselected dependency
//!
//! Errors are terminal: no partial plan is returned. Build-time misuse such as registering
//! a node twice is not an error; the mutator returns `false` instead.
//!
//! ```
//! use dagplan::{DagError, SortOptions, StrDag};
//!
//! let mut dag = StrDag::from_nodes(["a", "b", "c"]);
//! dag.add_dependency("a", ["b"]);
//! dag.add_dependency("b", ["c"]);
//! dag.add_dependency("c", ["a"]);
//!
//! match dag.plan(SortOptions::new()) {
//!     Err(DagError::CycleDetected { cycle }) => {
//!         assert_eq!(cycle.to_string(), "a -> c -> b -> a");
//!     }
//!     other => panic!("expected a cycle, got {other:?}"),
//! }
//! ```
//!
//! # Concurrency
//!
//! Planning is synchronous and works on a private copy of the graph, so it never mutates the
//! graph it reads. Mutators take `&mut self`; [`SharedDag`] wraps a graph in a reader-writer
//! lock when several threads need access.
//!
//! # Optional Tracing Support
//!
//! dagplan provides optional observability through the `tracing` crate with **zero runtime
//! overhead when disabled**. The instrumentation is conditionally compiled using a feature
//! flag.
//!
//! ```toml
//! [dependencies]
//! dagplan = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ## Log Levels
//!
//! - **DEBUG**: node and edge registration, level computation summaries, pulled-in dependencies
//! - **TRACE**: per-level frontier sizes, cycle search, lock acquisition
//! - **WARN**: duplicate node registration, edge removal from unknown sources
//! - **ERROR**: undefined nodes, cycles, unhandled dependencies
//!
//! ```bash
//! RUST_LOG=dagplan=debug cargo run
//! ```
//!
//! When the feature is disabled (the default), logging code is removed at compile time via
//! `#[cfg(feature = "tracing")]` and the `tracing` crate isn't linked.

// Module declarations
mod cycle;
mod dot;
mod error;
mod graph;
mod key;
mod leveler;
mod options;
mod scope;
mod shared;
mod strdag;
mod topology;

// Public re-exports
pub use cycle::Cycle;
pub use error::{DagError, DagResult, UnhandledDependency};
pub use graph::Dag;
pub use key::Key;
pub use options::{AddOptions, DagOptions, SortOption, SortOptions};
pub use shared::SharedDag;
pub use strdag::StrDag;
pub use topology::{NodeInfo, Topology};
