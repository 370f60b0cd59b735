//! Error types for planning operations.
//!
//! Only [`Dag::sort`](crate::Dag::sort) and [`Dag::plan`](crate::Dag::plan) produce errors.
//! Build-time misuse (registering a node twice, removing an edge from an unknown source)
//! is reported through a `bool` return instead.

use std::fmt;

use crate::cycle::Cycle;
use crate::dot::quote;
use crate::key::{self, Key};

/// Errors that can occur while planning a [`Dag`](crate::Dag).
///
/// Every variant is terminal for the call that produced it: no partial
/// [`Topology`](crate::Topology) is returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DagError<K> {
    /// An edge originates from a key that was never registered as a node.
    UndefinedDependency {
        /// The unregistered key.
        node: K,
        /// Registered or not, every key that depends on `node`, sorted.
        dependents: Vec<K>,
    },
    /// An edge points at a key that was never registered as a node.
    UndefinedDependent {
        /// The unregistered key.
        node: K,
        /// Every key `node` was declared to depend on, sorted.
        dependencies: Vec<K>,
    },
    /// Edges were left unresolved after leveling.
    ///
    /// The cycle is a single witness: it is not guaranteed to be the shortest cycle, and
    /// when the graph holds several disjoint cycles only one of them is reported per call.
    CycleDetected { cycle: Cycle<K> },
    /// A scoped plan found a dependency of a selected node that is neither selected nor
    /// covered by [`SortOptions::with_dependencies`](crate::SortOptions::with_dependencies)
    /// or [`SortOptions::without_dependencies`](crate::SortOptions::without_dependencies).
    ///
    /// Resolution stops at the first offending dependency, so the list holds one entry.
    UnhandledDependency {
        dependencies: Vec<UnhandledDependency<K>>,
    },
}

/// A dependency left out of a scoped plan, with the selected nodes that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledDependency<K> {
    pub id: K,
    /// Selected nodes depending on `id`, sorted.
    pub dependents: Vec<K>,
}

impl<K: Key> fmt::Display for UnhandledDependency<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self
            .dependents
            .iter()
            .map(|d| quote(&d.to_string()))
            .collect();

        let dependents = match quoted.split_last() {
            Some((last, rest)) if rest.len() >= 2 => format!("{}, and {}", rest.join(", "), last),
            _ => quoted.join(" and "),
        };

        write!(
            f,
            "{} depended by {} is not included",
            quote(&self.id.to_string()),
            dependents
        )
    }
}

impl<K: Key> fmt::Display for DagError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DagError::UndefinedDependency { node, dependents } => write!(
                f,
                "undefined node {} is depended by node(s): {}",
                quote(&node.to_string()),
                key::join(dependents)
            ),
            DagError::UndefinedDependent { node, dependencies } => write!(
                f,
                "undefined node {} depends on node(s): {}",
                quote(&node.to_string()),
                key::join(dependencies)
            ),
            DagError::CycleDetected { cycle } => write!(f, "cycle detected: {}", cycle),
            DagError::UnhandledDependency { dependencies } => match dependencies.first() {
                Some(first) => write!(f, "{}", first),
                None => write!(f, "unhandled dependency"),
            },
        }
    }
}

impl<K: Key> std::error::Error for DagError<K> {}

/// Result type for planning operations
pub type DagResult<T, K> = Result<T, DagError<K>>;
