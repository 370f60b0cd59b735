//! The dependency graph store.
//!
//! `Dag` records nodes, dependency edges and labels, and plans them on request. Nothing is
//! validated while the graph is being built, so nodes and their dependencies may be
//! declared in any order. Dangling references and cycles surface when the graph is sorted.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "tracing")]
use tracing::{debug, error, warn};

use crate::cycle;
use crate::error::{DagError, DagResult};
use crate::key::Key;
use crate::leveler::{self, Snapshot};
use crate::options::{AddOptions, DagOptions, SortOptions};
use crate::scope;
use crate::topology::Topology;

/// A directed dependency graph.
///
/// An edge `(from, to)` means "`to` depends on `from`": `from` is planned before `to`.
///
/// # Workflow
///
/// 1. Create a graph with [`Dag::new`] or [`Dag::with_options`]
/// 2. Register nodes with [`Dag::add_node`] or [`Dag::add`]
/// 3. Declare dependencies with [`Dag::add_dependency`] or [`Dag::add_edge`]
/// 4. Compute a plan with [`Dag::plan`]
///
/// # Examples
///
/// ```
/// use dagplan::{AddOptions, Dag, SortOptions};
///
/// let mut dag = Dag::new();
/// dag.add("web", AddOptions::new().dependencies(["api", "cache", "net"]));
/// dag.add("api", AddOptions::new().dependencies(["db", "cache", "net"]));
/// dag.add("db", AddOptions::new().dependencies(["net"]));
/// dag.add("mesh", AddOptions::new().dependencies(["net"]));
/// dag.add_nodes(["net", "cache"]);
///
/// let plan = dag.plan(SortOptions::new()).unwrap();
/// assert_eq!(plan.to_string(), "cache, net -> db, mesh -> api -> web");
/// ```
///
/// Mutators take `&mut self`, so a graph has one writer at a time. [`Dag::sort`] only reads,
/// and may run concurrently from several threads on a shared reference. See
/// [`SharedDag`](crate::SharedDag) for a lock-guarded variant.
#[derive(Debug, Clone)]
pub struct Dag<K> {
    /// Registered nodes, in registration order.
    pub(crate) nodes: Vec<K>,
    pub(crate) registered: BTreeSet<K>,
    /// node -> nodes that depend on it
    pub(crate) outputs: BTreeMap<K, BTreeSet<K>>,
    /// node -> number of edges pointing at it
    pub(crate) num_inputs: BTreeMap<K, usize>,
    pub(crate) labels: BTreeMap<K, BTreeSet<String>>,
}

impl<K: Key> Default for Dag<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Dag<K> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_options(DagOptions::default())
    }

    /// Create a graph with the node list presized for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(DagOptions::new().capacity(capacity))
    }

    /// Create a graph with `nodes` pre-registered.
    pub fn from_nodes<I: IntoIterator<Item = K>>(nodes: I) -> Self {
        Self::with_options(DagOptions::new().nodes(nodes))
    }

    /// Create a graph from construction options.
    ///
    /// Duplicate entries in the initial node list are registered once.
    pub fn with_options(options: DagOptions<K>) -> Self {
        let DagOptions { capacity, nodes } = options;

        let mut dag = Self {
            nodes: Vec::with_capacity(capacity),
            registered: BTreeSet::new(),
            outputs: BTreeMap::new(),
            num_inputs: BTreeMap::new(),
            labels: BTreeMap::new(),
        };

        for node in nodes {
            dag.add_node(node);
        }

        dag
    }

    /// Register a node.
    ///
    /// Returns `false` without changing anything if `key` is already registered.
    pub fn add_node(&mut self, key: K) -> bool {
        if self.registered.contains(&key) {
            #[cfg(feature = "tracing")]
            warn!(node = %key, "node already registered");

            return false;
        }

        #[cfg(feature = "tracing")]
        debug!(node = %key, "adding node");

        self.outputs.entry(key.clone()).or_default();
        self.num_inputs.entry(key.clone()).or_insert(0);
        self.registered.insert(key.clone());
        self.nodes.push(key);

        true
    }

    /// Register nodes in order, stopping at the first one already registered.
    ///
    /// Returns `true` if every node was new.
    pub fn add_nodes<I: IntoIterator<Item = K>>(&mut self, keys: I) -> bool {
        keys.into_iter().all(|key| self.add_node(key))
    }

    /// Record that `to` depends on `from`.
    ///
    /// Neither key has to be registered yet. Returns `false` if the edge already existed,
    /// in which case nothing changes.
    pub fn add_edge(&mut self, from: K, to: K) -> bool {
        #[cfg(feature = "tracing")]
        debug!(from = %from, to = %to, "adding edge");

        let inserted = self.outputs.entry(from).or_default().insert(to.clone());
        if inserted {
            *self.num_inputs.entry(to).or_insert(0) += 1;
        }

        inserted
    }

    /// Record that `sub` depends on each of `dependencies`.
    ///
    /// Returns `true` if every edge was new.
    pub fn add_dependency<I: IntoIterator<Item = K>>(&mut self, sub: K, dependencies: I) -> bool {
        dependencies
            .into_iter()
            .fold(true, |all_new, dep| self.add_edge(dep, sub.clone()) && all_new)
    }

    /// Slice form of [`Dag::add_dependency`].
    pub fn add_dependencies(&mut self, sub: K, dependencies: &[K]) -> bool {
        self.add_dependency(sub, dependencies.iter().cloned())
    }

    /// Register `node`, its dependencies and its labels in one call.
    ///
    /// Returns the node-registration signal: `false` if `node` already existed. The
    /// dependencies and labels are applied either way.
    ///
    /// ```
    /// use dagplan::{AddOptions, Dag};
    ///
    /// let mut dag = Dag::new();
    /// assert!(dag.add("api", AddOptions::new().dependencies(["db"]).labels(["tier:api"])));
    /// assert!(!dag.add("api", AddOptions::new()));
    /// assert_eq!(dag.dependencies_of(&"api"), vec![&"db"]);
    /// ```
    pub fn add(&mut self, node: K, options: AddOptions<K>) -> bool {
        let AddOptions {
            dependencies,
            labels,
        } = options;

        let added = self.add_node(node.clone());
        self.add_dependency(node.clone(), dependencies);
        self.add_labels(node, labels);

        added
    }

    /// Attach a descriptive label to `node`. The node need not be registered.
    pub fn add_label(&mut self, node: K, label: impl Into<String>) {
        self.labels.entry(node).or_default().insert(label.into());
    }

    /// Attach several labels to `node`.
    pub fn add_labels<I>(&mut self, node: K, labels: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut labels = labels.into_iter().peekable();
        if labels.peek().is_none() {
            return;
        }
        self.labels
            .entry(node)
            .or_default()
            .extend(labels.map(Into::into));
    }

    /// Remove the edge `from -> to`.
    ///
    /// Returns `false` if `from` was never registered as a node or used as an edge source.
    /// Removing an edge that does not exist from a known source is a successful no-op.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        let Some(dependents) = self.outputs.get_mut(from) else {
            #[cfg(feature = "tracing")]
            warn!(from = %from, to = %to, "edge source is unknown");

            return false;
        };

        if dependents.remove(to) {
            if let Some(count) = self.num_inputs.get_mut(to) {
                *count -= 1;
            }
        }

        true
    }

    /// Whether `key` is a registered node.
    pub fn contains(&self, key: &K) -> bool {
        self.registered.contains(key)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    /// Number of edges, including edges that touch unregistered keys.
    pub fn edge_count(&self) -> usize {
        self.outputs.values().map(BTreeSet::len).sum()
    }

    /// Keys that `node` depends on, sorted.
    pub fn dependencies_of(&self, node: &K) -> Vec<&K> {
        self.outputs
            .iter()
            .filter(|(_, dependents)| dependents.contains(node))
            .map(|(from, _)| from)
            .collect()
    }

    /// Keys that depend on `node`, sorted.
    pub fn dependents_of(&self, node: &K) -> Vec<&K> {
        self.outputs
            .get(node)
            .map(|dependents| dependents.iter().collect())
            .unwrap_or_default()
    }

    /// Labels attached to `node`, sorted.
    pub fn labels(&self, node: &K) -> Vec<&str> {
        self.labels
            .get(node)
            .map(|labels| labels.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Alias of [`Dag::sort`].
    pub fn plan(&self, options: SortOptions<K>) -> DagResult<Topology<K>, K> {
        self.sort(options)
    }

    /// Compute the level-grouped order of the graph, restricted by `options`.
    ///
    /// The live graph is never modified, so repeated calls on an unchanged graph return
    /// identical results.
    ///
    /// # Errors
    ///
    /// - [`DagError::UndefinedDependency`] if an edge starts at an unregistered key
    /// - [`DagError::UndefinedDependent`] if an edge ends at an unregistered key
    /// - [`DagError::CycleDetected`] if the graph is not acyclic
    /// - [`DagError::UnhandledDependency`] if a scoped plan needs an unselected dependency
    ///   and no dependency policy was chosen
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(nodes = self.nodes.len()))
    )]
    pub fn sort(&self, options: SortOptions<K>) -> DagResult<Topology<K>, K> {
        self.validate_references()?;

        let mut snapshot = Snapshot::new(self);
        let leveled = leveler::level(&mut snapshot);

        if let Some(cycle) = cycle::detect(&snapshot) {
            return Err(DagError::CycleDetected { cycle });
        }

        let topology = scope::resolve(self, leveled, &options)?;

        #[cfg(feature = "tracing")]
        debug!(
            level_count = topology.len(),
            scoped = !options.only.is_empty(),
            "plan computed"
        );

        Ok(topology)
    }

    /// Rejects edges whose endpoints were never registered, sources first.
    fn validate_references(&self) -> DagResult<(), K> {
        for (from, dependents) in &self.outputs {
            if dependents.is_empty() || self.registered.contains(from) {
                continue;
            }

            #[cfg(feature = "tracing")]
            error!(node = %from, "edge source was never registered");

            return Err(DagError::UndefinedDependency {
                node: from.clone(),
                dependents: dependents.iter().cloned().collect(),
            });
        }

        let mut undefined: BTreeMap<&K, Vec<K>> = BTreeMap::new();
        for (from, dependents) in &self.outputs {
            for to in dependents.iter().filter(|to| !self.registered.contains(*to)) {
                undefined.entry(to).or_default().push(from.clone());
            }
        }

        if let Some((node, dependencies)) = undefined.into_iter().next() {
            #[cfg(feature = "tracing")]
            error!(node = %node, "edge target was never registered");

            return Err(DagError::UndefinedDependent {
                node: node.clone(),
                dependencies,
            });
        }

        Ok(())
    }
}
