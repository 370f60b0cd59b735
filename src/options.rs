//! Configuration values for building and planning a graph.
//!
//! Each options type is a plain value assembled with chained builder calls and applied
//! left to right. Scalar settings take the last value given, and list settings accumulate.

/// Construction-time configuration for [`Dag::with_options`](crate::Dag::with_options).
///
/// # Examples
///
/// ```
/// use dagplan::{Dag, DagOptions};
///
/// let dag: Dag<&str> = Dag::with_options(DagOptions::new().capacity(8).nodes(["api", "db"]));
/// assert_eq!(dag.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagOptions<K> {
    pub(crate) capacity: usize,
    pub(crate) nodes: Vec<K>,
}

impl<K> Default for DagOptions<K> {
    fn default() -> Self {
        Self {
            capacity: 0,
            nodes: Vec::new(),
        }
    }
}

impl<K> DagOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presize the node list. A later call replaces an earlier one.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Pre-register a node.
    pub fn node(mut self, node: K) -> Self {
        self.nodes.push(node);
        self
    }

    /// Pre-register several nodes, in order. Accumulates across calls.
    pub fn nodes<I: IntoIterator<Item = K>>(mut self, nodes: I) -> Self {
        self.nodes.extend(nodes);
        self
    }
}

/// Per-node configuration for [`Dag::add`](crate::Dag::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOptions<K> {
    pub(crate) dependencies: Vec<K>,
    pub(crate) labels: Vec<String>,
}

impl<K> Default for AddOptions<K> {
    fn default() -> Self {
        Self {
            dependencies: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl<K> AddOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes the added node depends on.
    pub fn dependencies<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        self.dependencies
            .extend(dependencies.into_iter().map(Into::into));
        self
    }

    /// Descriptive labels, shown in the DOT export.
    pub fn labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }
}

/// A single planning option, for callers that collect options dynamically.
///
/// A sequence of options folds into [`SortOptions`] in order:
///
/// ```
/// use dagplan::{SortOption, SortOptions};
///
/// let options: SortOptions<&str> = [
///     SortOption::Only(vec!["api"]),
///     SortOption::WithDependencies,
///     SortOption::Only(vec!["db"]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(options.selection(), ["api", "db"]);
/// assert!(options.includes_dependencies());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOption<K> {
    /// Restrict the plan to these nodes.
    Only(Vec<K>),
    /// Pull dependencies of selected nodes into the plan.
    WithDependencies,
    /// Leave dependencies of selected nodes out of the plan.
    WithoutDependencies,
}

/// Scope and dependency policy for [`Dag::sort`](crate::Dag::sort).
///
/// With no `only` selection the whole graph is planned and both flags are irrelevant.
/// When a selection is given, a dependency of a selected node that is not itself selected
/// must be handled explicitly: [`with_dependencies`](Self::with_dependencies) pulls it in,
/// [`without_dependencies`](Self::without_dependencies) leaves it out, and with neither the
/// plan fails with [`DagError::UnhandledDependency`](crate::DagError::UnhandledDependency).
/// If both flags are set, `without_dependencies` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions<K> {
    pub(crate) only: Vec<K>,
    pub(crate) with_dependencies: bool,
    pub(crate) without_dependencies: bool,
}

impl<K> Default for SortOptions<K> {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            with_dependencies: false,
            without_dependencies: false,
        }
    }
}

impl<K> SortOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the plan to `nodes`. Accumulates across calls.
    pub fn only<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        self.only.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn with_dependencies(mut self) -> Self {
        self.with_dependencies = true;
        self
    }

    pub fn without_dependencies(mut self) -> Self {
        self.without_dependencies = true;
        self
    }

    /// Apply one option on top of the current configuration.
    pub fn apply(&mut self, option: SortOption<K>) {
        match option {
            SortOption::Only(nodes) => self.only.extend(nodes),
            SortOption::WithDependencies => self.with_dependencies = true,
            SortOption::WithoutDependencies => self.without_dependencies = true,
        }
    }

    /// Nodes selected so far, in the order given.
    pub fn selection(&self) -> &[K] {
        &self.only
    }

    pub fn includes_dependencies(&self) -> bool {
        self.with_dependencies
    }

    pub fn excludes_dependencies(&self) -> bool {
        self.without_dependencies
    }
}

impl<K> Extend<SortOption<K>> for SortOptions<K> {
    fn extend<T: IntoIterator<Item = SortOption<K>>>(&mut self, iter: T) {
        for option in iter {
            self.apply(option);
        }
    }
}

impl<K> FromIterator<SortOption<K>> for SortOptions<K> {
    fn from_iter<T: IntoIterator<Item = SortOption<K>>>(iter: T) -> Self {
        let mut options = Self::default();
        options.extend(iter);
        options
    }
}
