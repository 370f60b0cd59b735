//! Plan results: ordered levels of nodes.

use std::fmt;
use std::ops::Index;

use crate::key::{self, Key};

/// One node of a computed plan, with the edges discovered while leveling it.
///
/// Parent and child lists always describe the full graph. Nodes left out of a scoped plan
/// still appear in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo<K> {
    pub id: K,
    /// Dependencies of this node, in the order their edges were consumed.
    pub parent_ids: Vec<K>,
    /// Dependents of this node, in the order their edges were consumed.
    pub child_ids: Vec<K>,
}

impl<K> NodeInfo<K> {
    pub(crate) fn new(id: K) -> Self {
        Self {
            id,
            parent_ids: Vec::new(),
            child_ids: Vec::new(),
        }
    }
}

impl<K: Key> fmt::Display for NodeInfo<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// The result of planning a [`Dag`](crate::Dag): an ordered sequence of levels.
///
/// Every dependency of a node in level `k` lies in a level before `k`, and nodes sharing a
/// level have no dependency path between them. A caller's scheduler may therefore process
/// each level's nodes in parallel once all earlier levels are done.
///
/// Nodes within a level are sorted by key and no level is empty.
///
/// # Examples
///
/// ```
/// use dagplan::{Dag, SortOptions};
///
/// let mut dag = Dag::new();
/// dag.add_nodes(["a", "b", "c"]);
/// dag.add_dependency("c", ["a", "b"]);
///
/// let plan = dag.plan(SortOptions::new()).unwrap();
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan.level_of(&"c"), Some(1));
/// assert_eq!(plan.to_string(), "a, b -> c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology<K> {
    pub(crate) levels: Vec<Vec<NodeInfo<K>>>,
}

impl<K> Default for Topology<K> {
    fn default() -> Self {
        Self { levels: Vec::new() }
    }
}

impl<K> Topology<K> {
    /// All levels, upstream first.
    pub fn levels(&self) -> &[Vec<NodeInfo<K>>] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<NodeInfo<K>>> {
        self.levels.iter()
    }

    /// Node identities level by level.
    pub fn keys(&self) -> Vec<Vec<&K>> {
        self.levels
            .iter()
            .map(|level| level.iter().map(|info| &info.id).collect())
            .collect()
    }

    pub fn into_levels(self) -> Vec<Vec<NodeInfo<K>>> {
        self.levels
    }
}

impl<K: Key> Topology<K> {
    /// Index of the level holding `key`, if the plan includes it.
    pub fn level_of(&self, key: &K) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|info| &info.id == key))
    }

    /// The plan's entry for `key`, if included.
    pub fn node(&self, key: &K) -> Option<&NodeInfo<K>> {
        self.levels.iter().flatten().find(|info| &info.id == key)
    }
}

impl<K> Index<usize> for Topology<K> {
    type Output = [NodeInfo<K>];

    fn index(&self, index: usize) -> &Self::Output {
        &self.levels[index]
    }
}

impl<K> IntoIterator for Topology<K> {
    type Item = Vec<NodeInfo<K>>;
    type IntoIter = std::vec::IntoIter<Vec<NodeInfo<K>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Topology<K> {
    type Item = &'a Vec<NodeInfo<K>>;
    type IntoIter = std::slice::Iter<'a, Vec<NodeInfo<K>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

impl<K: Key> fmt::Display for Topology<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .levels
            .iter()
            .map(|level| {
                let mut ids: Vec<&K> = level.iter().map(|info| &info.id).collect();
                ids.sort();
                key::join(ids)
            })
            .collect();

        f.write_str(&rendered.join(" -> "))
    }
}
