//! A graph shared between threads.
//!
//! [`Dag`] itself needs `&mut self` to change, so it has one writer at a time by
//! construction. `SharedDag` moves that rule behind a [`parking_lot::RwLock`]. Mutators
//! take `&self` and hold the write lock for the duration of the call. Plans hold the read
//! lock, so any number of them can run concurrently between writes.

use std::io;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::error::DagResult;
use crate::graph::Dag;
use crate::key::Key;
use crate::options::{AddOptions, DagOptions, SortOptions};
use crate::topology::Topology;

/// A [`Dag`] guarded by a reader-writer lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use dagplan::{SharedDag, SortOptions};
///
/// let dag = Arc::new(SharedDag::new());
/// dag.add_nodes(["db", "api"]);
/// dag.add_dependency("api", ["db"]);
///
/// let readers: Vec<_> = (0..4)
///     .map(|_| {
///         let dag = Arc::clone(&dag);
///         std::thread::spawn(move || dag.plan(SortOptions::new()).unwrap().to_string())
///     })
///     .collect();
///
/// for reader in readers {
///     assert_eq!(reader.join().unwrap(), "db -> api");
/// }
/// ```
#[derive(Debug)]
pub struct SharedDag<K> {
    inner: RwLock<Dag<K>>,
}

impl<K: Key> SharedDag<K> {
    pub fn new() -> Self {
        Self::from(Dag::new())
    }

    pub fn with_options(options: DagOptions<K>) -> Self {
        Self::from(Dag::with_options(options))
    }

    /// Lock for reading. Blocks while a writer holds the lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Dag<K>> {
        self.inner.read()
    }

    /// Lock for writing, for batching several mutations under one acquisition.
    pub fn write(&self) -> RwLockWriteGuard<'_, Dag<K>> {
        #[cfg(feature = "tracing")]
        trace!("acquiring graph write lock");

        self.inner.write()
    }

    pub fn add_node(&self, key: K) -> bool {
        self.write().add_node(key)
    }

    pub fn add_nodes<I: IntoIterator<Item = K>>(&self, keys: I) -> bool {
        self.write().add_nodes(keys)
    }

    pub fn add_edge(&self, from: K, to: K) -> bool {
        self.write().add_edge(from, to)
    }

    pub fn add_dependency<I: IntoIterator<Item = K>>(&self, sub: K, dependencies: I) -> bool {
        self.write().add_dependency(sub, dependencies)
    }

    pub fn add(&self, node: K, options: AddOptions<K>) -> bool {
        self.write().add(node, options)
    }

    pub fn add_label(&self, node: K, label: impl Into<String>) {
        self.write().add_label(node, label);
    }

    pub fn add_labels<I>(&self, node: K, labels: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.write().add_labels(node, labels);
    }

    pub fn remove_edge(&self, from: &K, to: &K) -> bool {
        self.write().remove_edge(from, to)
    }

    pub fn sort(&self, options: SortOptions<K>) -> DagResult<Topology<K>, K> {
        self.read().sort(options)
    }

    pub fn plan(&self, options: SortOptions<K>) -> DagResult<Topology<K>, K> {
        self.read().plan(options)
    }

    pub fn write_dot<W: io::Write>(&self, writer: W) -> io::Result<()> {
        self.read().write_dot(writer)
    }

    pub fn to_dot(&self) -> String {
        self.read().to_dot()
    }

    /// A copy of the graph as it is now.
    pub fn snapshot(&self) -> Dag<K> {
        self.read().clone()
    }

    pub fn into_inner(self) -> Dag<K> {
        self.inner.into_inner()
    }
}

impl<K: Key> Default for SharedDag<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> From<Dag<K>> for SharedDag<K> {
    fn from(dag: Dag<K>) -> Self {
        Self {
            inner: RwLock::new(dag),
        }
    }
}
