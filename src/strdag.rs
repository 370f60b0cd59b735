//! Plain-text keys.
//!
//! [`StrDag`] exposes the same operations as [`Dag<String>`] but accepts anything that
//! converts into a `String`, so callers can pass string literals directly.

use std::io;

use crate::error::DagResult;
use crate::graph::Dag;
use crate::options::{AddOptions, DagOptions, SortOptions};
use crate::topology::Topology;

/// A [`Dag`] keyed by strings.
///
/// # Examples
///
/// ```
/// use dagplan::{SortOptions, StrDag};
///
/// let mut dag = StrDag::from_nodes(["web", "api", "db", "cache", "mesh", "net"]);
/// dag.add_dependency("web", ["api", "cache", "net"]);
/// dag.add_dependency("api", ["db", "cache", "net"]);
/// dag.add_dependency("db", ["net"]);
/// dag.add_dependency("mesh", ["net"]);
///
/// let err = dag.plan(SortOptions::new().only(["db", "mesh"])).unwrap_err();
/// assert_eq!(err.to_string(), r#""net" depended by "db" and "mesh" is not included"#);
///
/// let plan = dag
///     .plan(SortOptions::new().only(["db", "mesh"]).without_dependencies())
///     .unwrap();
/// assert_eq!(plan.to_string(), "db, mesh");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrDag {
    inner: Dag<String>,
}

impl StrDag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Dag::with_capacity(capacity),
        }
    }

    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::with_options(DagOptions::new().nodes(nodes.into_iter().map(Into::into)))
    }

    pub fn with_options(options: DagOptions<String>) -> Self {
        Self {
            inner: Dag::with_options(options),
        }
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        self.inner.add_node(id.into())
    }

    pub fn add_nodes<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.inner.add_nodes(ids.into_iter().map(Into::into))
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> bool {
        self.inner.add_edge(from.into(), to.into())
    }

    pub fn add_dependency<I>(&mut self, id: impl Into<String>, dependencies: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.inner
            .add_dependency(id.into(), dependencies.into_iter().map(Into::into))
    }

    pub fn add_dependencies<S: AsRef<str>>(&mut self, id: impl Into<String>, dependencies: &[S]) -> bool {
        self.add_dependency(id, dependencies.iter().map(|d| d.as_ref().to_owned()))
    }

    pub fn add(&mut self, id: impl Into<String>, options: AddOptions<String>) -> bool {
        self.inner.add(id.into(), options)
    }

    pub fn add_label(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.inner.add_label(id.into(), label);
    }

    pub fn add_labels<I>(&mut self, id: impl Into<String>, labels: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.inner.add_labels(id.into(), labels);
    }

    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        self.inner.remove_edge(&from.to_owned(), &to.to_owned())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains(&id.to_owned())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn sort(&self, options: SortOptions<String>) -> DagResult<Topology<String>, String> {
        self.inner.sort(options)
    }

    pub fn plan(&self, options: SortOptions<String>) -> DagResult<Topology<String>, String> {
        self.inner.plan(options)
    }

    pub fn write_dot<W: io::Write>(&self, writer: W) -> io::Result<()> {
        self.inner.write_dot(writer)
    }

    pub fn to_dot(&self) -> String {
        self.inner.to_dot()
    }

    /// The underlying generic graph.
    pub fn as_dag(&self) -> &Dag<String> {
        &self.inner
    }

    pub fn into_dag(self) -> Dag<String> {
        self.inner
    }
}

impl From<Dag<String>> for StrDag {
    fn from(inner: Dag<String>) -> Self {
        Self { inner }
    }
}
