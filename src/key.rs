//! Node identity abstraction.
//!
//! Any type that is totally ordered, cloneable and printable can identify a node.
//! The order is only ever used to make output deterministic (level contents, error
//! listings, DOT output, the cycle-search seed). It never influences which node depends
//! on which.

use std::fmt::{Debug, Display};

/// Identity of a node in a [`Dag`](crate::Dag).
///
/// Blanket-implemented for every `Ord + Clone + Debug + Display` type, so `String`, `&str`,
/// integers and user-defined newtypes all work without extra code.
///
/// # Examples
///
/// ```
/// use dagplan::{Dag, SortOptions};
///
/// #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// struct Release(&'static str);
///
/// impl std::fmt::Display for Release {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "release/{}", self.0)
///     }
/// }
///
/// let mut dag = Dag::new();
/// dag.add_nodes([Release("db"), Release("api")]);
/// dag.add_dependency(Release("api"), [Release("db")]);
///
/// let plan = dag.plan(SortOptions::new()).unwrap();
/// assert_eq!(plan.to_string(), "release/db -> release/api");
/// ```
pub trait Key: Ord + Clone + Debug + Display {}

impl<T> Key for T where T: Ord + Clone + Debug + Display {}

/// Joins keys with `", "` using their `Display` form.
pub(crate) fn join<'a, K, I>(keys: I) -> String
where
    K: Key + 'a,
    I: IntoIterator<Item = &'a K>,
{
    keys.into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
