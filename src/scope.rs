//! Restricting a leveled plan to a caller-selected subset.
//!
//! Levels are walked from the most downstream to the most upstream. Whether a node belongs
//! in a scoped plan depends on whether anything selected depends on it, and by the time a
//! level is visited every one of its dependents has already been decided. Under
//! `with_dependencies` a pulled-in node joins the selection, so its own dependencies are
//! judged the same way further up.

use std::collections::BTreeSet;

#[cfg(feature = "tracing")]
use tracing::{debug, error};

use crate::error::{DagError, DagResult, UnhandledDependency};
use crate::graph::Dag;
use crate::key::Key;
use crate::leveler::Leveled;
use crate::options::SortOptions;
use crate::topology::{NodeInfo, Topology};

/// Filters `leveled` according to `options`, checking dependents against the unfiltered
/// edges of `dag`.
pub(crate) fn resolve<K: Key>(
    dag: &Dag<K>,
    leveled: Leveled<K>,
    options: &SortOptions<K>,
) -> DagResult<Topology<K>, K> {
    let mut selection: Option<BTreeSet<K>> = if options.only.is_empty() {
        None
    } else {
        Some(options.only.iter().cloned().collect())
    };

    let Leveled { levels, infos } = leveled;
    let mut infos: Vec<Option<NodeInfo<K>>> = infos.into_iter().map(Some).collect();
    let mut resolved: Vec<Vec<NodeInfo<K>>> = Vec::with_capacity(levels.len());

    for mut level in levels.into_iter().rev() {
        level.sort_by(|&a, &b| id_of(&infos, a).cmp(&id_of(&infos, b)));

        let mut included = Vec::with_capacity(level.len());

        for index in level {
            let Some(info) = infos[index].take() else {
                continue;
            };

            let Some(selected) = selection.as_mut() else {
                included.push(info);
                continue;
            };

            if selected.contains(&info.id) {
                included.push(info);
                continue;
            }

            let dependents: Vec<K> = match dag.outputs.get(&info.id) {
                Some(all) => all.intersection(selected).cloned().collect(),
                None => Vec::new(),
            };

            if dependents.is_empty() || options.without_dependencies {
                continue;
            }

            if !options.with_dependencies {
                #[cfg(feature = "tracing")]
                error!(
                    dependency = %info.id,
                    dependent_count = dependents.len(),
                    "dependency of a selected node is not included"
                );

                return Err(DagError::UnhandledDependency {
                    dependencies: vec![UnhandledDependency {
                        id: info.id,
                        dependents,
                    }],
                });
            }

            #[cfg(feature = "tracing")]
            debug!(dependency = %info.id, "pulling dependency into the plan");

            selected.insert(info.id.clone());
            included.push(info);
        }

        if !included.is_empty() {
            resolved.push(included);
        }
    }

    resolved.reverse();

    Ok(Topology { levels: resolved })
}

fn id_of<K>(infos: &[Option<NodeInfo<K>>], index: usize) -> Option<&K> {
    infos[index].as_ref().map(|info| &info.id)
}
