//! Level-grouped topological sort.
//!
//! A sort never touches the caller's graph. It first copies nodes, edges and
//! remaining-input counts into an index-addressed [`Snapshot`], then runs a layered Kahn's
//! algorithm over that copy. A node only becomes ready once every one of its dependencies
//! has been consumed, and it is queued for the *next* level rather than the current one.
//! That keeps each level free of internal dependencies.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::graph::Dag;
use crate::key::Key;
use crate::topology::NodeInfo;

/// Private working copy of a graph, addressed by registration index.
pub(crate) struct Snapshot<'a, K> {
    pub(crate) keys: Vec<&'a K>,
    /// Unconsumed outgoing edges per node.
    pub(crate) outputs: Vec<BTreeSet<usize>>,
    /// Unconsumed incoming edge count per node.
    pub(crate) num_inputs: Vec<usize>,
}

impl<'a, K: Key> Snapshot<'a, K> {
    /// Copies `dag`. Edges touching unregistered keys are skipped; callers validate
    /// references before building a snapshot.
    pub(crate) fn new(dag: &'a Dag<K>) -> Self {
        let keys: Vec<&'a K> = dag.nodes.iter().collect();
        let index: BTreeMap<&'a K, usize> = keys.iter().enumerate().map(|(i, &k)| (k, i)).collect();

        let mut outputs = vec![BTreeSet::new(); keys.len()];
        for (from, tos) in &dag.outputs {
            let Some(&from) = index.get(from) else {
                continue;
            };
            outputs[from].extend(tos.iter().filter_map(|to| index.get(to).copied()));
        }

        let num_inputs = keys
            .iter()
            .map(|k| dag.num_inputs.get(*k).copied().unwrap_or(0))
            .collect();

        Self {
            keys,
            outputs,
            num_inputs,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Output of [`level`]: levels of snapshot indices plus the per-node edge records.
pub(crate) struct Leveled<K> {
    pub(crate) levels: Vec<Vec<usize>>,
    /// Indexed like the snapshot.
    pub(crate) infos: Vec<NodeInfo<K>>,
}

/// Consumes edges from `snapshot` level by level.
///
/// On return, any node with a non-zero remaining-input count could not be leveled.
pub(crate) fn level<K: Key>(snapshot: &mut Snapshot<'_, K>) -> Leveled<K> {
    let mut infos: Vec<NodeInfo<K>> = snapshot
        .keys
        .iter()
        .map(|&k| NodeInfo::new(k.clone()))
        .collect();

    let mut current: Vec<usize> = (0..snapshot.len())
        .filter(|&i| snapshot.num_inputs[i] == 0)
        .collect();
    let mut levels = Vec::new();

    while !current.is_empty() {
        #[cfg(feature = "tracing")]
        trace!(
            level = levels.len(),
            node_count = current.len(),
            "leveling frontier"
        );

        let mut next = Vec::new();

        for &node in &current {
            let successors = std::mem::take(&mut snapshot.outputs[node]);

            for successor in successors {
                snapshot.num_inputs[successor] -= 1;

                let parent = infos[node].id.clone();
                let child = infos[successor].id.clone();
                infos[successor].parent_ids.push(parent);
                infos[node].child_ids.push(child);

                if snapshot.num_inputs[successor] == 0 {
                    next.push(successor);
                }
            }
        }

        levels.push(std::mem::replace(&mut current, next));
    }

    #[cfg(feature = "tracing")]
    debug!(
        level_count = levels.len(),
        leveled_nodes = levels.iter().map(Vec::len).sum::<usize>(),
        total_nodes = snapshot.len(),
        "topological levels computed"
    );

    Leveled { levels, infos }
}
