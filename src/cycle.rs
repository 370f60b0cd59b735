//! Witness-cycle reconstruction.
//!
//! Runs after leveling has stalled. The nodes whose remaining-input count never reached
//! zero either sit on a cycle or downstream of one. Stalled nodes that cannot reach a cycle
//! (they only lead into stalled sinks) are pruned first. Then, starting from the smallest
//! remaining key, the detector follows unconsumed edges until a node repeats and cuts the
//! walk down to the closed loop.
//!
//! Only one witness is produced. It is not necessarily the shortest cycle, and other
//! disjoint cycles are not reported.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

#[cfg(feature = "tracing")]
use tracing::{error, trace};

use crate::key::Key;
use crate::leveler::Snapshot;

/// A path that starts and ends at the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<K> {
    pub path: Vec<K>,
}

impl<K> Cycle<K> {
    /// Nodes along the loop, first and last being the same node.
    pub fn path(&self) -> &[K] {
        &self.path
    }
}

impl<K: Key> fmt::Display for Cycle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        f.write_str(&path.join(" -> "))
    }
}

/// Returns a witness cycle if leveling left edges unconsumed, `None` if the graph was
/// fully leveled.
pub(crate) fn detect<K: Key>(snapshot: &Snapshot<'_, K>) -> Option<Cycle<K>> {
    let unresolved: usize = snapshot.num_inputs.iter().sum();
    if unresolved == 0 {
        return None;
    }

    let core = reaching_core(snapshot);

    #[cfg(feature = "tracing")]
    trace!(
        unresolved_edges = unresolved,
        core_nodes = core.iter().filter(|&&c| c).count(),
        "leveling stalled, searching for a cycle"
    );

    let seed = (0..snapshot.keys.len())
        .filter(|&i| core[i])
        .min_by(|&a, &b| snapshot.keys[a].cmp(snapshot.keys[b]));

    let Some(mut current) = seed else {
        return Some(Cycle { path: Vec::new() });
    };

    let mut seen = BTreeSet::new();
    let mut walk = Vec::new();

    while seen.insert(current) {
        walk.push(current);
        match snapshot.outputs[current].iter().find(|&&next| core[next]) {
            Some(&next) => current = next,
            None => break,
        }
    }

    let start = walk.iter().position(|&i| i == current).unwrap_or(0);
    let mut path: Vec<K> = walk[start..]
        .iter()
        .map(|&i| K::clone(snapshot.keys[i]))
        .collect();
    path.push(K::clone(snapshot.keys[current]));

    let cycle = Cycle { path };

    #[cfg(feature = "tracing")]
    error!(cycle = %cycle, "cycle detected");

    Some(cycle)
}

/// Marks the stalled nodes from which a cycle is reachable.
///
/// Every unconsumed edge points at a stalled node, so peeling off stalled nodes with no
/// outgoing edge into the remaining set (a reverse Kahn pass) leaves exactly the nodes that
/// lie on, or lead into, a cycle. Each of them keeps at least one edge inside the set.
fn reaching_core<K: Key>(snapshot: &Snapshot<'_, K>) -> Vec<bool> {
    let n = snapshot.keys.len();
    let mut core: Vec<bool> = snapshot.num_inputs.iter().map(|&c| c > 0).collect();
    let mut out_degree = vec![0usize; n];
    let mut inbound: Vec<Vec<usize>> = vec![Vec::new(); n];

    for from in 0..n {
        for &to in &snapshot.outputs[from] {
            out_degree[from] += 1;
            inbound[to].push(from);
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| core[i] && out_degree[i] == 0).collect();

    while let Some(node) = queue.pop_front() {
        core[node] = false;
        for &pred in &inbound[node] {
            out_degree[pred] -= 1;
            if out_degree[pred] == 0 && core[pred] {
                queue.push_back(pred);
            }
        }
    }

    core
}
