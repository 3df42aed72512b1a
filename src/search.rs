use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::network::{Network, Route, Weight};

/// Single-source shortest path search over a [`Network`], specialized to one
/// start/end pair. Use [`Self::solve`] to run it; the solver owns all of its
/// bookkeeping, so a [`Network`] may be searched any number of times.
///
/// This is Dijkstra in the lazy-deletion form: the heap may hold several
/// entries for one node at different tentative distances, and an entry whose
/// recorded distance exceeds the node's current best is discarded when popped.
/// No decrease-key operation and no pre-extraction visited set are needed;
/// the staleness check at extraction time is sufficient for correctness.
pub(crate) struct RouteSolver<'n, 'a> {
    network: &'n Network<'a>,
}

impl<'n, 'a> From<&'n Network<'a>> for RouteSolver<'n, 'a> {
    fn from(network: &'n Network<'a>) -> Self {
        Self { network }
    }
}

impl<'a> RouteSolver<'_, 'a> {
    /// Run the search. Returns [`None`] if the end node is unreachable from
    /// the start node.
    ///
    /// Heap entries order by `(distance, node)`, so ties between equal
    /// tentative distances resolve to the lexicographically smallest node;
    /// together with strictly-smaller relaxation this makes the reported
    /// route deterministic even when several share the minimum weight.
    /// The search stops as soon as the end node is extracted, at which point
    /// its distance is final.
    pub(crate) fn solve(&self) -> Option<Route<'a>> {
        let graph = &self.network.graph;
        let (start, end) = (self.network.start, self.network.end);
        debug!(start, end, "searching for minimum-weight route");

        let mut best: HashMap<&'a str, Weight> = HashMap::with_capacity(graph.node_count());
        let mut predecessor: HashMap<&'a str, &'a str> = HashMap::with_capacity(graph.node_count());
        let mut queue: BinaryHeap<Reverse<(Weight, &'a str)>> = BinaryHeap::new();

        best.insert(start, 0);
        queue.push(Reverse((0, start)));

        while let Some(Reverse((distance, node))) = queue.pop() {
            if node == end {
                break;
            }
            // stale entry: a shorter route to this node was already recorded
            if distance > best.get(node).copied().unwrap_or(Weight::MAX) {
                continue;
            }

            for (a, b, weight) in graph.edges(node) {
                let neighbor = if a == node { b } else { a };
                let candidate = distance.saturating_add(*weight);
                if candidate < best.get(neighbor).copied().unwrap_or(Weight::MAX) {
                    trace!(node, neighbor, candidate, "relaxing edge");
                    best.insert(neighbor, candidate);
                    predecessor.insert(neighbor, node);
                    queue.push(Reverse((candidate, neighbor)));
                }
            }
        }

        let total_weight = *best.get(end)?;

        // walk the predecessor chain back from the end, then flip it
        let mut nodes = vec![end];
        let mut at = end;
        while let Some(&previous) = predecessor.get(at) {
            nodes.push(previous);
            at = previous;
        }
        nodes.reverse();

        debug!(total_weight, hops = nodes.len() - 1, "route found");
        Some(Route { nodes, total_weight })
    }
}
