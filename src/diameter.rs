use std::collections::{HashSet, VecDeque};

use petgraph::graphmap::UnGraphMap;

use crate::parse::{self, ParseError};

/// Solve the farthest nodes challenge: the length of the longest shortest
/// path (the diameter) of the unweighted undirected graph described by
/// `tokens`, each of the form `a-b`.
///
/// The challenge guarantees the graph is connected and acyclic, which is what
/// makes the classic two-sweep answer exact: breadth-first search from any
/// node reaches some farthest node, and a second sweep from there measures
/// the diameter. An empty token list yields 0. Each sweep counts its start
/// node as visited from the outset, so a lone `a-b` link measures 1.
pub fn farthest_nodes(tokens: &[&str]) -> Result<usize, ParseError> {
    let links = parse::links(tokens)?;

    let mut graph: UnGraphMap<&str, ()> = UnGraphMap::with_capacity(links.len() + 1, links.len());
    for (a, b) in links {
        if a == b {
            // a degenerate self-link contributes the node but no path
            graph.add_node(a);
        } else {
            graph.add_edge(a, b, ());
        }
    }

    let Some(start) = graph.nodes().next() else {
        return Ok(0);
    };
    let (turnaround, _) = farthest_from(&graph, start);
    let (_, diameter) = farthest_from(&graph, turnaround);

    Ok(diameter)
}

/// Breadth-first sweep returning a node at maximum hop distance from `start`,
/// together with that distance.
fn farthest_from<'a>(graph: &UnGraphMap<&'a str, ()>, start: &'a str) -> (&'a str, usize) {
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue: VecDeque<(&'a str, usize)> = VecDeque::from([(start, 0)]);
    let (mut farthest, mut max_distance) = (start, 0);

    while let Some((node, distance)) = queue.pop_front() {
        if distance > max_distance {
            (farthest, max_distance) = (node, distance);
        }
        for neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    (farthest, max_distance)
}
