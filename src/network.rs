use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::parse::{NetworkSpec, ParseError};
use crate::search::RouteSolver;

/// A per-edge or cumulative traversal cost.
pub type Weight = u64;

/// An undirected weighted graph over named nodes, with a designated start and
/// end node, ready to be searched.
///
/// Build one from a parsed [`NetworkSpec`] via [`From`]. Construction resolves
/// the two behaviors the challenge statement leaves open:
/// duplicate edges between the same unordered pair of nodes collapse to the
/// minimum weight seen, and self-loop edges are discarded outright, since a
/// self-loop can never lie on a simple path.
pub struct Network<'a> {
    pub(crate) graph: UnGraphMap<&'a str, Weight>,
    pub(crate) start: &'a str,
    pub(crate) end: &'a str,
}

impl<'a> From<&NetworkSpec<'a>> for Network<'a> {
    fn from(spec: &NetworkSpec<'a>) -> Self {
        let mut graph = UnGraphMap::with_capacity(spec.nodes().len(), spec.edges().len());

        // isolated declared nodes still exist in the graph
        for node in spec.nodes() {
            graph.add_node(*node);
        }

        for edge in spec.edges() {
            let UnorderedPair(a, b) = edge.endpoints;
            if a == b {
                continue;
            }
            match graph.edge_weight(a, b) {
                Some(&existing) if existing <= edge.weight => {}
                _ => {
                    graph.add_edge(a, b, edge.weight);
                }
            }
        }

        Self {
            graph,
            start: spec.start(),
            end: spec.end(),
        }
    }
}

impl<'a> Network<'a> {
    /// Compute the minimum-total-weight simple path from the declared start
    /// node to the declared end node, or [`None`] when the end node is not
    /// reachable. Unreachability is an expected outcome, not a failure.
    ///
    /// When several routes share the minimum weight, the result is still
    /// deterministic: the search extracts equal tentative distances in
    /// lexicographic node order and only a strictly smaller distance replaces
    /// a node's recorded predecessor, so the first route to finalize wins.
    pub fn shortest_route(&self) -> Option<Route<'a>> {
        RouteSolver::from(self).solve()
    }

    /// The designated route start, i.e. the first declared node.
    pub fn start(&self) -> &'a str {
        self.start
    }

    /// The designated route end, i.e. the last declared node.
    pub fn end(&self) -> &'a str {
        self.end
    }
}

/// A minimum-weight route through a [`Network`], from its start node to its
/// end node inclusive. Displays in the challenge's answer format, the node
/// names joined by hyphens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route<'a> {
    pub(crate) nodes: Vec<&'a str>,
    pub(crate) total_weight: Weight,
}

impl<'a> Route<'a> {
    /// The visited nodes in traversal order. No node appears twice.
    pub fn nodes(&self) -> &[&'a str] {
        &self.nodes
    }

    /// The sum of edge weights along the route.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join("-"))
    }
}

/// The outcome of a weighted path challenge.
///
/// "No path" is a first-class answer, not an error; it displays as the
/// challenge's literal `-1`, which no hyphen-joined route can collide with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteOutcome<'a> {
    /// The minimum-weight route between the declared endpoints.
    Route(Route<'a>),
    /// The declared endpoints are not connected.
    NoPath,
}

impl<'a> RouteOutcome<'a> {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route<'a>> {
        match self {
            Self::Route(route) => Some(route),
            Self::NoPath => None,
        }
    }
}

impl Display for RouteOutcome<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Route(route) => route.fmt(f),
            Self::NoPath => write!(f, "-1"),
        }
    }
}

/// Solve the weighted path challenge end to end: parse `tokens`, build the
/// [`Network`], and search it.
///
/// `tokens` is the challenge's array form: a node count, that many node names
/// (first is the start, last is the end), then `NODE|NODE|WEIGHT` edges.
/// Rendering the returned [`RouteOutcome`] with [`Display`] yields the
/// challenge answer string, e.g. `A-B-C-D` or `-1`.
///
/// ```
/// use waypath::weighted_path;
///
/// let outcome = weighted_path(&["4", "A", "B", "C", "D", "A|B|1", "B|D|9", "B|C|3", "C|D|4"]).unwrap();
/// assert_eq!(outcome.to_string(), "A-B-C-D");
/// ```
pub fn weighted_path<'a>(tokens: &[&'a str]) -> Result<RouteOutcome<'a>, ParseError> {
    let spec = NetworkSpec::parse(tokens)?;
    let network = Network::from(&spec);

    Ok(match network.shortest_route() {
        Some(route) => RouteOutcome::Route(route),
        None => RouteOutcome::NoPath,
    })
}
