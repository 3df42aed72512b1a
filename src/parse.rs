//! Tokenizers for the array-encoded challenge inputs.
//!
//! Every challenge arrives as a flat list of string tokens with its own
//! micro-grammar. All of the grammars live here, separated from the solvers,
//! so that malformed input fails fast with a [`ParseError`] instead of leaking
//! corrupted state into a search.

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::geometry::Point;
use crate::network::Weight;

/// Reasons a challenge token list may be rejected.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was empty where a node count token was required.
    #[error("input is empty; expected a node count token")]
    MissingCount,
    /// The leading node count token is not a decimal non-negative integer.
    #[error("node count token {0:?} is not a non-negative integer")]
    BadCount(String),
    /// Fewer than two nodes were declared; a route needs distinct endpoints to aim for.
    #[error("expected at least two declared nodes, found {declared}")]
    TooFewNodes {
        /// The value of the leading count token.
        declared: usize,
    },
    /// The count token promises more node names than the input carries.
    #[error("node count declares {declared} nodes but only {found} tokens follow")]
    TruncatedNodeList {
        /// The value of the leading count token.
        declared: usize,
        /// How many tokens actually followed it.
        found: usize,
    },
    /// A declared node name was the empty string.
    #[error("declared node names may not be empty")]
    EmptyNodeName,
    /// An edge token did not split into exactly three `|`-separated fields.
    #[error("edge token {0:?} is not of the form NODE|NODE|WEIGHT")]
    MalformedEdge(String),
    /// An edge token carried a weight field that is not a non-negative integer.
    #[error("edge {edge:?} has a non-numeric weight")]
    BadWeight {
        /// The offending edge token.
        edge: String,
    },
    /// An edge token named a node absent from the declared node list.
    #[error("edge {edge:?} references undeclared node {node:?}")]
    UnknownNode {
        /// The undeclared endpoint.
        node: String,
        /// The offending edge token.
        edge: String,
    },
    /// A link token did not split into exactly two `-`-separated names.
    #[error("link token {0:?} is not of the form NODE-NODE")]
    MalformedLink(String),
    /// A matrix row was not wrapped in square brackets.
    #[error("matrix row {0:?} is not a bracketed list of integers")]
    MalformedRow(String),
    /// The matrix had no rows at all.
    #[error("matrix has no rows")]
    EmptyMatrix,
    /// Two matrix rows disagreed on width.
    #[error("matrix rows are ragged: expected width {expected}, found {found}")]
    RaggedMatrix {
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A numeric field failed to parse as an integer.
    #[error("token {0:?} is not an integer")]
    BadNumber(String),
    /// The three points challenge received a point count other than three.
    #[error("expected exactly three points, found {found}")]
    WrongPointCount {
        /// How many point tokens were supplied.
        found: usize,
    },
    /// A point token was not of the form `(X,Y)`.
    #[error("point token {0:?} is not of the form (X,Y)")]
    MalformedPoint(String),
}

/// A single undirected weighted connection between two named nodes, as written in the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeSpec<'a> {
    /// The two endpoints; `A|B|W` and `B|A|W` describe the same edge.
    pub endpoints: UnorderedPair<&'a str>,
    /// Non-negative traversal cost.
    pub weight: Weight,
}

/// The parsed form of a weighted path challenge input: the declared node list
/// (order preserved) and every edge as written, before any deduplication.
///
/// The first declared node is the route start and the last is the route end.
/// Feed this to [`Network::from`](crate::Network) to obtain a searchable graph.
#[derive(Clone, Debug)]
pub struct NetworkSpec<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<EdgeSpec<'a>>,
}

impl<'a> NetworkSpec<'a> {
    /// Parse a weighted path token list: a decimal node count `K`, then `K`
    /// node names, then any number of `NODE|NODE|WEIGHT` edge tokens.
    ///
    /// The grammar is strict; any malformation is a [`ParseError`] rather than
    /// a silent truncation. At least two nodes must be declared.
    pub fn parse(tokens: &[&'a str]) -> Result<Self, ParseError> {
        let (count_token, rest) = tokens.split_first().ok_or(ParseError::MissingCount)?;
        let declared = count_token
            .parse::<usize>()
            .map_err(|_| ParseError::BadCount(count_token.to_string()))?;
        if declared < 2 {
            return Err(ParseError::TooFewNodes { declared });
        }
        if rest.len() < declared {
            return Err(ParseError::TruncatedNodeList { declared, found: rest.len() });
        }

        let (node_tokens, edge_tokens) = rest.split_at(declared);
        if node_tokens.iter().any(|name| name.is_empty()) {
            return Err(ParseError::EmptyNodeName);
        }
        let nodes = node_tokens.to_vec();

        let mut edges = Vec::with_capacity(edge_tokens.len());
        for token in edge_tokens {
            let Some((a, b, weight_field)) = token.split('|').collect_tuple() else {
                return Err(ParseError::MalformedEdge(token.to_string()));
            };
            for endpoint in [a, b] {
                if !nodes.contains(&endpoint) {
                    return Err(ParseError::UnknownNode {
                        node: endpoint.to_string(),
                        edge: token.to_string(),
                    });
                }
            }
            let weight = weight_field
                .parse::<Weight>()
                .map_err(|_| ParseError::BadWeight { edge: token.to_string() })?;

            edges.push(EdgeSpec { endpoints: UnorderedPair(a, b), weight });
        }

        Ok(Self { nodes, edges })
    }

    /// The declared nodes, in input order.
    pub fn nodes(&self) -> &[&'a str] {
        &self.nodes
    }

    /// Every edge as written, in input order.
    pub fn edges(&self) -> &[EdgeSpec<'a>] {
        &self.edges
    }

    /// The route start: the first declared node.
    pub fn start(&self) -> &'a str {
        self.nodes[0]
    }

    /// The route end: the last declared node.
    pub fn end(&self) -> &'a str {
        self.nodes[self.nodes.len() - 1]
    }
}

/// Parse unweighted link tokens of the form `a-b` into endpoint pairs.
pub(crate) fn links<'a>(tokens: &[&'a str]) -> Result<Vec<(&'a str, &'a str)>, ParseError> {
    tokens
        .iter()
        .map(|token| {
            token
                .split('-')
                .collect_tuple()
                .filter(|&(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| ParseError::MalformedLink(token.to_string()))
        })
        .collect()
}

/// Parse bracketed rows such as `"[1, 2, 3]"` into a row-major integer matrix.
pub(crate) fn matrix(tokens: &[&str]) -> Result<Array2<i64>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyMatrix);
    }

    let mut cells = Vec::new();
    let mut width = None;
    for token in tokens {
        let inner = token
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| ParseError::MalformedRow(token.to_string()))?;
        let row: Vec<i64> = inner
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<i64>()
                    .map_err(|_| ParseError::BadNumber(field.to_string()))
            })
            .try_collect()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(ParseError::RaggedMatrix { expected, found: row.len() });
            }
            Some(_) => {}
        }
        cells.extend(row);
    }

    // cells.len() is rows * width by construction
    Ok(Array2::from_shape_vec((tokens.len(), width.unwrap_or(0)), cells).unwrap())
}

/// Parse exactly three `(X,Y)` tokens.
pub(crate) fn points(tokens: &[&str]) -> Result<[Point; 3], ParseError> {
    match tokens {
        [a, b, c] => Ok([point(a)?, point(b)?, point(c)?]),
        _ => Err(ParseError::WrongPointCount { found: tokens.len() }),
    }
}

fn point(token: &str) -> Result<Point, ParseError> {
    let malformed = || ParseError::MalformedPoint(token.to_string());
    let inner = token
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (x, y) = inner.split(',').collect_tuple().ok_or_else(malformed)?;

    let coordinate = |field: &str| {
        let field = field.trim();
        field
            .parse::<i64>()
            .map_err(|_| ParseError::BadNumber(field.to_string()))
    };
    Ok(Point { x: coordinate(x)?, y: coordinate(y)? })
}
