#![warn(missing_docs)]

//! # `waypath`
//!
//! Solvers for a family of array-encoded coding challenges, built around one
//! non-trivial core: finding the minimum-weight path through an undirected
//! weighted graph described as a flat list of string tokens.
//! Begin by calling [`weighted_path()`] with the challenge token list, or parse a
//! [`NetworkSpec`](parse::NetworkSpec) yourself and build a [`Network`] for typed
//! access to the resulting [`Route`].
//!
//! The remaining challenges are strictly simpler peers and live in their own modules:
//! graph diameter ([`farthest_nodes()`]), spiral matrix traversal ([`matrix_spiral()`]),
//! point-side classification ([`three_points()`]) and rain water trapping
//! ([`trapping_water()`]). Every solver is a pure function; nothing in this crate
//! holds state across calls.
//!
//! # Internals
//! The core challenge encodes a graph as `["<K>", <K node names...>, "A|B|W", ...]`,
//! where the first named node is the route start and the last is the route end.
//! Parsing, searching, and formatting are deliberately separate phases:
//! [`parse`] owns the token micro-grammar and rejects malformed input with a
//! descriptive [`ParseError`] instead of computing on corrupted state,
//! [`Network`] holds the finished undirected graph, and a priority-queue
//! Dijkstra search produces the route.
//!
//! The search is the lazy-deletion variant: a node may sit in the queue several
//! times at different tentative distances, and entries that no longer match the
//! node's best known distance are discarded when they surface. Ties between
//! equal-weight routes are broken deterministically; see
//! [`Network::shortest_route`].

pub use diameter::farthest_nodes;
pub use geometry::{three_points, Side};
pub use network::{weighted_path, Network, Route, RouteOutcome, Weight};
pub use parse::ParseError;
pub use spiral::matrix_spiral;
pub use water::trapping_water;

pub mod parse;
pub(crate) mod diameter;
pub(crate) mod geometry;
pub(crate) mod network;
pub(crate) mod search;
pub(crate) mod spiral;
pub(crate) mod water;
