use strum::Display;

use crate::parse::{self, ParseError};

/// A point on the integer lattice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i64,
    pub(crate) y: i64,
}

/// The side of a directed line on which a query point falls.
///
/// Displays in the challenge's lowercase answer form: `left`, `right`, or
/// `neither`.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Strictly to the left of the line, facing from the first point toward the second.
    Left,
    /// Strictly to the right of the line.
    Right,
    /// Exactly on the line.
    Neither,
}

/// Solve the three points challenge: `tokens` holds exactly three `(X,Y)`
/// points; classify the third against the infinite line through the first
/// two, directed from the first toward the second.
///
/// The classification is the sign of the z component of the cross product
/// `(b - a) × (q - a)`: positive means `q` lies to the left, negative to the
/// right, and zero on the line (including when the first two points
/// coincide).
///
/// ```
/// use waypath::{three_points, Side};
///
/// let side = three_points(&["(1,1)", "(3,3)", "(2,0)"]).unwrap();
/// assert_eq!(side, Side::Right);
/// assert_eq!(side.to_string(), "right");
/// ```
pub fn three_points(tokens: &[&str]) -> Result<Side, ParseError> {
    let [a, b, query] = parse::points(tokens)?;

    let cross = (b.x - a.x) * (query.y - a.y) - (b.y - a.y) * (query.x - a.x);
    Ok(match cross.signum() {
        1 => Side::Left,
        -1 => Side::Right,
        _ => Side::Neither,
    })
}
