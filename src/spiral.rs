use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::parse::{self, ParseError};

/// One step direction of the clockwise spiral walk.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
enum SpiralStep {
    Right,
    Down,
    Left,
    Up,
}

impl SpiralStep {
    /// Attempt the step from `index`. Underflow wraps to a huge index, which
    /// the later bounds-checked lookup treats as out of the matrix.
    fn attempt_from(&self, index: (usize, usize)) -> (usize, usize) {
        let (row, col) = index;
        match self {
            Self::Right => (row, col.wrapping_add(1)),
            Self::Down => (row.wrapping_add(1), col),
            Self::Left => (row, col.wrapping_sub(1)),
            Self::Up => (row.wrapping_sub(1), col),
        }
    }

    /// The direction a clockwise spiral continues in once this one is blocked.
    fn turn(&self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }
}

/// Solve the matrix spiral challenge: read `tokens` as the rows of an integer
/// matrix, each of the form `"[1, 2, 3]"`, and return its elements in
/// clockwise spiral order starting from the top-left corner, joined by commas.
///
/// Rows must agree on width; ragged or empty input is a [`ParseError`].
///
/// ```
/// use waypath::matrix_spiral;
///
/// let order = matrix_spiral(&["[1, 2, 3]", "[4, 5, 6]", "[7, 8, 9]"]).unwrap();
/// assert_eq!(order, "1,2,3,6,9,8,7,4,5");
/// ```
pub fn matrix_spiral(tokens: &[&str]) -> Result<String, ParseError> {
    let matrix = parse::matrix(tokens)?;
    let mut visited = Array2::from_elem(matrix.raw_dim(), false);

    let mut order = Vec::with_capacity(matrix.len());
    let mut position = (0, 0);
    let mut direction = SpiralStep::Right;

    order.push(matrix[position]);
    visited[position] = true;

    for _ in 1..matrix.len() {
        // at most one full turn before the walk can continue
        for _ in 0..SpiralStep::VARIANTS.len() {
            let candidate = direction.attempt_from(position);
            if visited.get(candidate) == Some(&false) {
                position = candidate;
                break;
            }
            direction = direction.turn();
        }

        order.push(matrix[position]);
        visited[position] = true;
    }

    Ok(order.iter().join(","))
}
