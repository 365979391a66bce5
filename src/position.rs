//! A single cell address on the image grid.
//!
//! The coordinate system is the usual computer-graphics one: y grows
//! downward, x grows rightward, and position (y, x) names the pixels
//! image1[y][x] and image2[y][x].  A position has no identity beyond
//! its coordinates.

/// A (row, column) pair.  The derived ordering is row-major (y first,
/// then x), which is also the order used to settle ties between
/// equally distant cells in the seam search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row, counted from the top.
    pub y: u32,
    /// Column, counted from the left.
    pub x: u32,
}

impl Position {
    /// Build a position from a (row, column) pair.  The fields are
    /// unsigned, so a negative coordinate is unrepresentable rather
    /// than merely rejected.
    pub fn new(y: u32, x: u32) -> Self {
        Position { y, x }
    }

    /// True when `other` is one of this cell's eight neighbors.
    /// Diagonal contact counts; a cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dy = if self.y > other.y {
            self.y - other.y
        } else {
            other.y - self.y
        };
        let dx = if self.x > other.x {
            self.x - other.x
        } else {
            other.x - self.x
        };
        dy <= 1 && dx <= 1 && (dy, dx) != (0, 0)
    }
}
