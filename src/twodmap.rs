use crate::position::Position;
use std::ops::{Index, IndexMut};

/// Defines the basic grid: an addressable two-dimensional field
/// containing an object that represents one of several possible
/// objects during processing: an f64 for the distance map, an optional
/// position for the predecessor map, or a label for the composite
/// mask.  The grid also knows how to enumerate a cell's neighbors,
/// since it is the one thing that knows where the edges are.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at the content type's default.
    /// A zero-sized map is a contract violation on the caller's part,
    /// not a runtime condition, so it panics.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "a map must be at least 1x1, got {}x{}",
            width,
            height
        );
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Define a new map with every cell set to `value`.  The distance
    /// map wants to start at infinity, which is nobody's default.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        let mut map = TwoDimensionalMap::new(width, height);
        for cell in map.cells.iter_mut() {
            *cell = value;
        }
        map
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, p: Position) -> usize {
        assert!(
            p.x < self.width && p.y < self.height,
            "position ({}, {}) is outside a {}x{} map",
            p.y,
            p.x,
            self.width,
            self.height
        );
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Count the cells for which `pred` holds.  Mostly here so callers
    /// can check that a painted mask has nothing left unpainted.
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&P) -> bool,
    {
        self.cells.iter().filter(|cell| pred(*cell)).count()
    }

    /// The four edge-sharing neighbors of `p`: left, right, top,
    /// bottom, each present only when it is in bounds.  The fill
    /// traverses these.  The enumeration order is fixed and part of
    /// the crate's determinism story.
    pub fn cardinal_neighbors(&self, p: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if p.x > 0 {
            neighbors.push(Position::new(p.y, p.x - 1));
        }
        if p.x + 1 < self.width {
            neighbors.push(Position::new(p.y, p.x + 1));
        }
        if p.y > 0 {
            neighbors.push(Position::new(p.y - 1, p.x));
        }
        if p.y + 1 < self.height {
            neighbors.push(Position::new(p.y + 1, p.x));
        }
        neighbors
    }

    /// All eight neighbors of `p`: the four cardinals followed by the
    /// four diagonals, each present only when it is in bounds.  The
    /// seam search traverses these.  Out-of-bounds positions are never
    /// generated here, which is what lets the rest of the crate index
    /// maps without checking.
    pub fn all_neighbors(&self, p: Position) -> Vec<Position> {
        let mut neighbors = self.cardinal_neighbors(p);
        neighbors.reserve(4);
        if p.x > 0 && p.y > 0 {
            neighbors.push(Position::new(p.y - 1, p.x - 1));
        }
        if p.x > 0 && p.y + 1 < self.height {
            neighbors.push(Position::new(p.y + 1, p.x - 1));
        }
        if p.x + 1 < self.width && p.y > 0 {
            neighbors.push(Position::new(p.y - 1, p.x + 1));
        }
        if p.x + 1 < self.width && p.y + 1 < self.height {
            neighbors.push(Position::new(p.y + 1, p.x + 1));
        }
        neighbors
    }
}

impl<P: Default + Copy> Index<Position> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, p: Position) -> &P {
        let index = self.get_index(p);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<Position> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, p: Position) -> &mut P {
        let index = self.get_index(p);
        &mut self.cells[index]
    }
}
