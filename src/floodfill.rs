// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Paint the two regions a seam cuts the mask into.
//!
//! On entry the mask holds the seam and nothing else.  Two flood
//! fills, one seeded at the bottom left corner for the first image and
//! one at the top right for the second, label every remaining cell.
//! The fills walk edge-sharing neighbors only.  That asymmetry with
//! the seam is the whole trick: the seam is an 8-connected curve from
//! corner to corner, and such a curve blocks every 4-connected path
//! between the other two corners, so neither fill can leak into the
//! other's territory.  Dropping either side of that pairing breaks
//! the separation argument.
//!
//! The painter trusts its caller.  If the seam does not actually cut
//! the grid, cells are left over or claimed by the wrong fill; that is
//! a seam defect, surfaced by the tests that count unpainted cells,
//! and not something this module turns into a runtime error.

use crate::position::Position;
use crate::stitcher::{Mask, Stitch};
use log::debug;

fn fill_seeds(mask: &Mask) -> (Position, Position) {
    let bottom_left = Position::new(mask.height - 1, 0);
    let top_right = Position::new(0, mask.width - 1);
    (bottom_left, top_right)
}

/// Label every empty cell of `mask` with the image it belongs to.
/// Cells left of the seam get [`Stitch::Image1`], cells right of it
/// get [`Stitch::Image2`].  Idempotent: painting an already painted
/// mask changes nothing, because nothing is empty anymore.
#[cfg(not(feature = "threaded"))]
pub fn paint_regions(mask: &mut Mask) {
    let (bottom_left, top_right) = fill_seeds(mask);
    // If the bottom left corner is not painted, nothing else on that
    // side is either, so seeding the corners suffices.
    let first = flood_fill(mask, bottom_left, Stitch::Image1);
    let second = flood_fill(mask, top_right, Stitch::Image2);
    debug!("painted {} cells Image1, {} cells Image2", first, second);
}

/// Label every empty cell of `mask` with the image it belongs to,
/// running the two region traversals on scoped threads.  The seam
/// guarantees the regions are disjoint, so the traversals only ever
/// read the mask and their results can be applied afterward without
/// stepping on each other.  The output is identical to the sequential
/// build.
#[cfg(feature = "threaded")]
pub fn paint_regions(mask: &mut Mask) {
    let (bottom_left, top_right) = fill_seeds(mask);
    let (first, second) = crossbeam::thread::scope(|scope| {
        let shared = &*mask;
        let one = scope.spawn(move |_| reachable(shared, bottom_left));
        let two = scope.spawn(move |_| reachable(shared, top_right));
        (one.join().unwrap(), two.join().unwrap())
    })
    .unwrap();
    debug!(
        "painted {} cells Image1, {} cells Image2",
        first.len(),
        second.len()
    );
    for position in first {
        mask[position] = Stitch::Image1;
    }
    for position in second {
        mask[position] = Stitch::Image2;
    }
}

/// Depth-first flood fill: pop a cell, and if it is still empty, claim
/// it and queue its four edge-sharing neighbors.  Anything already
/// labeled, the seam included, is a boundary and is left alone.
/// Returns how many cells were claimed.
pub fn flood_fill(mask: &mut Mask, seed: Position, label: Stitch) -> usize {
    let mut painted = 0;
    // A stack rather than a queue because we want to go depth first.
    let mut next_coloring = vec![seed];
    while let Some(position) = next_coloring.pop() {
        if mask[position] != Stitch::Empty {
            continue;
        }
        mask[position] = label;
        painted += 1;
        next_coloring.extend(mask.cardinal_neighbors(position));
    }
    painted
}

/// The read-only twin of [`flood_fill`]: collect the empty cells
/// 4-reachable from `seed` without touching the mask.  Used by the
/// threaded painter, which needs both traversals to see the same
/// unpainted mask.
#[cfg(feature = "threaded")]
fn reachable(mask: &Mask, seed: Position) -> Vec<Position> {
    use crate::twodmap::TwoDimensionalMap;

    let mut visited: TwoDimensionalMap<bool> = TwoDimensionalMap::new(mask.width, mask.height);
    let mut found = Vec::new();
    let mut next_coloring = vec![seed];
    while let Some(position) = next_coloring.pop() {
        if visited[position] || mask[position] != Stitch::Empty {
            continue;
        }
        visited[position] = true;
        found.push(position);
        next_coloring.extend(mask.cardinal_neighbors(position));
    }
    found
}
