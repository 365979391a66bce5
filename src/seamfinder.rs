// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest corner-to-corner seam between two images.
//!
//! The grid is an implicit graph: every pixel position is a vertex,
//! and every vertex is connected to its eight in-bounds neighbors.
//! The weight lives on the vertex, not the edge: stepping *into* a
//! cell costs whatever the two images disagree by at that cell, no
//! matter which direction you arrived from.  That is deliberately not
//! the textbook edge-weighted formulation, and it changes which paths
//! win, so don't "fix" it.
//!
//! Dijkstra with a lazy-deletion heap does the rest.  Rust's
//! `BinaryHeap` has no decrease-key, so a relaxation just pushes a
//! fresh entry and the old one is recognized as stale when it
//! eventually pops: its recorded distance no longer matches the
//! distance map.  The search stops when the target corner is itself
//! popped, because merely having discovered it proves nothing under
//! this discipline.

use crate::error::StitchError;
use crate::position::Position;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A pending vertex, paired with the distance it was queued at.  If
/// the vertex has been relaxed again since, the recorded distance is
/// out of date and the entry is dead weight to be skipped on arrival.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Candidate {
    dist: f64,
    pos: Position,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // BinaryHeap is a max-heap, so flip the comparison to pop the
    // nearest candidate first.  Equal distances fall back to row-major
    // position order, which keeps the whole search deterministic and
    // keeps this Ord total: the distances in play are sums of finite
    // non-negative costs, never NaN.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Return the sequence of positions on the seam.  The first position
/// is (0, 0), the last is (height - 1, width - 1), and each position
/// is 8-adjacent to its predecessor.  The caller has already checked
/// that both images share the same nonzero dimensions.
///
/// For a single-pixel image the start is the end and the seam is that
/// one cell.
pub(crate) fn find_seam<I, P, S, C>(
    image1: &I,
    image2: &I,
    cost: C,
) -> Result<Vec<Position>, StitchError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    C: Fn(&P, &P) -> f64,
{
    let (width, height) = image1.dimensions();
    let origin = Position::new(0, 0);
    let target = Position::new(height - 1, width - 1);

    // All cells except the start begin at infinity.  Each call owns
    // these maps outright, so concurrent seam searches never share
    // state.
    let mut dist: TwoDimensionalMap<f64> = TwoDimensionalMap::filled(width, height, f64::INFINITY);
    let mut previous: TwoDimensionalMap<Option<Position>> = TwoDimensionalMap::new(width, height);
    let mut pending = BinaryHeap::new();

    dist[origin] = 0.0;
    pending.push(Candidate {
        dist: 0.0,
        pos: origin,
    });

    while let Some(Candidate { dist: reached, pos }) = pending.pop() {
        if reached > dist[pos] {
            // Stale entry, superseded by a later relaxation.
            continue;
        }
        if pos == target {
            let seam = walk_back(&previous, target);
            debug!("seam of {} cells, total cost {}", seam.len(), reached);
            return Ok(seam);
        }
        for neighbor in dist.all_neighbors(pos) {
            let step = cost(
                &image1.get_pixel(neighbor.x, neighbor.y),
                &image2.get_pixel(neighbor.x, neighbor.y),
            );
            let candidate = reached + step;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                previous[neighbor] = Some(pos);
                pending.push(Candidate {
                    dist: candidate,
                    pos: neighbor,
                });
            }
        }
    }

    // Every cell of a rectangular grid is reachable from the corner,
    // so an empty queue without the target means the caller handed us
    // something the dimension checks could not catch.
    Err(StitchError::NoSeam)
}

// Walk the predecessor map backward from the target, then reverse the
// collected cells so the seam reads start-to-end.
fn walk_back(previous: &TwoDimensionalMap<Option<Position>>, target: Position) -> Vec<Position> {
    let mut seam = vec![target];
    let mut current = target;
    while let Some(parent) = previous[current] {
        seam.push(parent);
        current = parent;
    }
    seam.reverse();
    seam
}
