//! The ways a stitch can go wrong before or during the search.
//!
//! Everything here is a boundary failure: the inputs were unusable, or
//! the search ran out of graph.  Contract violations deeper in the
//! library (indexing outside a map, building a zero-sized map) are
//! programmer errors and panic instead.

use failure::Fail;

/// Errors reported by [`Stitcher`](crate::Stitcher) operations.
#[derive(Debug, Fail, PartialEq)]
pub enum StitchError {
    /// The two images do not share the same dimensions.  Reported
    /// before any algorithm runs.
    #[fail(
        display = "image dimensions {}x{} and {}x{} do not match",
        _0, _1, _2, _3
    )]
    DimensionMismatch(u32, u32, u32, u32),

    /// One of the dimensions is zero.  A seam needs at least one pixel
    /// to run through.
    #[fail(display = "images must be at least one pixel in each dimension")]
    EmptyImage,

    /// The search exhausted its queue without reaching the lower right
    /// corner.  Every rectangular grid is fully 8-connected, so seeing
    /// this means the inputs were malformed in a way the dimension
    /// checks could not catch.
    #[fail(display = "no seam exists from the upper left to the lower right corner")]
    NoSeam,
}
