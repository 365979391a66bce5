// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Stitch - the main entry point
//!
//! The orchestration is short: find the seam, mark it on a fresh
//! mask, and let the flood fills claim everything on either side.
//! The seam search and the painter are public in their own right so
//! they can be exercised separately, but [`Stitcher::stitch`] is the
//! one call an external consumer needs.

use crate::error::StitchError;
use crate::floodfill::paint_regions;
use crate::pixelpairs::pixel_sq_distance;
use crate::position::Position;
use crate::seamfinder::find_seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};

/// What a mask cell says about the pixel at its position: not decided
/// yet, on the seam itself, or owned by one of the two source images.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stitch {
    /// Not yet claimed by anything.  A finished mask has none of
    /// these left.
    Empty,
    /// On the seam.  How a consumer renders these is its own affair;
    /// blending the two sources is the usual choice.
    Seam,
    /// Take this pixel from the first image.
    Image1,
    /// Take this pixel from the second image.
    Image2,
}

impl Default for Stitch {
    fn default() -> Self {
        Stitch::Empty
    }
}

/// The composite mask: one [`Stitch`] label per pixel position.
pub type Mask = TwoDimensionalMap<Stitch>;

/// A struct for holding the pair of images to be stitched.
///
/// Construction is where the boundary checks live; once a `Stitcher`
/// exists, its images are known to share the same nonzero dimensions
/// and the algorithms stop worrying about it.
pub struct Stitcher<'a, I> {
    image1: &'a I,
    image2: &'a I,
}

impl<'a, I, P, S> Stitcher<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes references to the two images and holds onto them,
    /// rejecting pairs the algorithms have no defined answer for.
    pub fn new(image1: &'a I, image2: &'a I) -> Result<Self, StitchError> {
        let (w1, h1) = image1.dimensions();
        let (w2, h2) = image2.dimensions();
        if (w1, h1) != (w2, h2) {
            return Err(StitchError::DimensionMismatch(w1, h1, w2, h2));
        }
        if w1 == 0 || h1 == 0 {
            return Err(StitchError::EmptyImage);
        }
        Ok(Stitcher { image1, image2 })
    }

    /// The seam: the cheapest 8-connected run of positions from the
    /// upper left corner to the lower right, where "cheap" means the
    /// two images look most alike, under the default RGB metric.
    pub fn seam(&self) -> Result<Vec<Position>, StitchError> {
        self.seam_with(pixel_sq_distance::<P, S>)
    }

    /// The seam under a caller-supplied cost metric.  Any pure,
    /// deterministic, non-negative function of a pixel pair satisfies
    /// the search.
    pub fn seam_with<C>(&self, cost: C) -> Result<Vec<Position>, StitchError>
    where
        C: Fn(&P, &P) -> f64,
    {
        find_seam(self.image1, self.image2, cost)
    }

    /// Return the mask to stitch the two images together.  Cells left
    /// of the seam come out [`Stitch::Image1`], cells right of it
    /// [`Stitch::Image2`], and the seam itself [`Stitch::Seam`].  The
    /// seam can wind however it likes on the way down, so "left" and
    /// "right" are topological, not columnar.
    pub fn stitch(&self) -> Result<Mask, StitchError> {
        self.stitch_with(pixel_sq_distance::<P, S>)
    }

    /// [`Stitcher::stitch`] under a caller-supplied cost metric.
    pub fn stitch_with<C>(&self, cost: C) -> Result<Mask, StitchError>
    where
        C: Fn(&P, &P) -> f64,
    {
        let seam = self.seam_with(cost)?;
        let (width, height) = self.image1.dimensions();
        let mut mask = TwoDimensionalMap::new(width, height);
        for position in &seam {
            mask[*position] = Stitch::Seam;
        }
        paint_regions(&mut mask);
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelpairs::pixel_sq_distance_luma;
    use image::{GrayImage, ImageBuffer, Luma};

    fn gray(width: u32, height: u32, data: &[u8]) -> GrayImage {
        ImageBuffer::from_raw(width, height, data.to_vec()).unwrap()
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let left = gray(2, 2, &[0; 4]);
        let right = gray(3, 2, &[0; 6]);
        assert_eq!(
            Stitcher::new(&left, &right).err(),
            Some(StitchError::DimensionMismatch(2, 2, 3, 2))
        );
    }

    #[test]
    fn the_mask_is_fully_painted() {
        let data1: Vec<u8> = (0..42).map(|i| (i * 5 % 251) as u8).collect();
        let data2: Vec<u8> = (0..42).map(|i| (i * 3 % 251) as u8).collect();
        let left = gray(7, 6, &data1);
        let right = gray(7, 6, &data2);
        let mask = Stitcher::new(&left, &right).unwrap().stitch().unwrap();
        assert_eq!(mask.width, 7);
        assert_eq!(mask.height, 6);
        assert_eq!(mask.count(|c| *c == Stitch::Empty), 0);
    }

    #[test]
    fn the_mask_marks_exactly_the_seam_cells() {
        let data1: Vec<u8> = (0..20).map(|i| (i * 13 % 251) as u8).collect();
        let data2: Vec<u8> = (0..20).map(|i| (i * 17 % 251) as u8).collect();
        let left = gray(5, 4, &data1);
        let right = gray(5, 4, &data2);
        let stitcher = Stitcher::new(&left, &right).unwrap();
        let seam = stitcher.seam().unwrap();
        let mask = stitcher.stitch().unwrap();
        assert_eq!(mask.count(|c| *c == Stitch::Seam), seam.len());
        for position in &seam {
            assert_eq!(mask[*position], Stitch::Seam);
        }
    }

    #[test]
    fn the_seed_corners_end_up_on_opposite_sides() {
        let data1: Vec<u8> = (0..36).map(|i| (i * 7 % 251) as u8).collect();
        let data2: Vec<u8> = (0..36).map(|i| (i * 19 % 251) as u8).collect();
        let left = gray(6, 6, &data1);
        let right = gray(6, 6, &data2);
        let mask = Stitcher::new(&left, &right).unwrap().stitch().unwrap();
        let bottom_left = mask[Position::new(5, 0)];
        let top_right = mask[Position::new(0, 5)];
        assert!(bottom_left == Stitch::Image1 || bottom_left == Stitch::Seam);
        assert!(top_right == Stitch::Image2 || top_right == Stitch::Seam);
    }

    #[test]
    fn a_single_pixel_pair_stitches_to_a_single_seam_cell() {
        let left = gray(1, 1, &[40]);
        let right = gray(1, 1, &[200]);
        let mask = Stitcher::new(&left, &right).unwrap().stitch().unwrap();
        assert_eq!(mask[Position::new(0, 0)], Stitch::Seam);
        assert_eq!(mask.count(|c| *c == Stitch::Empty), 0);
    }

    #[test]
    fn a_custom_metric_is_honored() {
        // A metric that only punishes the top row, looked up by the
        // left pixel's luma, which we set up to be the flat index.
        #[rustfmt::skip]
        let cost_map = [
            0.0, 9.0, 9.0,
            0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
        ];
        let index_data: Vec<u8> = (0u8..9).collect();
        let indexed = gray(3, 3, &index_data);
        let stitcher = Stitcher::new(&indexed, &indexed).unwrap();
        let seam = stitcher
            .seam_with(|p1: &Luma<u8>, _p2: &Luma<u8>| cost_map[p1.channels()[0] as usize])
            .unwrap();
        assert!(!seam.contains(&Position::new(0, 1)));
        assert!(!seam.contains(&Position::new(0, 2)));
        assert_eq!(seam.first(), Some(&Position::new(0, 0)));
        assert_eq!(seam.last(), Some(&Position::new(2, 2)));
    }

    #[test]
    fn stitch_agrees_with_seam_under_the_same_metric() {
        let data1: Vec<u8> = (0..24).map(|i| (i * 31 % 251) as u8).collect();
        let data2: Vec<u8> = (0..24).map(|i| (i * 37 % 251) as u8).collect();
        let left = gray(4, 6, &data1);
        let right = gray(4, 6, &data2);
        let stitcher = Stitcher::new(&left, &right).unwrap();
        let seam = stitcher.seam_with(pixel_sq_distance_luma).unwrap();
        let mask = stitcher.stitch_with(pixel_sq_distance_luma).unwrap();
        for position in &seam {
            assert_eq!(mask[*position], Stitch::Seam);
        }
    }
}
