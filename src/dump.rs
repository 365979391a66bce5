//! Render a mask as a grayscale image.
//!
//! Purely a debugging and driver aid: each label gets a distinct
//! shade so the seam and the two regions can be eyeballed.  Nothing
//! in the algorithms depends on this module.

use crate::position::Position;
use crate::stitcher::{Mask, Stitch};
use image::{GrayImage, ImageBuffer, Luma, Pixel};
use itertools::iproduct;

/// One shade per label: the first image's region dark, the second's
/// light, the seam at full white, and anything unpainted at black so
/// a broken mask is obvious at a glance.
fn shade(label: Stitch) -> u8 {
    match label {
        Stitch::Empty => 0,
        Stitch::Image1 => 64,
        Stitch::Image2 => 192,
        Stitch::Seam => 255,
    }
}

/// Map a mask to a viewable graymap of the same dimensions.
pub fn mask_to_image(mask: &Mask) -> GrayImage {
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(mask.width, mask.height);
    for (y, x) in iproduct!(0..mask.height, 0..mask.width) {
        let cs = [shade(mask[Position::new(y, x)])];
        let c = Pixel::from_slice(&cs);
        out.put_pixel(x, y, *c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn shades_follow_the_labels() {
        let mut mask: Mask = TwoDimensionalMap::new(2, 2);
        mask[Position::new(0, 0)] = Stitch::Seam;
        mask[Position::new(0, 1)] = Stitch::Image2;
        mask[Position::new(1, 0)] = Stitch::Image1;
        mask[Position::new(1, 1)] = Stitch::Seam;
        let img = mask_to_image(&mask);
        assert_eq!(img.get_pixel(0, 0).channels()[0], 255);
        assert_eq!(img.get_pixel(1, 0).channels()[0], 192);
        assert_eq!(img.get_pixel(0, 1).channels()[0], 64);
        assert_eq!(img.get_pixel(1, 1).channels()[0], 255);
    }

    #[test]
    fn unpainted_cells_show_up_black() {
        let mask: Mask = TwoDimensionalMap::new(3, 1);
        let img = mask_to_image(&mask);
        assert!(img.pixels().all(|p| p.channels()[0] == 0));
    }
}
