// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the cost of a pixel pair
//!
//! Given the pixel from each image at the same position, the cost
//! between them is the relative distance between the colors that make
//! them up.  A cheap cell is one where the two images already agree,
//! which is exactly where we want the seam to run.  Two metrics are
//! provided: the classic d(R²) + d(G²) + d(B²), and a simple
//! convert-to-grayscale d(L²).  Any pure, deterministic, non-negative
//! function of a pixel pair will do.

use image::{Pixel, Primitive};
use num_traits::NumCast;

/// The type signature of our cost pair function.
pub type PixelPair<P> = dyn Fn(&P, &P) -> f64;

/// (Pixel, Pixel) -> Cost
///
/// The default metric: the difference between each of the RGB
/// channels, squared, then summed.
#[inline]
pub fn pixel_sq_distance<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (rgb1, rgb2) = (p1.to_rgb(), p2.to_rgb());
    rgb1.channels()
        .iter()
        .zip(rgb2.channels().iter())
        .map(|(c1, c2)| {
            let c1: f64 = NumCast::from(*c1).unwrap();
            let c2: f64 = NumCast::from(*c2).unwrap();
            (c1 - c2) * (c1 - c2)
        })
        .sum()
}

/// (Pixel, Pixel) -> Cost
///
/// The cheap metric: collapse both pixels to their luma channel and
/// square the difference.
#[inline]
pub fn pixel_sq_distance_luma<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    #[inline]
    fn lumachannel<S, P>(p: &P) -> f64
    where
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let c = p.to_luma().channels().to_owned();
        NumCast::from(c[0]).unwrap()
    }

    let css = lumachannel(p1) - lumachannel(p2);
    css * css
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Pixel, Rgb};

    #[test]
    fn identical_pixels_cost_nothing() {
        let p = *Rgb::from_slice(&[12u8, 200, 33]);
        assert_eq!(pixel_sq_distance(&p, &p), 0.0);
        assert_eq!(pixel_sq_distance_luma(&p, &p), 0.0);
    }

    #[test]
    fn rgb_distance_sums_the_squared_channels() {
        let p1 = *Rgb::from_slice(&[1u8, 2, 3]);
        let p2 = *Rgb::from_slice(&[4u8, 6, 8]);
        // 3² + 4² + 5²
        assert_eq!(pixel_sq_distance(&p1, &p2), 50.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let p1 = *Rgb::from_slice(&[9u8, 0, 255]);
        let p2 = *Rgb::from_slice(&[0u8, 17, 4]);
        assert_eq!(pixel_sq_distance(&p1, &p2), pixel_sq_distance(&p2, &p1));
    }

    #[test]
    fn luma_distance_squares_the_gray_difference() {
        let p1 = *Luma::from_slice(&[9u8]);
        let p2 = *Luma::from_slice(&[13u8]);
        assert_eq!(pixel_sq_distance_luma(&p1, &p2), 16.0);
    }
}
