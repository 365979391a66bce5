use pnmstitch::{mask_to_image, Position, Stitch, Stitcher};
use std::fs;
use std::io;
use std::io::BufReader;

extern crate clap;
extern crate image;

use clap::{App, Arg};
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::{load, ColorType, ImageFormat, Pixel, RgbImage};

fn load_pixmap(path: &str) -> RgbImage {
    let rdr = BufReader::new(fs::File::open(path).unwrap());
    load(rdr, ImageFormat::PNM).unwrap().to_rgb()
}

fn main() {
    let matches = App::new("pnmstitch")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam-based stitching for portable anymap")
        .arg(
            Arg::with_name("left")
                .help("The first image, used left of the seam")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("right")
                .help("The second image, used right of the seam")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("mask")
                .long("mask")
                .help("Emit the mask as a graymap instead of the stitched image"),
        )
        .get_matches();

    let left = load_pixmap(matches.value_of("left").unwrap());
    let right = load_pixmap(matches.value_of("right").unwrap());
    let (width, height) = left.dimensions();

    let stitcher = Stitcher::new(&left, &right).expect("images must share nonzero dimensions");
    let mask = stitcher.stitch().expect("no seam between these images");

    if matches.is_present("mask") {
        let out = mask_to_image(&mask);
        PNMEncoder::new(io::stdout())
            .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary))
            .encode(
                out.into_flat_samples().as_slice(),
                width,
                height,
                ColorType::Gray(8),
            )
            .unwrap();
        return;
    }

    let mut out = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let pixel = match mask[Position::new(y, x)] {
                Stitch::Image2 => *right.get_pixel(x, y),
                // On the seam the two images agree as much as they
                // ever will; split the difference channel by channel.
                Stitch::Seam => left
                    .get_pixel(x, y)
                    .map2(right.get_pixel(x, y), |a, b| {
                        ((u16::from(a) + u16::from(b)) / 2) as u8
                    }),
                _ => *left.get_pixel(x, y),
            };
            out.put_pixel(x, y, pixel);
        }
    }

    PNMEncoder::new(io::stdout())
        .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary))
        .encode(
            out.into_flat_samples().as_slice(),
            width,
            height,
            ColorType::RGB(8),
        )
        .unwrap();
}
