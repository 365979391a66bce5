// #![deny(missing_docs)]

extern crate image;

pub mod error;
pub use error::StitchError;

pub mod position;
pub use position::Position;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelpairs;
pub use pixelpairs::{pixel_sq_distance, pixel_sq_distance_luma};

mod seamfinder;

pub mod floodfill;
pub use floodfill::{flood_fill, paint_regions};

pub mod stitcher;
pub use stitcher::{Mask, Stitch, Stitcher};

pub mod dump;
pub use dump::mask_to_image;
