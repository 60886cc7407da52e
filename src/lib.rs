#![allow(clippy::let_and_return)]
#![allow(clippy::len_without_is_empty)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::todo)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::unimplemented)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]
#![allow(clippy::doc_markdown)]

//! # Overview
//! `card_crop_lib` crops card-art images down to the visible card boundary.
//! The card is assumed to sit on a background lighter than its dark frame;
//! each side of the image is scanned inwards for the first row/column where
//! a majority of a few sampled pixels are dark, and the image is cropped to
//! the rectangle spanned by the four detected positions (the boundary pixels
//! themselves are retained).
//!
//! # High Level API
//! Detect a crop box on an in-memory image:
//! ```rust
//! use card_crop_lib::{compute_crop_box, crop_frame, EdgeScanConfig};
//! use image::{Rgb, RgbImage};
//!
//! // A dark 80x80 card inset by a 10px light margin.
//! let img = RgbImage::from_fn(100, 100, |x, y| {
//!     let on_card = (10..90).contains(&x) && (10..90).contains(&y);
//!     if on_card { Rgb([20, 20, 20]) } else { Rgb([240, 240, 240]) }
//! });
//!
//! let cropbox = compute_crop_box(&img, &EdgeScanConfig::default()).unwrap();
//! assert_eq!((cropbox.left, cropbox.top, cropbox.right, cropbox.bottom), (10, 10, 89, 89));
//!
//! let card = crop_frame(&img, &cropbox);
//! assert_eq!(card.dimensions(), (80, 80));
//! ```
//!
//! To process a whole directory of images, configure a
//! [`BatchCropper`](crate::BatchCropper) and run it; per-file failures are
//! collected into the returned [`BatchReport`](crate::BatchReport) rather
//! than aborting the batch.

mod batch;
mod crop;
mod edge_detect;
mod errors;

pub use batch::{
    crop_and_save, BatchConfig, BatchCropper, BatchReport, CropRecord, FailureRecord,
    DEFAULT_INPUT_SUFFIX, DEFAULT_OUTPUT_SUFFIX,
};
pub use crop::{crop_frame, CropBox};
pub use edge_detect::{compute_crop_box, find_edge, Axis, EdgeScanConfig, DEFAULT_DARK_THRESHOLD};
pub use errors::CropError;
