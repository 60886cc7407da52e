use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

use crate::edge_detect::Axis;

/// Error type for the various reasons why a source image could not be
/// cropped. All of these are per-file errors: the batch records them and
/// moves on to the next file.
#[derive(Error, Debug)]
pub enum CropError {
    /// One or more directional scans reached the image midpoint without
    /// finding a dark-majority row/column. Every failed side is named.
    #[error("no card edge found on side(s): {}", .0.iter().join(", "))]
    EdgesNotFound(Vec<Axis>),

    /// The source image could not be opened or decoded.
    #[error("failed to read image {}: {error}", .src_path.display())]
    Decode {
        src_path: PathBuf,
        #[source]
        error: image::ImageError,
    },

    /// The cropped image could not be encoded or written.
    #[error("failed to write image {}: {error}", .dest_path.display())]
    Encode {
        dest_path: PathBuf,
        #[source]
        error: image::ImageError,
    },

    /// A filesystem operation outside image decode/encode failed.
    #[error("io error at {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
