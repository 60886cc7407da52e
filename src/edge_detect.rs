use image::{Rgb, RgbImage};

use crate::{crop::CropBox, errors::CropError};

/// Luminance below this value counts as "dark".
pub const DEFAULT_DARK_THRESHOLD: u8 = 60;

//Perpendicular sample offsets, as fractions of the perpendicular dimension.
//Left/right scans sample 4 points down the column, top/bottom scans sample
//3 points across the row.
const COLUMN_SAMPLE_FRACTIONS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];
const ROW_SAMPLE_FRACTIONS: [f64; 3] = [0.3, 0.5, 0.7];

/// The four sides an edge scan can start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Left,
    Right,
    Top,
    Bottom,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Left => "left",
            Axis::Right => "right",
            Axis::Top => "top",
            Axis::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Tuning knobs for the edge scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeScanConfig {
    /// A sampled pixel is dark when its mean of R, G, B is strictly below
    /// this value.
    pub threshold: u8,

    /// How many of the sampled points must be dark before a row/column is
    /// declared the card edge.
    pub min_dark_samples: usize,
}

impl Default for EdgeScanConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DARK_THRESHOLD,
            min_dark_samples: 2,
        }
    }
}

/// Scan from one side of `frame` towards the centre and return the first
/// row/column where at least `cfg.min_dark_samples` of the fixed sample
/// points are dark.
///
/// The scan stops at the midpoint of the scanned dimension. `None` means no
/// qualifying row/column exists on that side; a card darker than its
/// background, or one covering more than half the image in the scanned
/// dimension, is undetectable by this heuristic.
#[must_use]
pub fn find_edge(frame: &RgbImage, axis: Axis, cfg: &EdgeScanConfig) -> Option<u32> {
    use Axis::*;

    let (width, height) = frame.dimensions();

    let fractions: &[f64] = match axis {
        Left | Right => &COLUMN_SAMPLE_FRACTIONS,
        Top | Bottom => &ROW_SAMPLE_FRACTIONS,
    };

    //count the dark sample points in the row/column at idx
    let dark_samples = |idx: u32| {
        fractions
            .iter()
            .filter(|frac| {
                let (x, y) = match axis {
                    Left | Right => (idx, (f64::from(height) * **frac) as u32),
                    Top | Bottom => ((f64::from(width) * **frac) as u32, idx),
                };
                let Rgb([r, g, b]) = *frame.get_pixel(x, y);
                let luminance = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
                luminance < u32::from(cfg.threshold)
            })
            .count()
    };

    //candidate rows/columns in scan order, from the side towards the
    //centre, midpoint excluded
    #[rustfmt::skip]
    let mut candidates: Box<dyn Iterator<Item = u32>> = match axis {
        Left   => Box::new(0..width / 2),
        Right  => Box::new((width / 2 + 1..width).rev()),
        Top    => Box::new(0..height / 2),
        Bottom => Box::new((height / 2 + 1..height).rev()),
    };

    //first qualifying position wins (the one closest to the image edge)
    candidates.find(|&idx| dark_samples(idx) >= cfg.min_dark_samples)
}

/// Run [`find_edge`] for all four sides and combine the results into a
/// [`CropBox`]. If any side fails, every failed side is named in the
/// returned [`CropError::EdgesNotFound`].
pub fn compute_crop_box(frame: &RgbImage, cfg: &EdgeScanConfig) -> Result<CropBox, CropError> {
    use Axis::*;

    let left = find_edge(frame, Left, cfg);
    let right = find_edge(frame, Right, cfg);
    let top = find_edge(frame, Top, cfg);
    let bottom = find_edge(frame, Bottom, cfg);

    match (left, right, top, bottom) {
        (Some(left), Some(right), Some(top), Some(bottom)) => Ok(CropBox::from_edge_positions(
            frame.dimensions(),
            left,
            right,
            top,
            bottom,
        )),
        _ => {
            let mut missing = Vec::new();
            for (axis, position) in [(Left, left), (Right, right), (Top, top), (Bottom, bottom)] {
                if position.is_none() {
                    missing.push(axis);
                }
            }
            Err(CropError::EdgesNotFound(missing))
        }
    }
}
