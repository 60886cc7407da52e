use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbImage;
use log::{info, warn};
use serde::Serialize;

use crate::{
    crop::{crop_frame, CropBox},
    edge_detect::{compute_crop_box, EdgeScanConfig},
    errors::CropError,
};

/// Source images are selected by this filename suffix.
pub const DEFAULT_INPUT_SUFFIX: &str = "_sexy_pixel.png";

/// Output filenames replace the input suffix with this one.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_card.png";

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_suffix: String,
    pub output_suffix: String,
    pub scan: EdgeScanConfig,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            input_suffix: DEFAULT_INPUT_SUFFIX.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            scan: EdgeScanConfig::default(),
        }
    }
}

/// One successfully cropped image.
#[derive(Debug, Clone, Serialize)]
pub struct CropRecord {
    pub src_path: PathBuf,
    pub dest_path: PathBuf,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub out_width: u32,
    pub out_height: u32,
}

/// One image that could not be cropped, with the rendered reason.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub src_path: PathBuf,
    pub error: String,
}

/// Everything that happened during one batch run. Per-file errors never
/// abort the batch; they end up in `failures` instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub cropped: Vec<CropRecord>,
    pub failures: Vec<FailureRecord>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.cropped.len() + self.failures.len()
    }
}

/// Crops every matching image in a directory. Images are processed one at
/// a time, each independently of the others.
pub struct BatchCropper {
    cfg: BatchConfig,
}

impl BatchCropper {
    pub fn new(cfg: BatchConfig) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &BatchConfig {
        &self.cfg
    }

    /// List the files in the input directory whose names end with the
    /// input suffix, sorted by name so batches run in a deterministic
    /// order.
    pub fn discover(&self) -> Result<Vec<PathBuf>, CropError> {
        let map_io_err = |error| CropError::Io {
            path: self.cfg.input_dir.clone(),
            error,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.cfg.input_dir).map_err(map_io_err)? {
            let path = entry.map_err(map_io_err)?.path();

            let name_matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(&self.cfg.input_suffix));

            if name_matches && path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Crop every file, collecting per-file outcomes into a report. The
    /// output directory is created if absent.
    pub fn run(&self, files: &[PathBuf]) -> Result<BatchReport, CropError> {
        fs::create_dir_all(&self.cfg.output_dir).map_err(|error| CropError::Io {
            path: self.cfg.output_dir.clone(),
            error,
        })?;

        let mut report = BatchReport::default();
        for src_path in files {
            match self.process_file(src_path) {
                Ok(record) => {
                    info!(
                        "cropped {}: ({}, {}, {}, {})",
                        src_path.display(),
                        record.left,
                        record.top,
                        record.right,
                        record.bottom
                    );
                    report.cropped.push(record);
                }
                Err(error) => {
                    warn!("failed {}: {error}", src_path.display());
                    report.failures.push(FailureRecord {
                        src_path: src_path.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Crop a single source image and write the result. All handles are
    /// scoped to this call, so a failure on one file cannot leak into the
    /// next.
    pub fn process_file(&self, src_path: &Path) -> Result<CropRecord, CropError> {
        let frame = image::open(src_path)
            .map_err(|error| CropError::Decode {
                src_path: src_path.to_path_buf(),
                error,
            })?
            .to_rgb8();

        let cropbox = compute_crop_box(&frame, &self.cfg.scan)?;

        let dest_path = self.dest_path(src_path);
        crop_and_save(&frame, &cropbox, &dest_path)?;

        Ok(CropRecord {
            src_path: src_path.to_path_buf(),
            dest_path,
            left: cropbox.left,
            top: cropbox.top,
            right: cropbox.right,
            bottom: cropbox.bottom,
            out_width: cropbox.width(),
            out_height: cropbox.height(),
        })
    }

    fn dest_path(&self, src_path: &Path) -> PathBuf {
        let file_name = src_path.file_name().unwrap_or_default().to_string_lossy();

        let out_name = match file_name.strip_suffix(&self.cfg.input_suffix) {
            Some(stem) => format!("{stem}{}", self.cfg.output_suffix),
            //shouldn't happen for discovered files, but keep a sane name
            //for callers feeding arbitrary paths to process_file
            None => format!("{file_name}{}", self.cfg.output_suffix),
        };

        self.cfg.output_dir.join(out_name)
    }
}

/// Write the region of `frame` described by `cropbox` to `dest_path`. The
/// source image is not mutated; output dimensions are exactly
/// `(right - left + 1, bottom - top + 1)`.
pub fn crop_and_save(
    frame: &RgbImage,
    cropbox: &CropBox,
    dest_path: &Path,
) -> Result<(), CropError> {
    let card = crop_frame(frame, cropbox);
    card.save(dest_path).map_err(|error| CropError::Encode {
        dest_path: dest_path.to_path_buf(),
        error,
    })
}
