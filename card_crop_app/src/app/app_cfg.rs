use std::path::PathBuf;

use card_crop_lib::EdgeScanConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

// How the batch report is printed to stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputFormat {
    Normal,
    Json,
}

#[derive(Debug, Clone)]
pub struct DirCfg {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputCfg {
    pub format: OutputFormat,
    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub dir_cfg: DirCfg,
    pub input_suffix: String,
    pub output_suffix: String,
    pub scan: EdgeScanConfig,
    pub output_cfg: OutputCfg,
}
