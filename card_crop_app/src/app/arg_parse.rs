use std::path::PathBuf;

use card_crop_lib::{
    EdgeScanConfig, DEFAULT_DARK_THRESHOLD, DEFAULT_INPUT_SUFFIX, DEFAULT_OUTPUT_SUFFIX,
};
use clap::{value_parser, ArgAction::*};

use crate::app::*;

// file specification
const INPUT_DIR: &str = "Input directory";
const OUTPUT_DIR: &str = "Output directory";
const INPUT_SUFFIX: &str = "Input filename suffix";
const OUTPUT_SUFFIX: &str = "Output filename suffix";

//detection configuration
const THRESHOLD: &str = "Dark threshold";

//output settings
const OUTPUT_FORMAT: &str = "Format";

//Verbosity
const VERBOSITY_QUIET: &str = "Quiet";
const VERBOSITY_VERBOSE: &str = "Verbose";

const DISPLAY_ORDERING: [&str; 8] = [
    //
    // file specification
    INPUT_DIR,
    OUTPUT_DIR,
    INPUT_SUFFIX,
    OUTPUT_SUFFIX,
    //
    //detection
    THRESHOLD,
    //
    //outputs
    OUTPUT_FORMAT,
    //
    //verbosity
    VERBOSITY_QUIET,
    VERBOSITY_VERBOSE,
];

fn build_app() -> clap::Command {
    let get_ordering = |arg_name: &str| -> usize {
        match DISPLAY_ORDERING.iter().position(|x| *x == arg_name) {
            Some(idx) => idx,
            None => {
                panic!("argument not assigned a display order: {arg_name:?}");
            }
        }
    };

    //clap wants string default values, so render the numeric default once
    let default_threshold = DEFAULT_DARK_THRESHOLD.to_string();

    //args are not added through method chaining because rustfmt struggles with very long expressions.
    let mut clap_app = clap::Command::new("Card cropper")
        .version(clap::crate_version!())
        .about("Crop card art images down to their dark card boundary");

    clap_app = clap_app.arg(
        clap::Arg::new(INPUT_DIR)
            .long("input-dir")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("Directory containing the source card art images")
            .display_order(get_ordering(INPUT_DIR)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_DIR)
            .long("output-dir")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("Directory the cropped images are written to. Created if absent")
            .display_order(get_ordering(OUTPUT_DIR)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(INPUT_SUFFIX)
            .long("suffix")
            .num_args(1)
            .default_value(DEFAULT_INPUT_SUFFIX)
            .help("Only files whose names end with this suffix are processed")
            .display_order(get_ordering(INPUT_SUFFIX)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_SUFFIX)
            .long("output-suffix")
            .num_args(1)
            .default_value(DEFAULT_OUTPUT_SUFFIX)
            .help("Output filenames replace the input suffix with this suffix")
            .display_order(get_ordering(OUTPUT_SUFFIX)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(THRESHOLD)
            .long("threshold")
            .num_args(1)
            .value_parser(value_parser!(u8))
            .default_value(default_threshold)
            .help("Luminance (mean of R, G, B) below which a sampled pixel counts as dark. Lower is stricter")
            .display_order(get_ordering(THRESHOLD)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_FORMAT)
            .long("format")
            .num_args(1)
            .value_parser(value_parser!(OutputFormat))
            .default_value("normal")
            .help("Print the batch report as human readable text, or as json")
            .display_order(get_ordering(OUTPUT_FORMAT)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(VERBOSITY_QUIET)
            .long("quiet")
            .num_args(0)
            .action(SetTrue)
            .conflicts_with(VERBOSITY_VERBOSE)
            .help("Only log warnings and errors")
            .display_order(get_ordering(VERBOSITY_QUIET)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(VERBOSITY_VERBOSE)
            .long("verbose")
            .num_args(0)
            .action(SetTrue)
            .conflicts_with(VERBOSITY_QUIET)
            .help("Log everything, including the cause chain of fatal errors")
            .display_order(get_ordering(VERBOSITY_VERBOSE)),
    );

    clap_app
}

pub fn parse_args() -> AppCfg {
    let args = build_app().get_matches();

    let verbosity = if args.get_flag(VERBOSITY_QUIET) {
        ReportVerbosity::Quiet
    } else if args.get_flag(VERBOSITY_VERBOSE) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    let scan = EdgeScanConfig {
        threshold: *args.get_one::<u8>(THRESHOLD).expect("arg has a default"),
        ..EdgeScanConfig::default()
    };

    AppCfg {
        dir_cfg: DirCfg {
            input_dir: args
                .get_one::<PathBuf>(INPUT_DIR)
                .expect("arg is required")
                .clone(),
            output_dir: args
                .get_one::<PathBuf>(OUTPUT_DIR)
                .expect("arg is required")
                .clone(),
        },
        input_suffix: args
            .get_one::<String>(INPUT_SUFFIX)
            .expect("arg has a default")
            .clone(),
        output_suffix: args
            .get_one::<String>(OUTPUT_SUFFIX)
            .expect("arg has a default")
            .clone(),
        scan,
        output_cfg: OutputCfg {
            format: *args
                .get_one::<OutputFormat>(OUTPUT_FORMAT)
                .expect("arg has a default"),
            verbosity,
        },
    }
}
