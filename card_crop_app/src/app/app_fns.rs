use std::error::Error;
use std::path::Path;

use card_crop_lib::{BatchConfig, BatchCropper, BatchReport};

use crate::app::*;

// * read cfg
// * discover matching files
// * crop each file
// * output report

pub fn run_app() -> i32 {
    let cfg = arg_parse::parse_args();
    configure_logs(cfg.output_cfg.verbosity);

    let ret = match run_app_inner(&cfg) {
        Ok(()) => 0,
        Err(fatal_error) => {
            print_fatal_err(fatal_error, cfg.output_cfg.verbosity);
            1
        }
    };

    ret
}

fn run_app_inner(cfg: &AppCfg) -> eyre::Result<()> {
    let input_dir = &cfg.dir_cfg.input_dir;
    if !input_dir.is_dir() {
        return Err(eyre::Report::msg(format!(
            "input directory does not exist: {}",
            input_dir.to_string_lossy()
        )));
    }

    let batch_cfg = BatchConfig {
        input_dir: cfg.dir_cfg.input_dir.clone(),
        output_dir: cfg.dir_cfg.output_dir.clone(),
        input_suffix: cfg.input_suffix.clone(),
        output_suffix: cfg.output_suffix.clone(),
        scan: cfg.scan,
    };
    let cropper = BatchCropper::new(batch_cfg);

    let files = cropper.discover()?;

    if cfg.output_cfg.format == OutputFormat::Normal {
        #[allow(clippy::print_stdout)]
        let () = println!("Found {} images.", files.len());
    }

    let report = cropper.run(&files)?;

    print_report(&cfg.output_cfg, &report)?;

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_report(output_cfg: &OutputCfg, report: &BatchReport) -> eyre::Result<()> {
    match output_cfg.format {
        OutputFormat::Normal => {
            for record in &report.cropped {
                println!(
                    "Processed {}: ({}, {}, {}, {})",
                    display_name(&record.src_path),
                    record.left,
                    record.top,
                    record.right,
                    record.bottom
                );
            }

            for failure in &report.failures {
                println!("Failed {}: {}", display_name(&failure.src_path), failure.error);
            }

            println!("Batch processing complete.");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    Ok(())
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}

fn print_fatal_err(fatal_err: eyre::Report, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity == ReportVerbosity::Verbose {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let mut cfg = simplelog::ConfigBuilder::new();

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    TermLogger::init(
        min_loglevel,
        cfg.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("TermLogger failed to initialize");
}
