//! crush - command-line front-end for the crush minification preset.
//!
//! Parses argv into the nested preset configuration, validates it against
//! the option catalog, and hands the resolved job to the file-processing
//! engine. Malformed invocations exit non-zero after printing every problem.

use std::process::ExitCode;

use crush_cli::cli::{self, RunPlan};
use crush_cli::pipeline::{FileProcessor, JsonHandoff};
use crush_cli::{logger, ui};

fn main() -> ExitCode {
    logger::init_logger();
    ui::init_colors();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::plan(&args) {
        RunPlan::Help => {
            print!("{}", cli::usage());
            ExitCode::SUCCESS
        }
        RunPlan::Invalid(errors) => {
            for err in &errors {
                ui::error(&err.to_string());
            }
            ExitCode::FAILURE
        }
        RunPlan::Process(job) => match JsonHandoff::stdout().process(&job) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                ExitCode::FAILURE
            }
        },
    }
}
