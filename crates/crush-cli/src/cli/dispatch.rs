//! Dispatch planning: help, accumulated usage errors, or a job for the engine.

use crush_preset::PresetConfig;
use serde::Serialize;
use tracing::debug;

use crate::cli::reshape::reshape;
use crate::cli::scanner::{compact, scan};
use crate::cli::validation::invalid_options;
use crate::error::UsageError;

/// Fixed usage text. Intentionally a two-option summary, not the full catalog.
const USAGE: &str = "Usage: crush index.js [options]

  Options:
    --mangle    Context and scope aware variable renaming

    --simplify  Simplifies code for minification by reducing statements into
                expressions and making expressions uniform where possible

";

/// The usage text printed for `--help`.
pub fn usage() -> &'static str {
    USAGE
}

/// A fully resolved run, ready for the file-processing engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyJob {
    /// Input paths in the order they were given.
    pub files: Vec<String>,
    /// Read source from standard input instead of `files`.
    pub stdin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Nested preset configuration for the transform engine.
    pub options: PresetConfig,
}

/// What one invocation should do.
#[derive(Debug, Clone, PartialEq)]
pub enum RunPlan {
    /// Print the usage text and stop. Takes priority over everything else;
    /// no validation runs.
    Help,
    /// Print every accumulated usage error and exit non-zero.
    Invalid(Vec<UsageError>),
    /// Hand the job to the file-processing engine.
    Process(MinifyJob),
}

/// Plan one run from raw argv tokens (program name already stripped).
///
/// Structural checks all run even when an earlier one has already failed, so
/// the user sees every problem at once: missing input, conflicting output
/// targets, and unknown options.
pub fn plan(args: &[String]) -> RunPlan {
    let scanned = compact(scan(args));
    let (run, options) = reshape(&scanned);

    if run.help {
        return RunPlan::Help;
    }

    let mut errors = Vec::new();

    if run.files.is_empty() && !run.stdin {
        errors.push(UsageError::NoInput);
    }

    if run.out_file.is_some() && run.out_dir.is_some() {
        errors.push(UsageError::ConflictingOutputTarget);
    }

    let invalid = invalid_options(&scanned.flags);
    if !invalid.is_empty() {
        errors.push(UsageError::UnknownOptions(invalid));
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), "invocation rejected");
        return RunPlan::Invalid(errors);
    }

    RunPlan::Process(MinifyJob {
        files: run.files,
        stdin: run.stdin,
        out_file: run.out_file,
        out_dir: run.out_dir,
        options,
    })
}
