//! Crush CLI - command-line front-end for the crush minification preset.
//!
//! This crate turns raw argv tokens into the nested configuration object the
//! transform engine consumes. It owns no transform and touches no files; the
//! read-transform-write cycle belongs to the engine behind the
//! [`pipeline::FileProcessor`] seam.
//!
//! # Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - [`cli`] - Option catalog, token scanning, validation, reshaping, and
//!   dispatch planning
//! - [`error`] - Structured error types with the exact user-facing messages
//! - [`logger`] - Structured logging with tracing
//! - [`pipeline`] - Handoff seam to the external file-processing engine
//! - [`ui`] - Terminal status messages
//!
//! # Example
//!
//! ```
//! use crush_cli::cli::{self, RunPlan};
//!
//! let args: Vec<String> = ["--stdin", "--mangle"].iter().map(|s| s.to_string()).collect();
//! assert!(matches!(cli::plan(&args), RunPlan::Process(_)));
//! ```

pub mod cli;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod ui;

pub use error::{CliError, Result, UsageError};
