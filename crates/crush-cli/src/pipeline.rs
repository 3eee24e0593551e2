//! Handoff seam between the CLI and the file-processing engine.
//!
//! The CLI never reads or writes source files itself; it resolves a
//! [`MinifyJob`] and hands it across this seam. The read-transform-write
//! cycle (including `--stdin`, `--out-file`, and `--out-dir` behavior)
//! belongs to the engine on the other side.

use std::io::{self, Write};

use tracing::info;

use crate::cli::MinifyJob;
use crate::error::Result;

/// The file-processing collaborator: consumes a resolved job and performs the
/// read-transform-write cycle.
pub trait FileProcessor {
    fn process(&mut self, job: &MinifyJob) -> Result<()>;
}

/// Serializes the resolved job as pretty JSON on a writer.
///
/// This is the process-boundary handoff: downstream engine tooling consumes
/// the exact nested configuration object the preset expects, together with
/// the ordered file list and output targets.
pub struct JsonHandoff<W: Write> {
    writer: W,
}

impl JsonHandoff<io::Stdout> {
    /// Hand off on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonHandoff<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FileProcessor for JsonHandoff<W> {
    fn process(&mut self, job: &MinifyJob) -> Result<()> {
        info!(
            files = job.files.len(),
            stdin = job.stdin,
            "handing job to minification engine"
        );
        serde_json::to_writer_pretty(&mut self.writer, job)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
