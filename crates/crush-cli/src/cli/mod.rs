//! Command-line surface for the crush preset.
//!
//! Control flow through this module: raw argv -> [`scan`] (configured by
//! [`catalog`]) -> flat flag map -> [`compact`] -> [`invalid_options`] ->
//! [`reshape`] -> [`plan`], which decides between help output, accumulated
//! usage errors, and a [`MinifyJob`] ready for the engine.

pub mod catalog;
mod dispatch;
mod reshape;
mod scanner;
mod validation;

pub use dispatch::{MinifyJob, RunPlan, plan, usage};
pub use reshape::{RunArgs, reshape};
pub use scanner::{FlagKey, FlagValue, ScannedArgs, compact, scan};
pub use validation::invalid_options;
