//! # Workflows Module
//!
//! The operations front ends call. Each workflow splits equation text on the `->` arrow,
//! hands both sides to the formula parser, and compares the resulting counts.
//!
//! - [`equation`] - Splitting an equation into its two sides
//! - [`evaluate`] - Evaluating one `LEFT -> RIGHT` line into a verdict
//! - [`batch`] - The counted, line-oriented batch protocol
//! - [`analyze`] - A full breakdown of one equation for interactive display
//! - [`config`] - Batch configuration and its builder
//! - [`progress`] - Progress events emitted by long-running workflows
//! - [`error`] - Errors surfaced to callers

pub mod analyze;
pub mod batch;
pub mod config;
pub mod equation;
pub mod error;
pub mod evaluate;
pub mod progress;
