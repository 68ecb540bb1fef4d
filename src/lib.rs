//! `walk-calories` library crate.
//!
//! The binary (`walkcal`) is a thin wrapper around this library so that:
//!
//! - the normalizer and estimator are testable without spawning processes
//! - front ends (CLI, TUI) share one pipeline and stay thin adapters

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod normalize;
pub mod plot;
pub mod report;
pub mod tui;
