//! Console statistics and calculator tools.
//!
//! The statistics session ingests numbers typed by the user or read from a
//! file, validates them through a single gate ([`data::validate_sequence`]),
//! prints mean / median / standard deviation and draws a histogram with the
//! mean and median marked. The calculator is a small read-eval-print loop
//! over a closed set of operations.

pub mod app;
pub mod calc;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod stats;
pub mod ui;

pub use error::{CalcError, LoadError, LoadResult};
