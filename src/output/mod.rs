//! Output module for the distance report
//!
//! This module handles:
//! - Ordering ranked providers by distance
//! - Rendering the plain-text report to any writer or to stdout

mod report;

pub use report::{print_report, sort_by_proximity, write_report, SEPARATOR};
