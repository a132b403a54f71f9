//! Background still export.
//!
//! An export captures the displayed view, re-derives it at a catalog
//! resolution and computes it on its own threads while the interactive
//! scheduler keeps running. Only one export runs per controller at a time.

mod controller;
pub mod errors;
mod job;
pub mod ports;

pub use controller::{EXPORT_STEPS, ExportController, export_file_name};
pub use job::ExportJob;
