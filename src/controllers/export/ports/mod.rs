//! Port definitions for the export controller.

pub mod destination;
pub mod progress;
