//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (display surfaces, activity indicators).

pub mod presenter;
