//! Adapters implementing the controllers' ports.

pub mod channel;
pub mod file;
pub mod logging;
