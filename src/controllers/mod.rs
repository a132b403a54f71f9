pub mod export;
pub mod interactive;
mod panics;
pub mod ports;
