//! Interactive render scheduling.
//!
//! Input sources publish complete [`ViewState`](crate::ViewState) values; a
//! single dedicated worker turns the most recent one into a frame and hands
//! it to the display through a presenter port.
//!
//! # Architecture
//!
//! - **Input**: `RenderScheduler::submit` with an immutable view state
//! - **Output**: `DisplayPresenterPort` receiving `RenderEvent`s
//! - **Core**: escape engine, palette cache and compositor from `core/`
//!
//! Bursts of requests are coalesced: when the worker becomes free it drains
//! every queued notification and renders only the newest.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::{RenderScheduler, SubmitOutcome};
