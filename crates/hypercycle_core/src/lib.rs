//! Core types for the Hypercycle viewer
//!
//! This crate provides the stateful shell around the geometric core:
//!
//! - [`DimensionInfo`] - Display name and color for each dimension
//! - [`Playback`] - The play/pause/reset/speed state machine driving the
//!   dimension cycle
//! - [`Frame`] - A fully assembled, ready-to-render projection of one
//!   hypercube

mod catalog;
mod playback;
mod frame;

pub use catalog::{dimension_info, DimensionInfo};
pub use playback::{Playback, PlaybackState, CYCLE_START, CYCLE_END, MIN_SPEED, MAX_SPEED};
pub use frame::Frame;

// Re-export commonly used types from hypercycle_math for convenience
pub use hypercycle_math::{Edge, Hypercube, Point2, WireShape};
