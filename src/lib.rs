//! Hypercycle - Animated Hypercube Dimension Viewer
//!
//! Application-level modules: configuration, input mapping, and the
//! window/playback/render systems. The geometric core lives in
//! `hypercycle_math`, the state machinery in `hypercycle_core`, and the
//! GPU pipeline in `hypercycle_render`.

pub mod config;
pub mod input;
pub mod systems;
