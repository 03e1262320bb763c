//! Hypercube Mathematics Library
//!
//! This crate provides the geometric core for the Hypercycle viewer:
//! generation of n-dimensional hypercubes and their projection onto a
//! 2D plane.
//!
//! ## Core Types
//!
//! - [`Point2`] - 2D point produced by projection
//! - [`Edge`] - An undirected edge between two vertex indices
//! - [`Hypercube`] - A d-dimensional hypercube (vertices + edges)
//!
//! ## Operations
//!
//! - [`Hypercube::new`] - Build the full vertex/edge sets for a dimension
//! - [`project`] - Map n-dimensional vertices to 2D viewport coordinates

mod point2;
pub mod shape;
pub mod hypercube;
pub mod projection;

pub use point2::Point2;
pub use shape::{Edge, WireShape};
pub use hypercube::{Hypercube, HALF_EXTENT};
pub use projection::project;
