//! # Blob Simulation
//!
//! The attractor/particle world: drifting attractors own clusters of fluid
//! particles, new clusters spawn on a fixed cadence, and clusters that
//! drift far outside the frame are pruned.

pub mod attractor;
pub mod error;
pub mod world;

pub use attractor::*;
pub use error::*;
pub use world::*;
