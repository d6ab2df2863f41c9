//! # Blob Renderer
//!
//! Two halves of the frame pipeline: a CPU rasterizer that draws the
//! particle field as filled circles into an off-screen pixel buffer, and a
//! GPU post-process pass that uploads that buffer and keeps only a
//! thresholded edge-detection outline of it.

pub mod error;
pub mod post_process;
pub mod raster;

pub use error::*;
pub use post_process::*;
pub use raster::*;
