//! Error types for the renderer.
//!
//! Resource acquisition failures are fatal for the pipeline: without a
//! surface, adapter and device there is no frame to produce, so these are
//! surfaced to the host instead of being retried.

use std::fmt;

use blob_simulation::ConfigError;

/// Errors raised while setting up the GPU pipeline.
#[derive(Debug)]
pub enum RenderError {
    /// Rejected configuration (zero-sized frame).
    Config(ConfigError),
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Config(e) => write!(f, "Invalid configuration: {}", e),
            RenderError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            RenderError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            RenderError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Config(e) => Some(e),
            RenderError::SurfaceCreation(e) => Some(e),
            RenderError::NoAdapter(e) => Some(e),
            RenderError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> Self {
        RenderError::Config(e)
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceCreation(e)
    }
}
