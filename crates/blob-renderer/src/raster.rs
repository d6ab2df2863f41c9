//! CPU rasterization of the particle field.
//!
//! Every frame starts from a cleared background; each particle is then
//! drawn as a filled circle with its attractor's current radius, in
//! insertion order. Overlapping circles overwrite each other, which is
//! fine because all of them share one color.

use blob_simulation::{ConfigError, SimulationWorld};
use glam::Vec2;

/// Background color, RGBA8.
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
/// Circle color, RGBA8.
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// A fixed-size RGBA8 pixel buffer, row-major, top-left origin.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * height * 4` of them.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One pixel; `x`/`y` must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn fill(&mut self, color: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: [u8; 4]) {
        let row = y as usize * self.width as usize;
        let start = (row + x0 as usize) * 4;
        let end = (row + x1 as usize) * 4 + 4;
        for px in self.pixels[start..end].chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }
}

/// Draws the world into an off-screen pixel buffer.
pub struct Rasterizer {
    frame: FrameBuffer,
}

impl Rasterizer {
    /// Create a rasterizer with a fixed output resolution.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidFrameDimensions { width, height });
        }
        Ok(Self {
            frame: FrameBuffer::new(width, height),
        })
    }

    /// Rasterize the current world state and return the finished buffer.
    ///
    /// A world with no attractors yields a frame that is background color
    /// at every pixel.
    pub fn draw(&mut self, world: &SimulationWorld) -> &FrameBuffer {
        self.frame.fill(BACKGROUND);
        for attractor in &world.attractors {
            for particle in &attractor.particles {
                self.fill_circle(particle.position, attractor.radius);
            }
        }
        &self.frame
    }

    /// Fill the circle of `radius` around `center`, clipped to the frame.
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let width = self.frame.width as i64;
        let height = self.frame.height as i64;

        let top = ((center.y - radius).ceil() as i64).max(0);
        let bottom = ((center.y + radius).floor() as i64).min(height - 1);
        for y in top..=bottom {
            let dy = y as f32 - center.y;
            let half_span = (radius * radius - dy * dy).max(0.0).sqrt();
            let left = ((center.x - half_span).ceil() as i64).max(0);
            let right = ((center.x + half_span).floor() as i64).min(width - 1);
            if left > right {
                continue;
            }
            self.frame
                .fill_span(y as u32, left as u32, right as u32, FOREGROUND);
        }
    }
}
