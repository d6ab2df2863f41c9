//! Fluid particle motion rule.
//!
//! Particles cluster loosely around their attractor: nearby siblings push
//! apart, a cohesion pull engages past a distance band, and velocity decays
//! exponentially every tick, so clusters settle into wobbling blob shapes.

use glam::Vec2;

use crate::constants;
use crate::math::distance_between;
use crate::params::SimParams;

/// A single fluid particle. Owned by exactly one attractor for its whole
/// lifetime; it is created with its cluster and removed with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidParticle {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl FluidParticle {
    /// Create a particle at rest.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Advance this particle one tick.
    ///
    /// `siblings` is the full particle set of the owning cluster, this
    /// particle's own entry included (it contributes a zero repulsion
    /// vector). `attractor_pos` must be the owner's position already
    /// updated for this tick.
    pub fn step(&mut self, siblings: &[FluidParticle], attractor_pos: Vec2, params: &SimParams) {
        let mut movement = Vec2::ZERO;

        // An empty cluster has no centroid and nothing to repel against.
        if !siblings.is_empty() {
            // TODO: add a spring term pulling toward the cluster centroid.
            let _centroid =
                siblings.iter().map(|p| p.position).sum::<Vec2>() / siblings.len() as f32;

            for other in siblings {
                if distance_between(self.position, other.position) < params.particle_repel_range {
                    movement += (self.position - other.position) * constants::PARTICLE_REPEL_SCALE;
                }
            }
        }

        let attractor_distance = distance_between(self.position, attractor_pos);
        if attractor_distance > constants::COHESION_RANGE {
            movement += (attractor_pos - self.position) / constants::COHESION_RANGE;
        }

        // Small jitters are swallowed by the gate; only decisive movement
        // reaches the velocity.
        if movement.length() * params.movement_multiplier > params.minimum_movement_magnitude {
            self.velocity += movement * params.movement_multiplier;
        }

        self.velocity *= params.velocity_falloff_rate;
        self.position += self.velocity * constants::POSITION_INTEGRATION_SCALE;
    }
}
