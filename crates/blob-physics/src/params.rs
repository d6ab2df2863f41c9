//! Runtime parameters, fixed at initialization.

use crate::constants;

/// The host-settable parameter set for a simulation run.
///
/// Constructed once before the world exists and never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    /// Minimum distance between an attractor and its particles.
    pub min_repel_distance: f32,
    /// Base visual size of a particle circle.
    pub particle_size: f32,
    /// Range within which sibling particles repel each other.
    pub particle_repel_range: f32,
    /// Movement-gate threshold, compared against the scaled movement magnitude.
    pub minimum_movement_magnitude: f32,
    /// Scale applied to accumulated movement before it reaches velocity.
    pub movement_multiplier: f32,
    /// Per-tick exponential velocity damping.
    pub velocity_falloff_rate: f32,
    /// Base cap for attractor visual radii.
    pub max_radius: f32,
    /// Per-instance jitter band around `max_radius`.
    pub radius_cap_jitter: f32,
    /// Visual radius growth per tick.
    pub radius_growth_per_tick: f32,
    /// Ticks between spawn/prune passes.
    pub spawn_interval: u64,
    /// Position jitter radius for spawned attractors and particles.
    pub spawn_jitter: f32,
    /// Inclusive lower bound on particles per spawned cluster.
    pub spawn_particles_min: u32,
    /// Inclusive upper bound on particles per spawned cluster.
    pub spawn_particles_max: u32,
    /// Attractors are pruned at this multiple of the frame dimensions.
    pub prune_bound_multiplier: f32,
    /// Cutoff for the edge-detection outline pass.
    pub edge_detect_threshold: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            min_repel_distance: constants::MIN_REPEL_DISTANCE,
            particle_size: constants::PARTICLE_SIZE,
            particle_repel_range: constants::PARTICLE_REPEL_RANGE,
            minimum_movement_magnitude: constants::MINIMUM_MOVEMENT_MAGNITUDE,
            movement_multiplier: constants::MOVEMENT_MULTIPLIER,
            velocity_falloff_rate: constants::VELOCITY_FALLOFF_RATE,
            max_radius: constants::MAX_PARTICLE_RADIUS,
            radius_cap_jitter: constants::RADIUS_CAP_JITTER,
            radius_growth_per_tick: constants::RADIUS_GROWTH_PER_TICK,
            spawn_interval: constants::SPAWN_INTERVAL,
            spawn_jitter: constants::SPAWN_JITTER,
            spawn_particles_min: constants::SPAWN_PARTICLES_MIN,
            spawn_particles_max: constants::SPAWN_PARTICLES_MAX,
            prune_bound_multiplier: constants::PRUNE_BOUND_MULTIPLIER,
            edge_detect_threshold: constants::EDGE_DETECT_THRESHOLD,
        }
    }
}
