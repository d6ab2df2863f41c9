//! Hand-tuned constants for the blob dynamics.
//!
//! These are the default values behind [`crate::params::SimParams`]; hosts
//! override them at initialization, not at runtime.

/// Minimum distance kept between an attractor and its fluid particles.
pub const MIN_REPEL_DISTANCE: f32 = 10.0;

/// Base visual size of a particle circle.
pub const PARTICLE_SIZE: f32 = 20.0;

/// Range within which sibling particles repel each other.
pub const PARTICLE_REPEL_RANGE: f32 = 20.0;

/// Scale applied to each pairwise repulsion contribution.
pub const PARTICLE_REPEL_SCALE: f32 = 0.1;

/// Attractor distance beyond which the cohesion pull engages.
///
/// Doubles as the divisor of the cohesion vector, so the pull grows
/// linearly with distance in units of this range.
pub const COHESION_RANGE: f32 = 20.0;

/// Minimum scaled movement magnitude required before a tick's movement
/// is integrated into velocity.
pub const MINIMUM_MOVEMENT_MAGNITUDE: f32 = 0.15;

/// Scale applied to the accumulated movement before adding it to velocity.
pub const MOVEMENT_MULTIPLIER: f32 = 0.125;

/// Exponential velocity damping applied every tick.
pub const VELOCITY_FALLOFF_RATE: f32 = 0.75;

/// Half-step factor used when integrating velocity into position.
pub const POSITION_INTEGRATION_SCALE: f32 = 0.5;

/// Base cap for an attractor's visual radius.
pub const MAX_PARTICLE_RADIUS: f32 = 30.0;

/// Per-instance jitter band around [`MAX_PARTICLE_RADIUS`].
pub const RADIUS_CAP_JITTER: f32 = 10.0;

/// Visual radius growth per tick until the cap is reached.
pub const RADIUS_GROWTH_PER_TICK: f32 = 0.5;

/// Ticks between spawn/prune passes.
pub const SPAWN_INTERVAL: u64 = 60;

/// Position jitter radius for spawned attractors (around the frame
/// center) and their particles (around the attractor).
pub const SPAWN_JITTER: f32 = 200.0;

/// Inclusive bounds on the particle count of a spawned cluster.
pub const SPAWN_PARTICLES_MIN: u32 = 3;
pub const SPAWN_PARTICLES_MAX: u32 = 50;

/// Particles scattered around the seed attractor at startup.
pub const SEED_PARTICLE_COUNT: u32 = 15;

/// Attractors are pruned once |x| or |y| reaches this multiple of the
/// frame dimension.
pub const PRUNE_BOUND_MULTIPLIER: f32 = 2.0;

/// Cutoff for the edge-detection outline pass.
pub const EDGE_DETECT_THRESHOLD: f32 = 0.8;
