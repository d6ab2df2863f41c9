//! Attractors: drifting anchor points that own a cluster of fluid particles.

use blob_physics::{FluidParticle, SimParams};
use glam::Vec2;
use rand::Rng;

/// An attractor and the particle cluster bound to it.
///
/// The cluster is owned outright: removing an attractor removes its
/// particles with it, so a particle can never outlive its owner.
#[derive(Clone, Debug)]
pub struct Attractor {
    pub position: Vec2,
    /// Constant drift, applied every tick.
    pub velocity: Vec2,
    /// Current visual radius; grows from zero up to `radius_cap`.
    pub radius: f32,
    /// Per-instance growth cap, jittered around the configured base.
    pub radius_cap: f32,
    /// Owned particles, in insertion order.
    pub particles: Vec<FluidParticle>,
}

impl Attractor {
    /// Create an empty attractor with a radius cap drawn from `rng`.
    pub fn new(position: Vec2, velocity: Vec2, params: &SimParams, rng: &mut impl Rng) -> Self {
        let cap_jitter = rng.random_range(-params.radius_cap_jitter..=params.radius_cap_jitter);
        Self {
            position,
            velocity,
            radius: 0.0,
            radius_cap: params.max_radius + cap_jitter,
            particles: Vec::new(),
        }
    }

    /// Scatter `count` particles uniformly within ±`params.spawn_jitter`
    /// of this attractor.
    pub fn scatter_particles(&mut self, count: u32, params: &SimParams, rng: &mut impl Rng) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let offset = Vec2::new(
                rng.random_range(-params.spawn_jitter..=params.spawn_jitter),
                rng.random_range(-params.spawn_jitter..=params.spawn_jitter),
            );
            self.particles.push(FluidParticle::new(self.position + offset));
        }
    }

    /// Advance the attractor itself: constant drift plus capped radius growth.
    pub fn step(&mut self, params: &SimParams) {
        self.position += self.velocity;
        if self.radius < self.radius_cap {
            self.radius = (self.radius + params.radius_growth_per_tick).min(self.radius_cap);
        }
    }

    /// Advance every owned particle in insertion order.
    ///
    /// Particles read the cluster as it currently stands, so the updates of
    /// earlier particles this tick are visible to later ones.
    pub fn step_particles(&mut self, params: &SimParams) {
        for i in 0..self.particles.len() {
            let mut particle = self.particles[i];
            particle.step(&self.particles, self.position, params);
            self.particles[i] = particle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn step_advances_position_by_constant_velocity() {
        let params = SimParams::default();
        let mut a = Attractor::new(Vec2::ZERO, Vec2::new(1.5, -0.5), &params, &mut rng());

        a.step(&params);
        a.step(&params);

        assert_eq!(a.position, Vec2::new(3.0, -1.0));
        assert_eq!(a.velocity, Vec2::new(1.5, -0.5));
    }

    #[test]
    fn radius_grows_monotonically_and_stops_at_cap() {
        let params = SimParams::default();
        let mut a = Attractor::new(Vec2::ZERO, Vec2::ZERO, &params, &mut rng());
        assert_eq!(a.radius, 0.0);

        let mut previous = a.radius;
        for _ in 0..200 {
            a.step(&params);
            assert!(a.radius >= previous);
            assert!(a.radius <= a.radius_cap);
            previous = a.radius;
        }
        assert_eq!(a.radius, a.radius_cap);
    }

    #[test]
    fn radius_cap_stays_within_jitter_band() {
        let params = SimParams::default();
        let mut rng = rng();
        for _ in 0..100 {
            let a = Attractor::new(Vec2::ZERO, Vec2::ZERO, &params, &mut rng);
            assert!(a.radius_cap >= params.max_radius - params.radius_cap_jitter);
            assert!(a.radius_cap <= params.max_radius + params.radius_cap_jitter);
        }
    }

    #[test]
    fn scattered_particles_stay_within_jitter_radius() {
        let params = SimParams::default();
        let mut rng = rng();
        let mut a = Attractor::new(Vec2::new(300.0, 200.0), Vec2::ZERO, &params, &mut rng);

        a.scatter_particles(40, &params, &mut rng);

        assert_eq!(a.particles.len(), 40);
        for p in &a.particles {
            assert!((p.position.x - 300.0).abs() <= params.spawn_jitter);
            assert!((p.position.y - 200.0).abs() <= params.spawn_jitter);
            assert_eq!(p.velocity, Vec2::ZERO);
        }
    }
}
