//! World state: the live attractor population and its lifecycle.

use blob_physics::{constants, SimParams};
use glam::Vec2;
use rand::Rng;

use crate::attractor::Attractor;
use crate::error::ConfigError;

/// Drift velocity of the seed attractor.
const SEED_DRIFT: Vec2 = Vec2::new(0.001, 0.2);

/// The full simulation state for one run.
///
/// Owned by the host and advanced once per frame via [`SimulationWorld::tick`].
/// Attractors are kept in creation order; iteration order is stable so a
/// seeded run is fully deterministic.
#[derive(Debug)]
pub struct SimulationWorld {
    /// Live attractors, in creation order.
    pub attractors: Vec<Attractor>,
    params: SimParams,
    frame_width: f32,
    frame_height: f32,
    ticks: u64,
}

impl SimulationWorld {
    /// Create a world seeded with one slowly drifting attractor at the
    /// frame center.
    ///
    /// Rejects zero-sized frames; everything past this point is infallible.
    pub fn new(
        params: SimParams,
        frame_width: u32,
        frame_height: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(ConfigError::InvalidFrameDimensions {
                width: frame_width,
                height: frame_height,
            });
        }

        let center = Vec2::new(frame_width as f32 / 2.0, frame_height as f32 / 2.0);
        let mut seed = Attractor::new(center, SEED_DRIFT, &params, rng);
        seed.scatter_particles(constants::SEED_PARTICLE_COUNT, &params, rng);

        Ok(Self {
            attractors: vec![seed],
            params,
            frame_width: frame_width as f32,
            frame_height: frame_height as f32,
            ticks: 0,
        })
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total particle count across all live attractors.
    pub fn particle_count(&self) -> usize {
        self.attractors.iter().map(|a| a.particles.len()).sum()
    }

    /// Advance the world one tick.
    ///
    /// Each attractor is stepped before its particles, so a particle always
    /// reads its owner's position for the current tick. On the spawn cadence
    /// a new cluster is added and out-of-bounds attractors are pruned,
    /// spawn first, exactly in that order.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for attractor in &mut self.attractors {
            attractor.step(&self.params);
            attractor.step_particles(&self.params);
        }

        if self.ticks % self.params.spawn_interval == 0 {
            self.spawn_cluster(rng);
            self.prune();
        }

        self.ticks += 1;
    }

    /// Spawn one attractor near the frame center with a small random drift
    /// and a randomly sized particle cluster.
    fn spawn_cluster(&mut self, rng: &mut impl Rng) {
        let center = Vec2::new(self.frame_width / 2.0, self.frame_height / 2.0);
        let position = center
            + Vec2::new(
                rng.random_range(-self.params.spawn_jitter..=self.params.spawn_jitter),
                rng.random_range(-self.params.spawn_jitter..=self.params.spawn_jitter),
            );
        // Drift axes are drawn from a coarse grid of tenths.
        let velocity = Vec2::new(
            rng.random_range(-10..=10) as f32 * 0.1,
            rng.random_range(-10..=10) as f32 * 0.1,
        );

        let mut attractor = Attractor::new(position, velocity, &self.params, rng);
        let count =
            rng.random_range(self.params.spawn_particles_min..=self.params.spawn_particles_max);
        attractor.scatter_particles(count, &self.params, rng);

        log::debug!(
            "spawned attractor at ({:.1}, {:.1}) with {} particles",
            position.x,
            position.y,
            count
        );
        self.attractors.push(attractor);
    }

    /// Remove attractors that left the live region, together with their
    /// particles. The bound is inclusive: a position exactly on it is out.
    fn prune(&mut self) {
        let bound_x = self.frame_width * self.params.prune_bound_multiplier;
        let bound_y = self.frame_height * self.params.prune_bound_multiplier;

        let before = self.attractors.len();
        self.attractors
            .retain(|a| a.position.x.abs() < bound_x && a.position.y.abs() < bound_y);
        let removed = before - self.attractors.len();
        if removed > 0 {
            log::debug!("pruned {} attractor(s) outside ±{}x±{}", removed, bound_x, bound_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;

    fn world(seed: u64) -> SimulationWorld {
        let mut rng = StdRng::seed_from_u64(seed);
        SimulationWorld::new(SimParams::default(), WIDTH, HEIGHT, &mut rng).unwrap()
    }

    #[test]
    fn zero_frame_dimensions_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = SimulationWorld::new(SimParams::default(), 0, HEIGHT, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFrameDimensions {
                width: 0,
                height: HEIGHT
            }
        );
        assert!(SimulationWorld::new(SimParams::default(), WIDTH, 0, &mut rng).is_err());
    }

    #[test]
    fn seed_state_is_one_centered_attractor_with_fifteen_particles() {
        let w = world(3);
        assert_eq!(w.attractors.len(), 1);

        let seed = &w.attractors[0];
        assert_eq!(seed.position, Vec2::new(640.0, 360.0));
        assert_eq!(seed.velocity, SEED_DRIFT);
        assert_eq!(seed.radius, 0.0);
        assert_eq!(seed.particles.len(), constants::SEED_PARTICLE_COUNT as usize);
        for p in &seed.particles {
            assert!((p.position.x - 640.0).abs() <= 200.0);
            assert!((p.position.y - 360.0).abs() <= 200.0);
        }
    }

    #[test]
    fn spawn_cadence_adds_one_cluster_per_interval() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut w = world(9);

        // The counter starts at zero, so the very first tick spawns.
        w.tick(&mut rng);
        assert_eq!(w.attractors.len(), 2);

        for _ in 0..59 {
            w.tick(&mut rng);
        }
        assert_eq!(w.attractors.len(), 2);

        // Tick 60 fires the cadence again.
        w.tick(&mut rng);
        assert_eq!(w.attractors.len(), 3);
    }

    #[test]
    fn spawned_cluster_size_is_within_configured_bounds() {
        let params = SimParams::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut w = world(seed);
            w.tick(&mut rng);

            let spawned = w.attractors.last().unwrap();
            let count = spawned.particles.len() as u32;
            assert!(count >= params.spawn_particles_min);
            assert!(count <= params.spawn_particles_max);
            for p in &spawned.particles {
                assert!((p.position.x - spawned.position.x).abs() <= params.spawn_jitter + 1e-3);
                assert!((p.position.y - spawned.position.y).abs() <= params.spawn_jitter + 1e-3);
            }
        }
    }

    #[test]
    fn identically_seeded_runs_are_identical() {
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        let mut a = SimulationWorld::new(SimParams::default(), WIDTH, HEIGHT, &mut rng_a).unwrap();
        let mut b = SimulationWorld::new(SimParams::default(), WIDTH, HEIGHT, &mut rng_b).unwrap();

        for _ in 0..=60 {
            a.tick(&mut rng_a);
            b.tick(&mut rng_b);
        }

        assert_eq!(a.attractors.len(), b.attractors.len());
        for (x, y) in a.attractors.iter().zip(&b.attractors) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.radius_cap, y.radius_cap);
            assert_eq!(x.particles, y.particles);
        }
    }

    #[test]
    fn radius_invariant_holds_across_many_ticks() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut w = world(77);

        for _ in 0..240 {
            let before: Vec<f32> = w.attractors.iter().map(|a| a.radius).collect();
            let count_before = w.attractors.len();
            w.tick(&mut rng);

            // No attractor can reach the prune bound within this window, so
            // indices stay stable and radii can be compared position-wise.
            assert!(w.attractors.len() >= count_before);
            for (i, a) in w.attractors.iter().take(count_before).enumerate() {
                assert!(a.radius >= before[i]);
            }
            for a in &w.attractors {
                assert!(a.radius <= a.radius_cap);
            }
        }
    }

    #[test]
    fn attractor_on_the_prune_bound_is_removed_and_one_inside_is_kept() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut w = world(5);
        let params = SimParams::default();

        let bound = WIDTH as f32 * params.prune_bound_multiplier;
        let mut on_bound = Attractor::new(
            Vec2::new(bound, 100.0),
            Vec2::ZERO,
            &params,
            &mut rng,
        );
        on_bound.scatter_particles(5, &params, &mut rng);
        let on_bound_particles = on_bound.particles.len();
        let inside = Attractor::new(
            Vec2::new(bound - 0.5, 100.0),
            Vec2::ZERO,
            &params,
            &mut rng,
        );

        w.attractors.clear();
        w.attractors.push(on_bound);
        w.attractors.push(inside);
        let total_before = w.particle_count();

        // ticks == 0, so this tick runs the spawn/prune pass.
        w.tick(&mut rng);

        assert!(w
            .attractors
            .iter()
            .all(|a| a.position.x.abs() < bound && a.position.y.abs() < bound));
        assert!(w
            .attractors
            .iter()
            .any(|a| (a.position.x - (bound - 0.5)).abs() < 1.0));
        // The removed attractor took exactly its own particles with it; the
        // spawned cluster accounts for the rest.
        let spawned = w.attractors.last().unwrap().particles.len();
        assert_eq!(
            w.particle_count(),
            total_before - on_bound_particles + spawned
        );
    }

    #[test]
    fn far_out_attractor_is_pruned_with_all_its_particles() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut w = world(11);
        let params = SimParams::default();

        w.attractors.clear();
        let mut far = Attractor::new(Vec2::new(1.0e6, 0.0), Vec2::ZERO, &params, &mut rng);
        far.scatter_particles(10, &params, &mut rng);
        w.attractors.push(far);

        w.tick(&mut rng);

        // The far attractor is gone; only the freshly spawned cluster remains.
        assert_eq!(w.attractors.len(), 1);
        assert!(w.attractors[0].position.x.abs() < WIDTH as f32 * 2.0);
        assert_eq!(w.particle_count(), w.attractors[0].particles.len());
    }
}
