use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Settings;
use crate::domain::{Pattern, Polygon, Universe};

/// Simulation orchestrates the frame loop.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub universe: Universe,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    /// Accumulated y-axis spin in degrees, kept in [0, 360)
    pub rotation_angle: f32,
    rotate: bool,
    population: u8,
    pattern: Option<Pattern>,
    rng: StdRng,
}

impl Simulation {
    /// Create and seed a simulation from validated settings
    pub fn new(settings: &Settings) -> Self {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let universe = Universe::new(
            settings.variant,
            settings.field_dim,
            settings.rules,
            settings.viewport(),
        );

        let simulation = Self {
            universe,
            is_running: true,
            update_timer: 0.0,
            updates_per_second: settings.tick_rate,
            rotation_angle: 0.0,
            rotate: settings.variant.rotates(),
            population: settings.population,
            pattern: settings.pattern.clone(),
            rng,
        };
        simulation.reseed()
    }

    /// Re-run the initial seeding: the configured pattern or a random population
    pub fn reseed(mut self) -> Self {
        match &self.pattern {
            Some(pattern) => self.universe.seed_pattern(pattern),
            None => {
                self.universe.initialize(self.population, &mut self.rng);
            }
        }
        self.update_timer = 0.0;
        tracing::info!(
            variant = ?self.universe.variant(),
            rules = %self.universe.rules(),
            alive = self.universe.population(),
            "universe seeded"
        );
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        tracing::info!(running = self.is_running, "toggled simulation");
        self
    }

    /// Advance one generation and, in 3D, spin the camera by one degree
    pub fn advance(mut self) -> Self {
        self.universe.step();
        if self.rotate {
            self.rotation_angle = (self.rotation_angle + 1.0).rem_euclid(360.0);
        }
        self
    }

    /// Update simulation by one frame of `delta_time` seconds.
    /// Steps at most once per call, once the tick interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    /// Depth-sorted polygons for the current generation and rotation
    pub fn polygons(&self) -> Vec<Polygon> {
        self.universe.polygons(self.rotation_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Variant, presets};

    fn settings(variant: Variant) -> Settings {
        Settings {
            variant,
            rules: variant.default_rules(),
            tick_rate: variant.default_tick_rate(),
            seed: Some(5),
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_seeds_population() {
        let sim = Simulation::new(&settings(Variant::TwoD));
        assert_eq!(sim.universe.population(), 50);
        assert_eq!(sim.universe.generation(), 0);
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = Simulation::new(&settings(Variant::ThreeD));
        let b = Simulation::new(&settings(Variant::ThreeD));
        assert_eq!(a.universe.alive_coordinates(), b.universe.alive_coordinates());
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = Simulation::new(&settings(Variant::TwoD));

        // 10 generations per second -> 0.1s interval
        let sim = sim.tick(0.05);
        assert_eq!(sim.universe.generation(), 0);

        let sim = sim.tick(0.06);
        assert_eq!(sim.universe.generation(), 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_paused_simulation_does_not_step() {
        let sim = Simulation::new(&settings(Variant::TwoD)).toggle_running();
        let sim = sim.tick(10.0);
        assert_eq!(sim.universe.generation(), 0);
    }

    #[test]
    fn test_only_3d_rotates() {
        let flat = Simulation::new(&settings(Variant::TwoD)).advance().advance();
        assert_eq!(flat.rotation_angle, 0.0);

        let mut spinning = Simulation::new(&settings(Variant::ThreeD));
        for _ in 0..3 {
            spinning = spinning.advance();
        }
        assert_eq!(spinning.rotation_angle, 3.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut sim = Simulation::new(&settings(Variant::ThreeD));
        sim.rotation_angle = 359.0;
        let sim = sim.advance();
        assert_eq!(sim.rotation_angle, 0.0);
    }

    #[test]
    fn test_reseed_with_pattern() {
        let mut s = settings(Variant::TwoD);
        s.pattern = Some(presets::blinker());

        let sim = Simulation::new(&s).advance().reseed();
        assert_eq!(sim.universe.generation(), 0);
        assert_eq!(sim.universe.population(), 3);
    }

    #[test]
    fn test_polygons_cover_every_face() {
        let sim = Simulation::new(&settings(Variant::TwoD));
        let polygons = sim.polygons();

        assert_eq!(polygons.len(), sim.universe.cells().len() * 6);
        assert!(polygons.windows(2).all(|w| w[0].depth >= w[1].depth));
    }
}
