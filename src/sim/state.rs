//! Simulation state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::population::Population;
use super::ship::Ship;

/// Visible play area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship alive, world advancing
    Running,
    /// Ship hit an asteroid; nothing moves any more
    Terminated,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Simulated time survived so far (ms)
    pub elapsed_ms: f64,
    /// Frames advanced while running
    pub frame: u64,
    pub ship: Ship,
    pub population: Population,
    rng: Pcg32,
}

impl SimState {
    /// Fresh run: full starfield, no asteroids, ship in the middle
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let population = Population::new(&mut rng, viewport);

        Self {
            seed,
            viewport,
            phase: GamePhase::Running,
            elapsed_ms: 0.0,
            frame: 0,
            ship: Ship::centered(viewport),
            population,
            rng,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == GamePhase::Terminated
    }

    /// Whole milliseconds survived
    pub fn elapsed_whole_ms(&self) -> u64 {
        self.elapsed_ms.max(0.0) as u64
    }

    /// Split borrow of the RNG alongside the population it feeds
    pub(crate) fn population_and_rng(&mut self) -> (&mut Population, &mut Pcg32) {
        (&mut self.population, &mut self.rng)
    }
}
