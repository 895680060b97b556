//! Star and asteroid population management
//!
//! Each frame the population tops itself up by at most one star and one
//! asteroid, then drops anything that has drifted off screen. The asteroid
//! cap grows linearly with survival time, which is the whole difficulty curve.

use rand::Rng;

use super::collision::out_of_bounds;
use super::entity::{Obstacle, Particle};
use super::spawn::SpawnZone;
use super::state::Viewport;
use crate::consts::*;

/// Asteroid count the population grows toward after `elapsed_ms`
pub fn obstacle_target(elapsed_ms: f64) -> f64 {
    ASTEROIDS_ON_SCREEN + (elapsed_ms / 1000.0) * ASTEROIDS_OVER_TIME
}

/// Live stars and asteroids plus the zones asteroids come from
#[derive(Debug, Clone)]
pub struct Population {
    pub particles: Vec<Particle>,
    pub obstacles: Vec<Obstacle>,
    zones: [SpawnZone; 4],
}

impl Population {
    /// Full starfield, no asteroids yet
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let particles = (0..STAR_COUNT)
            .map(|_| Particle::random(&mut *rng, viewport))
            .collect();

        Self {
            particles,
            obstacles: Vec::new(),
            zones: SpawnZone::around(viewport),
        }
    }

    pub fn zones(&self) -> &[SpawnZone; 4] {
        &self.zones
    }

    /// Add one star if below `STAR_COUNT`; returns whether one was added
    pub fn replenish_stars<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> bool {
        if self.particles.len() >= STAR_COUNT {
            return false;
        }
        self.particles.push(Particle::random(rng, viewport));
        true
    }

    /// Spawn one asteroid from a random zone if below the current target
    pub fn replenish_obstacles<R: Rng + ?Sized>(&mut self, rng: &mut R, elapsed_ms: f64) -> bool {
        if self.obstacles.len() as f64 >= obstacle_target(elapsed_ms) {
            return false;
        }
        let zone = &self.zones[rng.random_range(0..self.zones.len())];
        zone.spawn_obstacle(rng, &mut self.obstacles);
        true
    }

    /// Run both top-ups for this frame
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, elapsed_ms: f64) {
        self.replenish_stars(rng, viewport);
        self.replenish_obstacles(rng, elapsed_ms);
    }

    /// Drop every star and asteroid that has left the world on any edge
    pub fn prune(&mut self, viewport: Viewport) {
        let Viewport { width, height } = viewport;
        self.particles.retain(|p| !out_of_bounds(p, width, height).any());
        self.obstacles.retain(|o| !out_of_bounds(o, width, height).any());
    }
}
