//! Spawn zones
//!
//! Four thin strips hug the outside of the viewport, one per edge, each
//! reaching one unit into the playfield. Asteroids appear somewhere inside a
//! strip and head roughly across the screen.

use glam::Vec2;
use rand::Rng;

use super::entity::Obstacle;
use super::state::Viewport;
use crate::consts::*;
use crate::random_angle_between;
use crate::render::{Color, RenderSurface};

/// Which edge a zone sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSide {
    Bottom,
    Top,
    Left,
    Right,
}

impl ZoneSide {
    pub const ALL: [ZoneSide; 4] = [
        ZoneSide::Bottom,
        ZoneSide::Top,
        ZoneSide::Left,
        ZoneSide::Right,
    ];

    /// Draw an inward heading (radians) for an asteroid leaving this side
    ///
    /// Left and right add two independent draws, which bunches headings
    /// toward the middle of the arc.
    pub fn random_heading<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match self {
            ZoneSide::Bottom => random_angle_between(rng, 200.0, 340.0),
            ZoneSide::Top => random_angle_between(rng, 20.0, 160.0),
            ZoneSide::Left => {
                random_angle_between(rng, 275.0, 360.0) + random_angle_between(rng, 5.0, 80.0)
            }
            ZoneSide::Right => {
                random_angle_between(rng, 95.0, 175.0) + random_angle_between(rng, 5.0, 85.0)
            }
        }
    }
}

/// A spawn strip outside one viewport edge
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnZone {
    pub side: ZoneSide,
    /// Strip centre
    pub pos: Vec2,
    pub size: Vec2,
}

impl SpawnZone {
    /// Build the strip for `side` around `viewport`
    pub fn new(side: ZoneSide, viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        // Distance from the edge to the strip centre, outward
        let offset = SPAWN_ZONE_DEPTH / 2.0 - SPAWN_ZONE_OVERLAP;

        let (pos, size) = match side {
            ZoneSide::Bottom => (
                Vec2::new(width / 2.0, height + offset),
                Vec2::new(width, SPAWN_ZONE_DEPTH),
            ),
            ZoneSide::Top => (
                Vec2::new(width / 2.0, -offset),
                Vec2::new(width, SPAWN_ZONE_DEPTH),
            ),
            ZoneSide::Left => (
                Vec2::new(-offset, height / 2.0),
                Vec2::new(SPAWN_ZONE_DEPTH, height),
            ),
            ZoneSide::Right => (
                Vec2::new(width + offset, height / 2.0),
                Vec2::new(SPAWN_ZONE_DEPTH, height),
            ),
        };

        Self { side, pos, size }
    }

    /// All four zones around a viewport
    pub fn around(viewport: Viewport) -> [SpawnZone; 4] {
        ZoneSide::ALL.map(|side| SpawnZone::new(side, viewport))
    }

    /// Top-left corner of the strip
    pub fn min(&self) -> Vec2 {
        self.pos - self.size / 2.0
    }

    /// Create one asteroid inside this zone and append it to `obstacles`
    pub fn spawn_obstacle<R: Rng + ?Sized>(&self, rng: &mut R, obstacles: &mut Vec<Obstacle>) {
        let min = self.min();
        let pos = Vec2::new(
            min.x + rng.random::<f32>() * self.size.x,
            min.y + rng.random::<f32>() * self.size.y,
        );
        let speed = 1.0 + rng.random::<f32>() * ASTEROID_SPEED;
        let color = Color::gray(rng.random_range(0..=255));
        let heading = self.side.random_heading(rng);

        obstacles.push(Obstacle {
            pos,
            size: Vec2::splat(ASTEROID_SIZE),
            color,
            speed,
            heading,
        });
    }

    /// Outline the strip (debug overlay)
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        let min = self.min();
        surface.stroke_rect(min.x, min.y, self.size.x, self.size.y, Color::ZONE_OUTLINE, 1.0);
    }
}
