//! Moving entities: background stars and asteroids
//!
//! Every entity implements [`SpaceObject`]. Positions are box centres in
//! screen space (y grows downward); headings are radians measured from +x
//! toward +y, so a heading of 270° points up the screen.

use glam::Vec2;
use rand::Rng;

use super::state::Viewport;
use crate::consts::*;
use crate::render::{Color, Glow, RenderSurface};

/// Shared capabilities of everything that lives in the simulation
pub trait SpaceObject {
    /// Box centre
    fn pos(&self) -> Vec2;

    /// Box extent (width, height)
    fn size(&self) -> Vec2;

    fn color(&self) -> Color;

    /// Advance one frame
    fn update(&mut self);

    fn draw(&self, surface: &mut dyn RenderSurface);
}

/// Unit direction vector for a heading
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// A background star drifting on a fixed heading
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub speed: f32,
    pub heading: f32,
}

impl Particle {
    /// Star at a random viewport position with a random heading
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * viewport.width,
            rng.random::<f32>() * viewport.height,
        );
        Self {
            pos,
            size: Vec2::splat(STAR_SIZE),
            color: Color::WHITE,
            speed: STAR_SPEED,
            heading: rng.random::<f32>() * std::f32::consts::TAU,
        }
    }
}

impl SpaceObject for Particle {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn color(&self) -> Color {
        self.color
    }

    fn update(&mut self) {
        self.pos += heading_vector(self.heading) * self.speed;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.fill_circle(self.pos.x, self.pos.y, self.size.x / 2.0, self.color);
    }
}

/// An asteroid crossing the screen on a fixed heading
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub speed: f32,
    pub heading: f32,
}

impl SpaceObject for Obstacle {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn color(&self) -> Color {
        self.color
    }

    fn update(&mut self) {
        self.pos += heading_vector(self.heading) * self.speed;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let half = self.size / 2.0;
        surface.fill_rect(
            self.pos.x - half.x,
            self.pos.y - half.y,
            self.size.x,
            self.size.y,
            self.color,
            Glow::None,
        );
    }
}
