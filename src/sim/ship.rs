//! The player's ship
//!
//! Velocity is rebuilt from the held directions every frame (no inertia) and
//! the ship wraps around the screen edges instead of being culled.

use glam::Vec2;

use super::collision::out_of_bounds;
use super::entity::SpaceObject;
use super::state::Viewport;
use super::tick::TickInput;
use crate::consts::*;
use crate::render::{Color, Glow, RenderSurface};

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Per-axis speed while a direction is held
    pub speed: f32,
    pub vel: Vec2,
}

impl Ship {
    /// Ship parked at the centre of the viewport
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            size: Vec2::splat(SHIP_SIZE),
            color: Color::SHIP,
            speed: SHIP_SPEED,
            vel: Vec2::ZERO,
        }
    }

    /// Rebuild velocity from the held directions
    ///
    /// Right is applied after left and down after up, so holding both
    /// directions on an axis moves right/down.
    pub fn steer(&mut self, input: &TickInput) {
        self.vel = Vec2::ZERO;
        if input.left {
            self.vel.x = -self.speed;
        }
        if input.right {
            self.vel.x = self.speed;
        }
        if input.up {
            self.vel.y = -self.speed;
        }
        if input.down {
            self.vel.y = self.speed;
        }
    }

    /// Move the ship to the opposite edge for each edge it has left
    pub fn wrap(&mut self, viewport: Viewport) {
        let oob = out_of_bounds(&*self, viewport.width, viewport.height);
        if oob.right {
            self.pos.x = -self.size.x;
        }
        if oob.left {
            self.pos.x = viewport.width;
        }
        if oob.bottom {
            self.pos.y = -self.size.y;
        }
        if oob.top {
            self.pos.y = viewport.height;
        }
    }
}

impl SpaceObject for Ship {
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
        self.pos += self.vel;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let half = self.size / 2.0;
        surface.fill_rect(
            self.pos.x - half.x,
            self.pos.y - half.y,
            self.size.x,
            self.size.y,
            self.color,
            Glow::Soft {
                blur: 15.0,
                color: self.color,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_centered() {
        let ship = Ship::centered(viewport());
        assert_eq!(ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ship.vel, Vec2::ZERO);
    }

    #[test]
    fn test_steer_single_directions() {
        let mut ship = Ship::centered(viewport());

        ship.steer(&TickInput {
            left: true,
            ..Default::default()
        });
        assert_eq!(ship.vel, Vec2::new(-SHIP_SPEED, 0.0));

        ship.steer(&TickInput {
            up: true,
            right: true,
            ..Default::default()
        });
        assert_eq!(ship.vel, Vec2::new(SHIP_SPEED, -SHIP_SPEED));
    }

    #[test]
    fn test_steer_opposites_prefer_right_and_down() {
        let mut ship = Ship::centered(viewport());
        ship.steer(&TickInput {
            left: true,
            right: true,
            up: true,
            down: true,
        });
        assert_eq!(ship.vel, Vec2::new(SHIP_SPEED, SHIP_SPEED));
    }

    #[test]
    fn test_release_stops_immediately() {
        let mut ship = Ship::centered(viewport());
        ship.steer(&TickInput {
            right: true,
            ..Default::default()
        });
        ship.update();
        assert_eq!(ship.pos.x, 400.0 + SHIP_SPEED);

        ship.steer(&TickInput::default());
        ship.update();
        assert_eq!(ship.pos.x, 400.0 + SHIP_SPEED);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut ship = Ship::centered(viewport());
        ship.pos.x = 800.0 + SHIP_SIZE + 1.0;
        ship.wrap(viewport());
        assert_eq!(ship.pos.x, -SHIP_SIZE);
        assert_eq!(ship.pos.y, 300.0);

        // Landing spot is not itself out of bounds
        let before = ship.pos;
        ship.wrap(viewport());
        assert_eq!(ship.pos, before);
    }

    #[test]
    fn test_wrap_left_top_bottom() {
        let mut ship = Ship::centered(viewport());
        ship.pos.x = -SHIP_SIZE - 1.0;
        ship.wrap(viewport());
        assert_eq!(ship.pos.x, 800.0);

        ship.pos.y = -SHIP_SIZE - 1.0;
        ship.wrap(viewport());
        assert_eq!(ship.pos.y, 600.0);

        ship.pos.y = 600.0 + SHIP_SIZE + 1.0;
        ship.wrap(viewport());
        assert_eq!(ship.pos.y, -SHIP_SIZE);
    }

    #[test]
    fn test_inside_edges_do_not_wrap() {
        let mut ship = Ship::centered(viewport());
        ship.pos.x = 801.0;
        ship.wrap(viewport());
        assert_eq!(ship.pos.x, 801.0);
    }
}
