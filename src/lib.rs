//! Star Dodge - survive an ever-thickening asteroid field
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, frame tick)
//! - `session`: Frame clock and loop driver around the simulation
//! - `render`: Render surface abstraction the simulation draws through
//! - `hud`: Elapsed/best time overlay
//! - `best_time`: Best survival time persistence
//! - `settings`: Presentation preferences
//! - `input`: Keyboard to direction mapping
//! - `platform`: Browser canvas and storage adapters

pub mod best_time;
pub mod hud;
pub mod input;
pub mod platform;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use best_time::{BestTimeStore, MemoryStore};
pub use session::{LoopControl, Session};
pub use settings::Settings;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Background stars kept alive at all times
    pub const STAR_COUNT: usize = 100;
    /// Star drift speed (pixels per frame)
    pub const STAR_SPEED: f32 = 0.5;
    /// Star diameter
    pub const STAR_SIZE: f32 = 2.0;

    /// Asteroids on screen at t=0
    pub const ASTEROIDS_ON_SCREEN: f64 = 10.0;
    /// Extra asteroids allowed per elapsed second
    pub const ASTEROIDS_OVER_TIME: f64 = 0.3;
    /// Asteroid speed spread: speed is drawn from [1, 1 + ASTEROID_SPEED)
    pub const ASTEROID_SPEED: f32 = 3.0;
    /// Asteroid edge length
    pub const ASTEROID_SIZE: f32 = 20.0;

    /// Spawn zone depth perpendicular to its viewport edge
    pub const SPAWN_ZONE_DEPTH: f32 = 10.0;
    /// How far a spawn zone reaches back into the viewport
    pub const SPAWN_ZONE_OVERLAP: f32 = 1.0;

    /// Ship edge length
    pub const SHIP_SIZE: f32 = 20.0;
    /// Ship speed (pixels per frame) along each held axis
    pub const SHIP_SPEED: f32 = 5.0;
}

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Random angle (radians) between two degree bounds
///
/// Samples `rad1 + random * (rad2 - rad1)`, which is only uniform over
/// `[rad1, rad2)` when `deg2 >= deg1`.
#[inline]
pub fn random_angle_between<R: Rng + ?Sized>(rng: &mut R, deg1: f32, deg2: f32) -> f32 {
    debug_assert!(
        deg2 >= deg1,
        "random_angle_between: deg2 ({}) must be >= deg1 ({})",
        deg2,
        deg1
    );
    let rad1 = degrees_to_radians(deg1);
    let rad2 = degrees_to_radians(deg2);
    rad1 + rng.random::<f32>() * (rad2 - rad1)
}
