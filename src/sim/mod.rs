//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (a run replays exactly from its seed and inputs)
//! - Frame-based movement, wall-clock time only for the survival clock
//! - No platform dependencies; drawing goes through `RenderSurface`

pub mod collision;
pub mod entity;
pub mod population;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{OutOfBounds, intersects, out_of_bounds};
pub use entity::{Obstacle, Particle, SpaceObject};
pub use population::{Population, obstacle_target};
pub use ship::Ship;
pub use spawn::{SpawnZone, ZoneSide};
pub use state::{GamePhase, SimState, Viewport};
pub use tick::{Overlay, TickInput, TickOutcome, tick};
