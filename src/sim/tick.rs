//! Per-frame simulation step
//!
//! One call advances the run by exactly one displayed frame. Movement is
//! per frame; `dt_ms` only feeds the survival clock and difficulty curve.

use super::collision::intersects;
use super::entity::SpaceObject;
use super::state::{GamePhase, SimState};
use crate::hud;
use crate::render::RenderSurface;

/// Held directions for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Presentation extras drawn on top of the world each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    /// Best survival time to show next to the clock
    pub best_time_ms: Option<u64>,
    /// Outline the spawn zones
    pub show_spawn_zones: bool,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run was already over; nothing changed
    Halted,
    /// Frame advanced, ship still alive
    Running,
    /// This frame's collision ended the run
    Terminated { survived_ms: u64 },
}

/// Advance the run by one frame
///
/// Order within a frame: clear, stars, asteroids, ship, HUD, replenish,
/// prune, collision test. Once terminated the state is frozen.
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    dt_ms: f64,
    overlay: &Overlay,
    surface: &mut dyn RenderSurface,
) -> TickOutcome {
    if state.is_terminated() {
        return TickOutcome::Halted;
    }

    let viewport = state.viewport;
    state.elapsed_ms += dt_ms.max(0.0);
    state.frame += 1;

    surface.clear(viewport.width, viewport.height);
    if overlay.show_spawn_zones {
        for zone in state.population.zones() {
            zone.draw(surface);
        }
    }

    for particle in &mut state.population.particles {
        particle.update();
        particle.draw(surface);
    }

    for obstacle in &mut state.population.obstacles {
        obstacle.update();
        obstacle.draw(surface);
    }

    state.ship.steer(input);
    state.ship.update();
    state.ship.wrap(viewport);
    state.ship.draw(surface);

    hud::draw(surface, state.elapsed_whole_ms(), overlay.best_time_ms);

    let elapsed_ms = state.elapsed_ms;
    let (population, rng) = state.population_and_rng();
    population.replenish(rng, viewport, elapsed_ms);
    population.prune(viewport);

    let hit = state
        .population
        .obstacles
        .iter()
        .any(|obstacle| intersects(&state.ship, obstacle));

    if hit {
        state.phase = GamePhase::Terminated;
        let survived_ms = state.elapsed_whole_ms();
        log::info!(
            "Ship destroyed after {} ({} asteroids on screen)",
            hud::format_elapsed(survived_ms),
            state.population.obstacles.len()
        );
        return TickOutcome::Terminated { survived_ms };
    }

    TickOutcome::Running
}
