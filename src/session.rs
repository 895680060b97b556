//! Loop driver
//!
//! A [`Session`] turns host frame callbacks into simulation ticks. It owns the
//! run, the frame clock and the best-time store, and tells the host whether to
//! request another frame.

use crate::best_time::{BestTimeStore, beats};
use crate::render::RenderSurface;
use crate::settings::Settings;
use crate::sim::{SimState, TickInput, TickOutcome, Viewport, tick};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Turns host timestamps into frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous timestamp
    ///
    /// The first call only primes the clock and returns 0. A timestamp older
    /// than the previous one also yields 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last_timestamp {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }
}

/// One run plus everything needed to drive it frame by frame
pub struct Session<S: BestTimeStore> {
    state: SimState,
    clock: FrameClock,
    store: S,
    /// Best time as read when the run started
    best_time: Option<u64>,
    best_time_committed: bool,
    settings: Settings,
}

impl<S: BestTimeStore> Session<S> {
    pub fn new(seed: u64, viewport: Viewport, store: S, settings: Settings) -> Self {
        let best_time = store.get_best_time();
        log::info!(
            "Starting run: seed {}, viewport {}x{}, best {:?} ms",
            seed,
            viewport.width,
            viewport.height,
            best_time
        );
        Self {
            state: SimState::new(seed, viewport),
            clock: FrameClock::new(),
            store,
            best_time,
            best_time_committed: false,
            settings,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best_time(&self) -> Option<u64> {
        self.best_time
    }

    /// Flip the spawn-zone outline; applies from the next frame
    pub fn toggle_spawn_zones(&mut self) -> &Settings {
        self.settings.show_spawn_zones = !self.settings.show_spawn_zones;
        let state = if self.settings.show_spawn_zones {
            "on"
        } else {
            "off"
        };
        log::info!("Spawn zone outline {}", state);
        &self.settings
    }

    /// Start over with a fresh run
    pub fn restart(&mut self, seed: u64) {
        let viewport = self.state.viewport;
        self.state = SimState::new(seed, viewport);
        self.clock = FrameClock::new();
        self.best_time = self.store.get_best_time();
        self.best_time_committed = false;
        log::info!("Run restarted with seed {}", seed);
    }

    /// Handle one host frame callback
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        input: &TickInput,
        surface: &mut dyn RenderSurface,
    ) -> LoopControl {
        if self.state.is_terminated() {
            self.commit_best_time();
            return LoopControl::Stop;
        }

        let dt_ms = self.clock.advance(timestamp_ms);
        let overlay = self.settings.overlay(self.best_time);

        match tick(&mut self.state, input, dt_ms, &overlay, surface) {
            TickOutcome::Running => LoopControl::Continue,
            TickOutcome::Terminated { .. } | TickOutcome::Halted => {
                self.commit_best_time();
                LoopControl::Stop
            }
        }
    }

    /// Persist the survival time if it beats the best read at start
    ///
    /// Runs at most once per run.
    fn commit_best_time(&mut self) {
        if self.best_time_committed {
            return;
        }
        self.best_time_committed = true;

        let survived_ms = self.state.elapsed_whole_ms();
        if !beats(self.best_time, survived_ms) {
            log::info!(
                "Survived {} ms, best remains {:?} ms",
                survived_ms,
                self.best_time
            );
            return;
        }

        self.store.set_best_time(survived_ms);
        match self.best_time {
            Some(old) => log::info!("New best time {} ms (was {} ms)", survived_ms, old),
            None => log::info!("First best time recorded: {} ms", survived_ms),
        }
        self.best_time = Some(survived_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_time::MemoryStore;
    use crate::render::testing::{DrawCall, RecordingSurface};
    use crate::render::{Color, NullSurface};
    use crate::sim::{GamePhase, Obstacle};
    use glam::Vec2;

    fn session(store: MemoryStore) -> Session<MemoryStore> {
        Session::new(
            21,
            Viewport::new(800.0, 600.0),
            store,
            Settings::default(),
        )
    }

    /// Park an asteroid on the ship so the next frame ends the run
    fn doom(session: &mut Session<MemoryStore>) {
        let pos = session.state.ship.pos;
        session.state.population.obstacles.push(Obstacle {
            pos,
            size: Vec2::splat(20.0),
            color: Color::gray(50),
            speed: 0.0,
            heading: 0.0,
        });
    }

    #[test]
    fn test_clock_primes_then_measures() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 0.0);
        assert_eq!(clock.advance(1016.0), 16.0);
        assert_eq!(clock.advance(1000.0), 0.0);
        assert_eq!(clock.advance(1010.0), 10.0);
    }

    #[test]
    fn test_running_frames_accumulate_time() {
        let mut s = session(MemoryStore::new());
        let input = TickInput::default();
        assert_eq!(s.frame(500.0, &input, &mut NullSurface), LoopControl::Continue);
        assert_eq!(s.frame(520.0, &input, &mut NullSurface), LoopControl::Continue);
        assert_eq!(s.frame(550.0, &input, &mut NullSurface), LoopControl::Continue);
        assert_eq!(s.state().elapsed_ms, 50.0);
        assert_eq!(s.store().writes(), 0);
    }

    #[test]
    fn test_termination_writes_best_once() {
        let mut s = session(MemoryStore::new());
        let input = TickInput::default();
        s.frame(0.0, &input, &mut NullSurface);
        s.frame(1000.0, &input, &mut NullSurface);
        doom(&mut s);

        assert_eq!(s.frame(2500.0, &input, &mut NullSurface), LoopControl::Stop);
        assert_eq!(s.state().phase, GamePhase::Terminated);
        assert_eq!(s.store().get_best_time(), Some(2500));
        assert_eq!(s.store().writes(), 1);

        let ship = s.state().ship.clone();
        let obstacles = s.state().population.obstacles.clone();

        // Host calls again anyway
        assert_eq!(s.frame(2600.0, &input, &mut NullSurface), LoopControl::Stop);
        assert_eq!(s.frame(2700.0, &input, &mut NullSurface), LoopControl::Stop);
        assert_eq!(s.store().writes(), 1);
        assert_eq!(s.state().phase, GamePhase::Terminated);
        assert_eq!(s.state().ship, ship);
        assert_eq!(s.state().population.obstacles, obstacles);
        assert_eq!(s.state().elapsed_ms, 2500.0);
    }

    #[test]
    fn test_shorter_run_keeps_stored_best() {
        let mut s = session(MemoryStore::with_best(60_000));
        assert_eq!(s.best_time(), Some(60_000));

        let input = TickInput::default();
        s.frame(0.0, &input, &mut NullSurface);
        doom(&mut s);
        assert_eq!(s.frame(3000.0, &input, &mut NullSurface), LoopControl::Stop);

        assert_eq!(s.store().get_best_time(), Some(60_000));
        assert_eq!(s.store().writes(), 0);
    }

    #[test]
    fn test_longer_run_replaces_best() {
        let mut s = session(MemoryStore::with_best(1_000));
        let input = TickInput::default();
        s.frame(0.0, &input, &mut NullSurface);
        doom(&mut s);
        s.frame(4000.0, &input, &mut NullSurface);

        assert_eq!(s.store().get_best_time(), Some(4000));
        assert_eq!(s.best_time(), Some(4000));
    }

    #[test]
    fn test_restart_after_termination() {
        let mut s = session(MemoryStore::new());
        let input = TickInput::default();
        s.frame(0.0, &input, &mut NullSurface);
        doom(&mut s);
        s.frame(700.0, &input, &mut NullSurface);
        assert!(s.state().is_terminated());

        s.restart(22);
        assert_eq!(s.state().phase, GamePhase::Running);
        assert_eq!(s.state().elapsed_ms, 0.0);
        assert_eq!(s.best_time(), Some(700));

        // Fresh clock: first frame after restart adds no time
        assert_eq!(s.frame(90_000.0, &input, &mut NullSurface), LoopControl::Continue);
        assert_eq!(s.state().elapsed_ms, 0.0);
    }

    #[test]
    fn test_toggle_spawn_zones_persists_and_draws() {
        let mut s = session(MemoryStore::new());
        let input = TickInput::default();
        let count_outlines = |surface: &RecordingSurface| {
            surface
                .calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Stroke))
                .count()
        };

        let mut surface = RecordingSurface::default();
        s.frame(0.0, &input, &mut surface);
        assert_eq!(count_outlines(&surface), 0);

        let settings = s.toggle_spawn_zones().clone();
        assert!(settings.show_spawn_zones);
        settings.save();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), *s.settings());

        let mut surface = RecordingSurface::default();
        s.frame(16.0, &input, &mut surface);
        assert_eq!(count_outlines(&surface), 4);

        assert!(!s.toggle_spawn_zones().show_spawn_zones);
    }
}
