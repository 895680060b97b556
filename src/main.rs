//! Star Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use star_dodge::input::toggles_spawn_zones;
    use star_dodge::platform::canvas::CanvasSurface;
    use star_dodge::platform::storage::LocalStorageStore;
    use star_dodge::sim::{TickInput, Viewport};
    use star_dodge::{LoopControl, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        surface: CanvasSurface,
        input: TickInput,
        /// A frame is scheduled
        running: bool,
    }

    pub fn run() {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        console_error_panic_hook::set_once();
        log::info!("Star Dodge starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        // Fill the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let Some(surface) = CanvasSurface::from_canvas(&canvas, settings.glow) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let viewport = Viewport::new(width as f32, height as f32);
        let session = Session::new(seed, viewport, LocalStorageStore, settings);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            input: TickInput::default(),
            running: true,
        }));

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);
        log::info!("Star Dodge running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key press: steer, Z to outline spawn zones, or Enter to start over after a crash
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let restart = {
                    let mut g = game.borrow_mut();
                    if g.input.apply_key(&key, true) {
                        event.prevent_default();
                        false
                    } else if toggles_spawn_zones(&key) {
                        g.session.toggle_spawn_zones().save();
                        false
                    } else if key == "Enter" && !g.running {
                        let seed = js_sys::Date::now() as u64;
                        g.session.restart(seed);
                        g.input = TickInput::default();
                        g.running = true;
                        true
                    } else {
                        false
                    }
                };
                if restart {
                    request_animation_frame(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.apply_key(&event.key(), false) {
                    event.prevent_default();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = {
            let mut g = game.borrow_mut();
            let Game {
                session,
                surface,
                input,
                ..
            } = &mut *g;
            session.frame(time, input, surface)
        };

        match control {
            LoopControl::Continue => request_animation_frame(game),
            LoopControl::Stop => {
                game.borrow_mut().running = false;
                log::info!("Game over - press Enter to play again");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Star Dodge (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` to play");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cmp::Ordering;
    use std::time::{SystemTime, UNIX_EPOCH};

    use star_dodge::hud::format_elapsed;
    use star_dodge::render::NullSurface;
    use star_dodge::sim::{SimState, TickInput, Viewport};
    use star_dodge::{LoopControl, MemoryStore, Session, Settings};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Steer directly away from the nearest asteroid
    fn autopilot(state: &SimState) -> TickInput {
        let ship = state.ship.pos;
        let nearest = state.population.obstacles.iter().min_by(|a, b| {
            a.pos
                .distance_squared(ship)
                .partial_cmp(&b.pos.distance_squared(ship))
                .unwrap_or(Ordering::Equal)
        });

        match nearest {
            Some(obstacle) => {
                let away = ship - obstacle.pos;
                TickInput {
                    left: away.x < 0.0,
                    right: away.x > 0.0,
                    up: away.y < 0.0,
                    down: away.y > 0.0,
                }
            }
            None => TickInput::default(),
        }
    }

    pub fn run() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(1);

        let mut session = Session::new(
            seed,
            Viewport::new(800.0, 600.0),
            MemoryStore::new(),
            Settings::load(),
        );

        let mut surface = NullSurface;
        let mut frames = 0;
        while frames < MAX_FRAMES {
            let input = autopilot(session.state());
            let timestamp = frames as f64 * FRAME_MS;
            if session.frame(timestamp, &input, &mut surface) == LoopControl::Stop {
                break;
            }
            frames += 1;
        }

        let state = session.state();
        log::info!(
            "Autopilot survived {} over {} frames ({} asteroids on screen at the end)",
            format_elapsed(state.elapsed_whole_ms()),
            state.frame,
            state.population.obstacles.len()
        );
        if let Some(best) = session.best_time() {
            println!("Best time: {}", format_elapsed(best));
        }
    }
}
