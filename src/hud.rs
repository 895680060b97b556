//! Survival clock overlay

use crate::render::{Color, HUD_FONT, RenderSurface};

/// Format milliseconds as `MM:SS:mmm`
///
/// Minutes keep growing past 99 rather than wrapping.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms / 1000) % 60;
    let millis = ms % 1000;
    format!("{:02}:{:02}:{:03}", minutes, seconds, millis)
}

/// Draw the running clock and, if known, the best time below it
pub fn draw(surface: &mut dyn RenderSurface, elapsed_ms: u64, best_time_ms: Option<u64>) {
    surface.draw_text(&format_elapsed(elapsed_ms), 10.0, 30.0, HUD_FONT, Color::WHITE);
    if let Some(best) = best_time_ms {
        let text = format!("Best: {}", format_elapsed(best));
        surface.draw_text(&text, 10.0, 60.0, HUD_FONT, Color::WHITE);
    }
}
