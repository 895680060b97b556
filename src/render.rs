//! Render surface abstraction
//!
//! The simulation never owns a drawing context. It issues primitive draw
//! calls through [`RenderSurface`]; the host decides what a surface is
//! (a browser canvas, nothing at all, a recorder in tests).

use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Ship body
    pub const SHIP: Color = Color::rgb(0, 200, 255);
    /// Spawn zone debug outline
    pub const ZONE_OUTLINE: Color = Color::rgb(255, 64, 64);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grayscale color with all channels at `v`
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// CSS color string (`rgb(r, g, b)`)
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Glow applied around a filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glow {
    None,
    /// Soft shadow of the given blur radius and color
    Soft { blur: f32, color: Color },
}

/// Font used for HUD text (CSS font shorthand)
pub const HUD_FONT: &str = "20px monospace";

/// Drawing primitives the simulation needs from its host
///
/// Rectangles are given by their top-left corner; circles by their centre.
pub trait RenderSurface {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, glow: Glow);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32);
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color, _glow: Glow) {}

    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _font: &str, _color: Color) {}

    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color, _line_width: f32) {
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Rect { x: f32, y: f32, color: Color },
        Circle { x: f32, y: f32 },
        Text(String),
        Stroke,
    }

    /// Surface that records every call in order
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, color: Color, _glow: Glow) {
            self.calls.push(DrawCall::Rect { x, y, color });
        }

        fn fill_circle(&mut self, x: f32, y: f32, _radius: f32, _color: Color) {
            self.calls.push(DrawCall::Circle { x, y });
        }

        fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _font: &str, _color: Color) {
            self.calls.push(DrawCall::Text(text.to_string()));
        }

        fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color, _lw: f32) {
            self.calls.push(DrawCall::Stroke);
        }
    }
}
