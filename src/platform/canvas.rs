//! Canvas 2D render surface

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::{Color, Glow, RenderSurface};

/// Draws straight into a canvas' 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Honour `Glow` requests (shadow blur is expensive on some devices)
    glow: bool,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement, glow: bool) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, glow })
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.set_fill_style_str(&Color::BLACK.to_css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, glow: Glow) {
        if let (true, Glow::Soft { blur, color: glow_color }) = (self.glow, glow) {
            self.ctx.set_shadow_blur(blur as f64);
            self.ctx.set_shadow_color(&glow_color.to_css());
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
