//! Canvas-backed drawing surface

use std::f64::consts::TAU;

use mangala_core::{Size, Surface, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::WebError;

/// [`Surface`] over a canvas 2D context
///
/// Drawing calls that throw (only possible with non-finite geometry) are
/// skipped; a bad particle must not stop the frame.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to a canvas element, requesting a transparent context
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, WebError> {
        let id = canvas.id();
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"alpha".into(), &true.into())?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)?
            .ok_or_else(|| WebError::NoContext(id.clone()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoContext(id))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to `size`
    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Size) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f64, inner: &str, outer: &str) {
        let Ok(gradient) =
            self.ctx
                .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        else {
            return;
        };
        if gradient.add_color_stop(0.0, inner).is_err() || gradient.add_color_stop(1.0, outer).is_err() {
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        for (from, to) in segments {
            self.ctx.move_to(from.x, from.y);
            self.ctx.line_to(to.x, to.y);
        }
        self.ctx.stroke();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(center.x, center.y, radii.x, radii.y, 0.0, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
