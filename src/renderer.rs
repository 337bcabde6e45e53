// Drawing surface abstraction and its 2d-canvas implementation.
// The simulator only ever talks to the Surface trait; the canvas,
// like the frame scheduler and resize events, belongs to the host page.

use crate::color::Color;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Minimal set of primitives the particle field needs from a renderer.
pub trait Surface {
    /// Wipes the whole surface at the start of a frame.
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle of `radius` at `(x, y)`, blended at `alpha`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

    /// Straight segment between two points, blended at `alpha`.
    fn stroke_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        alpha: f64,
        width: f64,
    );

    /// New pixel dimensions from the host. Surfaces without a backing
    /// store to grow can ignore this.
    fn set_size(&mut self, _width: f64, _height: f64) {}
}

/// `Surface` over the 2d context of a canvas element. Owns the element
/// so resize notifications can update the backing store as well.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> CanvasRenderer {
        CanvasRenderer { canvas, context }
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
        self.context.begin_path();
        // arc only fails on a non-finite radius, which the field never produces
        let _ = self
            .context
            .arc(x, y, radius, 0.0, 2.0 * std::f64::consts::PI);
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css_rgba(alpha)));
        self.context.fill();
    }

    fn stroke_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        alpha: f64,
        width: f64,
    ) {
        self.context.begin_path();
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css_rgba(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }
}
