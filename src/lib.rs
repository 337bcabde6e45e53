// Wasm entry point for the hero background. The host page mounts the
// wrapper on its canvas element, then drives it: `tick` from its
// requestAnimationFrame callback, `resize` from its window resize
// handler. Each tick is one synchronous simulation frame.

mod utils;

pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod simulator;

use renderer::CanvasRenderer;
use simulator::FieldSimulator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// The hero-section particle background, bound to one canvas element.
#[wasm_bindgen]
pub struct HeroCanvas {
    simulator: FieldSimulator<CanvasRenderer>,
}

#[wasm_bindgen]
impl HeroCanvas {
    /// Looks the canvas up in the document. A page without the element
    /// (or without a 2d context) gets an inert instance whose `start`
    /// and `tick` are no-ops.
    pub fn mount(canvas_id: &str) -> HeroCanvas {
        HeroCanvas {
            simulator: FieldSimulator::new(lookup_canvas(canvas_id)),
        }
    }

    /// Populates the field and adopts the initial surface bounds. A
    /// `count` of zero selects the default population of 60.
    pub fn start(&mut self, width: f64, height: f64, count: u32) {
        self.simulator.start(width, height, count);
        if self.simulator.particle_count() > 0 {
            console::log_1(
                &format!(
                    "hero canvas: field of {} particles on {}x{}",
                    self.simulator.particle_count(),
                    width,
                    height
                )
                .into(),
            );
        }
    }

    /// New viewport dimensions from the host's resize handler.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.simulator.resize(width, height);
    }

    /// One animation frame; call from requestAnimationFrame.
    pub fn tick(&mut self) {
        self.simulator.step();
    }

    pub fn particle_count(&self) -> u32 {
        self.simulator.particle_count() as u32
    }
}

fn lookup_canvas(canvas_id: &str) -> Option<CanvasRenderer> {
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
    let context: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    Some(CanvasRenderer::new(canvas, context))
}
