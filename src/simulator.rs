// Particle field simulator: owns the field and the surface bounds, and
// advances one whole frame per call. The host's requestAnimationFrame
// loop drives `step`; nothing here schedules or blocks.

use crate::color;
use crate::field::Field;
use crate::renderer::Surface;

pub struct FieldSimulator<S: Surface> {
    surface: Option<S>,
    field: Field,
    width: f64,
    height: f64,
}

impl<S: Surface> FieldSimulator<S> {
    /// Particles closer than this get a connecting line.
    pub const LINK_DIST: f64 = 120.0;
    /// Line opacity is `0.1 - dist / LINK_FADE`, zero exactly at LINK_DIST.
    pub const LINK_FADE: f64 = 1200.0;
    pub const LINK_WIDTH: f64 = 0.5;
    pub const DOT_ALPHA: f64 = 0.4;

    /// A `None` surface produces an inert simulator: `start` and `step`
    /// become no-ops and the field stays empty. A page without the hero
    /// canvas is a supported configuration, not an error.
    pub fn new(surface: Option<S>) -> FieldSimulator<S> {
        FieldSimulator {
            surface,
            field: Field::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Sets the bounds and populates the field with `count` randomized
    /// particles, or `Field::DEFAULT_COUNT` when `count` is zero. Called
    /// once; the population is fixed from here on.
    pub fn start(&mut self, width: f64, height: f64, count: u32) {
        if self.surface.is_none() {
            return;
        }
        self.width = width;
        self.height = height;
        let count = if count == 0 {
            Field::DEFAULT_COUNT
        } else {
            count
        };
        let mut rng = rand::thread_rng();
        self.field.populate(&mut rng, count, width, height);
    }

    /// Adopts new surface bounds for future boundary checks. Existing
    /// particles are not repositioned; ones now outside the bounds are
    /// corrected lazily by reflection. Callable at any time, including
    /// between `start` and the first `step`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(width, height);
        }
    }

    /// One frame: clear, advance and draw every particle, then the
    /// connection pass. The pass is O(N^2) over the field; fine for the
    /// tens of particles this background runs with, a scaling limit if
    /// N ever grows into the thousands.
    pub fn step(&mut self) {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return,
        };
        surface.clear(self.width, self.height);

        for p in self.field.particles_mut() {
            p.update(self.width, self.height);
            surface.fill_circle(p.x, p.y, p.size, p.color, Self::DOT_ALPHA);
        }

        let particles = self.field.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dx = particles[i].x - particles[j].x;
                let dy = particles[i].y - particles[j].y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < Self::LINK_DIST {
                    surface.stroke_line(
                        particles[i].x,
                        particles[i].y,
                        particles[j].x,
                        particles[j].y,
                        color::LINK_WHITE,
                        0.1 - dist / Self::LINK_FADE,
                        Self::LINK_WIDTH,
                    );
                }
            }
        }
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }
}
