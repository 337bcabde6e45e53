// Single point of the hero background: position, per-frame velocity,
// fixed size and accent color chosen at creation

use crate::color::{self, Color};
use rand::Rng;

pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    /// Radii are drawn from [0, MAX_SIZE).
    pub const MAX_SIZE: f64 = 1.5;
    /// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED).
    pub const MAX_SPEED: f64 = 0.2;

    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 0.0,
            color: color::ACCENT_CYAN,
        };
        p.reset(rng, width, height);
        p
    }

    /// Re-randomizes every field in place. Particles are never replaced
    /// after the field is populated, only reset.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.x = rng.gen::<f64>() * width;
        self.y = rng.gen::<f64>() * height;
        self.vx = (rng.gen::<f64>() - 0.5) * 2.0 * Self::MAX_SPEED;
        self.vy = (rng.gen::<f64>() - 0.5) * 2.0 * Self::MAX_SPEED;
        self.size = rng.gen::<f64>() * Self::MAX_SIZE;
        self.color = if rng.gen::<f64>() > 0.5 {
            color::ACCENT_CYAN
        } else {
            color::ACCENT_PURPLE
        };
    }

    /// Advances one frame and reflects off the surface bounds. A crossing
    /// turns that axis's velocity back toward the interior; the position is
    /// never clamped, so a particle outside the bounds (overshoot, or a
    /// shrinking resize) drifts back in over the following frames.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 {
            self.vx = self.vx.abs();
        } else if self.x > width {
            self.vx = -self.vx.abs();
        }
        if self.y < 0.0 {
            self.vy = self.vy.abs();
        } else if self.y > height {
            self.vy = -self.vy.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn reset_draws_from_documented_ranges() {
        let mut rng = rng();
        let mut p = Particle::new(&mut rng, 640.0, 480.0);
        for _ in 0..500 {
            p.reset(&mut rng, 640.0, 480.0);
            assert!(p.x >= 0.0 && p.x < 640.0);
            assert!(p.y >= 0.0 && p.y < 480.0);
            assert!(p.vx >= -Particle::MAX_SPEED && p.vx < Particle::MAX_SPEED);
            assert!(p.vy >= -Particle::MAX_SPEED && p.vy < Particle::MAX_SPEED);
            assert!(p.size >= 0.0 && p.size < Particle::MAX_SIZE);
            assert!(p.color == color::ACCENT_CYAN || p.color == color::ACCENT_PURPLE);
        }
    }

    #[test]
    fn crossing_the_right_wall_flips_vx() {
        let mut rng = rng();
        let mut p = Particle::new(&mut rng, 100.0, 100.0);
        p.x = 101.0;
        p.y = 50.0;
        p.vx = 0.3;
        p.vy = 0.0;

        p.update(100.0, 100.0);
        assert_eq!(p.vx, -0.3);

        let before = p.x;
        p.update(100.0, 100.0);
        assert!(p.x < before);
    }

    #[test]
    fn corner_crossing_flips_both_axes() {
        let mut rng = rng();
        let mut p = Particle::new(&mut rng, 100.0, 100.0);
        p.x = -0.2;
        p.y = -0.2;
        p.vx = -0.1;
        p.vy = -0.1;

        p.update(100.0, 100.0);
        assert_eq!(p.vx, 0.1);
        assert_eq!(p.vy, 0.1);
    }

    #[test]
    fn interior_motion_never_reflects() {
        let mut rng = rng();
        let mut p = Particle::new(&mut rng, 10_000.0, 10_000.0);
        p.x = 5_000.0;
        p.y = 5_000.0;
        p.vx = 0.15;
        p.vy = -0.15;

        for _ in 0..1000 {
            p.update(10_000.0, 10_000.0);
            assert_eq!(p.vx, 0.15);
            assert_eq!(p.vy, -0.15);
        }
    }

    #[test]
    fn overshoot_is_bounded_by_one_step() {
        let mut rng = rng();
        let mut p = Particle::new(&mut rng, 200.0, 150.0);
        for _ in 0..10_000 {
            p.update(200.0, 150.0);
            assert!(p.x >= -p.vx.abs() && p.x <= 200.0 + p.vx.abs());
            assert!(p.y >= -p.vy.abs() && p.y <= 150.0 + p.vy.abs());
        }
    }
}
