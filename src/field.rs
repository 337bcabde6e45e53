// The fixed-size collection of particles owned by the simulator

use crate::particle::Particle;
use rand::Rng;

/// Ordered set of particles, populated once and then only mutated in
/// place. Nothing outside the simulator holds a reference to it.
pub struct Field {
    particles: Vec<Particle>,
}

impl Field {
    /// Default population of the hero background.
    pub const DEFAULT_COUNT: u32 = 60;

    pub fn new() -> Field {
        Field {
            particles: Vec::new(),
        }
    }

    /// Allocates `count` randomized particles. Called once at start;
    /// the population never grows or shrinks afterwards.
    pub fn populate<R: Rng>(&mut self, rng: &mut R, count: u32, width: f64, height: f64) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(Particle::new(rng, width, height));
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl Default for Field {
    fn default() -> Field {
        Field::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn populate_allocates_exactly_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = Field::new();
        assert!(field.is_empty());

        field.populate(&mut rng, Field::DEFAULT_COUNT, 800.0, 600.0);
        assert_eq!(field.len(), 60);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
        }
    }

    #[test]
    fn in_place_reset_keeps_population_fixed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = Field::new();
        field.populate(&mut rng, 10, 100.0, 100.0);

        for p in field.particles_mut() {
            p.reset(&mut rng, 100.0, 100.0);
        }
        assert_eq!(field.len(), 10);
    }
}
