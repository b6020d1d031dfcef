use glam::Vec3;
use rand::prelude::*;

/// Decorative point cloud, generated once and never mutated.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
}

impl ParticleField {
    /// `count` points uniformly spread in a cube of side `spread` centered on
    /// the origin. The same seed always yields the same field.
    pub fn generate(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                )
            })
            .collect();
        Self { positions }
    }

    /// Like [`ParticleField::generate`] but seeded from OS entropy.
    pub fn random(count: usize, spread: f32) -> Self {
        Self::generate(count, spread, rand::thread_rng().gen())
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
