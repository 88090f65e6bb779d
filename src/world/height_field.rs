//! Deterministic terrain elevation from 2D coherent noise.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::constants::*;

pub struct HeightField {
    noise: FastNoiseLite,
    seed: u32,
}

impl HeightField {
    pub fn new(seed: u32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(HEIGHT_NOISE_FREQUENCY));
        HeightField { noise, seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Surface elevation of the column at world (x, z): the y of its top block.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let n = self.noise.get_noise_2d(x as f32, z as f32);
        (HEIGHT_BASE + n * HEIGHT_AMPLITUDE).floor() as i32
    }

    pub fn height_at_f32(&self, x: f32, z: f32) -> i32 {
        self.height_at(x.floor() as i32, z.floor() as i32)
    }
}

impl Clone for HeightField {
    fn clone(&self) -> Self {
        HeightField::new(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_terrain() {
        let a = HeightField::new(42);
        let b = HeightField::new(42);
        for x in -50..50 {
            for z in (-50..50).step_by(7) {
                assert_eq!(a.height_at(x, z), b.height_at(x, z));
                assert_eq!(a.height_at(x, z), a.height_at(x, z));
            }
        }
    }

    #[test]
    fn heights_stay_near_base_band() {
        let field = HeightField::new(DEFAULT_SEED);
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for x in (-400..400).step_by(3) {
            for z in (-400..400).step_by(3) {
                let h = field.height_at(x, z);
                min = min.min(h);
                max = max.max(h);
            }
        }
        assert!(min >= 1 && max <= 19, "range {}..={}", min, max);
        assert!(max > min, "terrain should not be flat");
    }

    #[test]
    fn float_lookup_floors_coordinates() {
        let field = HeightField::new(7);
        assert_eq!(field.height_at_f32(-0.5, 3.9), field.height_at(-1, 3));
    }
}
