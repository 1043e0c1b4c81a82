pub mod field;
pub mod perlin;

pub use field::{FractalParams, GridParams, HeightGrid, NoiseField};
pub use perlin::Perlin2;
