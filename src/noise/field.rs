//! Fractal (fBm) height synthesis on top of the gradient-noise primitive.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::noise::Perlin2;

/// Parameters for one fractal height query.
///
/// `persistence` and `lacunarity` default to the classic `0.5` / `2.0`
/// octave progression: each octave doubles spatial frequency and halves its
/// contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Base spatial frequency. Smaller values give smoother terrain.
    pub scale: f64,
    /// Amplitude of the first octave. `0.0` yields a flat field.
    pub amplitude: f64,
    /// Number of octaves summed. `0` yields `0.0`.
    pub octaves: u32,
    /// Per-octave amplitude decay factor.
    pub persistence: f64,
    /// Per-octave frequency growth factor.
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            scale: 0.1,
            amplitude: 1.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    pub fn new(scale: f64, amplitude: f64, octaves: u32) -> Self {
        Self {
            scale,
            amplitude,
            octaves,
            ..Default::default()
        }
    }
}

/// Parameters for batch grid generation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GridParams {
    pub fractal: FractalParams,
    /// Offset added directly to both integer grid coordinates before
    /// sampling. This translates the sampling window; it does not reshape
    /// the terrain. Callers wanting visually distinct terrain per seed
    /// should instead offset coordinates themselves and call
    /// [`NoiseField::height`] (see `systems::terrain::ground_height`).
    pub seed: f64,
}

/// A rectangular block of height samples, row-major, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl HeightGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(col, row)`. Panics if out of bounds, like slice indexing.
    pub fn get(&self, col: usize, row: usize) -> f64 {
        assert!(col < self.width && row < self.height);
        self.data[row * self.width + col]
    }

    /// Iterates rows as slices of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.width.max(1))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// A deterministic scalar height field over the 2D plane.
///
/// Owns its noise primitive; construct one per world (or per test) instead
/// of sharing hidden global state. All sampling methods take `&self` and the
/// primitive is immutable, so a field can be queried concurrently.
#[derive(Debug, Clone, Default)]
pub struct NoiseField {
    perlin: Perlin2,
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        Self {
            perlin: Perlin2::new(seed),
        }
    }

    pub fn from_primitive(perlin: Perlin2) -> Self {
        Self { perlin }
    }

    /// Raw primitive sample in `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.perlin.sample(x, y)
    }

    /// Fractal height at `(x, y)`: `octaves` layers of noise at
    /// geometrically scaled frequency and amplitude.
    ///
    /// Pure and deterministic for a fixed field: identical arguments always
    /// return the identical value. Out-of-contract inputs do not panic:
    /// `octaves == 0` or `amplitude == 0.0` return `0.0`, a non-positive
    /// `scale` degenerates to a frequency that never varies with position,
    /// and NaN coordinates propagate NaN.
    pub fn height(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        let mut total = 0.0;
        let mut frequency = params.scale;
        let mut amplitude = params.amplitude;

        for _ in 0..params.octaves {
            total += self.perlin.sample(x * frequency, y * frequency) * amplitude;
            frequency *= params.lacunarity;
            amplitude *= params.persistence;
        }

        total
    }

    /// Samples a `height × width` grid at integer coordinates offset by
    /// `params.seed`: `grid[row][col] = height(col + seed, row + seed)`.
    ///
    /// Rows are filled in parallel; the result is identical to the serial
    /// loop because every sample is independent.
    pub fn generate_grid(&self, width: usize, height: usize, params: &GridParams) -> HeightGrid {
        let mut data = vec![0.0; width * height];
        data.par_chunks_mut(width.max(1))
            .enumerate()
            .for_each(|(row, out)| {
                for (col, value) in out.iter_mut().enumerate() {
                    *value = self.height(
                        col as f64 + params.seed,
                        row as f64 + params.seed,
                        &params.fractal,
                    );
                }
            });
        HeightGrid {
            width,
            height,
            data,
        }
    }
}
