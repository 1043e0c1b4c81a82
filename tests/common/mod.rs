#![allow(dead_code)]

use dreamscape::{FractalParams, NoiseField, Perlin2, ThemeId, ThemeLibrary};

/// A field with a fixed seed, shared across tests that compare runs.
pub fn seeded_field() -> NoiseField {
    NoiseField::new(0xD5EA)
}

/// A field whose permutation table is the identity, so corner hashes are
/// analytically predictable.
pub fn identity_field() -> NoiseField {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    NoiseField::from_primitive(Perlin2::from_permutation(table))
}

/// The fractal parameters a built-in theme feeds the height field.
pub fn theme_fractal(id: ThemeId) -> FractalParams {
    ThemeLibrary::builtin().get(id).terrain.fractal()
}
