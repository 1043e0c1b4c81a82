//! Theme data model: one theme fully describes a generated world's look
//! (terrain shape and colors, sky, lights, particles, decorative objects).

mod library;

pub use library::{ThemeError, ThemeLibrary};

use serde::{Deserialize, Serialize};

use crate::noise::FractalParams;

/// The six built-in worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Forest,
    Desert,
    Snow,
    Volcano,
    Cyberpunk,
    Ocean,
}

impl ThemeId {
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Forest,
        ThemeId::Desert,
        ThemeId::Snow,
        ThemeId::Volcano,
        ThemeId::Cyberpunk,
        ThemeId::Ocean,
    ];

    /// Maps a user keyword to a theme. French and English aliases,
    /// case-insensitive, surrounding whitespace ignored. Returns `None` for
    /// unknown keywords.
    pub fn from_keyword(keyword: &str) -> Option<ThemeId> {
        let normalized = keyword.trim().to_lowercase();
        let id = match normalized.as_str() {
            "foret" | "forêt" | "forest" | "arbre" | "nature" | "vert" => ThemeId::Forest,
            "desert" | "désert" | "sable" | "dune" | "sahara" => ThemeId::Desert,
            "neige" | "snow" | "hiver" | "winter" | "blanc" | "glace" | "montagne" => ThemeId::Snow,
            "volcan" | "volcano" | "lave" | "feu" | "magma" | "enfer" => ThemeId::Volcano,
            "cyberpunk" | "cyber" | "neon" | "futur" | "matrix" => ThemeId::Cyberpunk,
            "ocean" | "océan" | "mer" | "eau" | "sea" | "bleu" => ThemeId::Ocean,
            _ => return None,
        };
        Some(id)
    }

    /// How many decorative objects a generated world of this theme places.
    pub fn object_count(self) -> usize {
        match self {
            ThemeId::Forest => 30,
            ThemeId::Desert => 20,
            ThemeId::Snow => 15,
            ThemeId::Volcano => 25,
            ThemeId::Cyberpunk => 20,
            ThemeId::Ocean => 25,
        }
    }
}

/// Particle behavior families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Leaves,
    Dust,
    Snowflakes,
    Sparks,
    Neon,
    Bubbles,
}

/// Terrain shaping and coloring. `scale`/`amplitude`/`octaves` parameterize
/// the fractal height field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainTheme {
    pub color: String,
    pub secondary_color: String,
    pub scale: f64,
    pub amplitude: f64,
    pub octaves: u32,
}

impl TerrainTheme {
    /// The fractal parameters this theme feeds into the height field.
    pub fn fractal(&self) -> FractalParams {
        FractalParams::new(self.scale, self.amplitude, self.octaves)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyTheme {
    pub color: String,
    pub fog_color: String,
    pub fog_density: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingTheme {
    pub ambient: String,
    pub ambient_intensity: f32,
    pub directional: String,
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleTheme {
    pub kind: ParticleKind,
    pub color: String,
    pub count: usize,
    pub size: f32,
    pub speed: f32,
}

/// A complete world theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub terrain: TerrainTheme,
    pub sky: SkyTheme,
    pub lighting: LightingTheme,
    pub particles: ParticleTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_themes() {
        assert_eq!(ThemeId::from_keyword("forest"), Some(ThemeId::Forest));
        assert_eq!(ThemeId::from_keyword("forêt"), Some(ThemeId::Forest));
        assert_eq!(ThemeId::from_keyword("  Sahara "), Some(ThemeId::Desert));
        assert_eq!(ThemeId::from_keyword("MATRIX"), Some(ThemeId::Cyberpunk));
        assert_eq!(ThemeId::from_keyword("mer"), Some(ThemeId::Ocean));
        assert_eq!(ThemeId::from_keyword("lave"), Some(ThemeId::Volcano));
        assert_eq!(ThemeId::from_keyword("hiver"), Some(ThemeId::Snow));
    }

    #[test]
    fn unknown_keyword_is_none() {
        assert_eq!(ThemeId::from_keyword("spaghetti"), None);
        assert_eq!(ThemeId::from_keyword(""), None);
    }

    #[test]
    fn object_counts_match_table() {
        assert_eq!(ThemeId::Forest.object_count(), 30);
        assert_eq!(ThemeId::Snow.object_count(), 15);
    }
}
