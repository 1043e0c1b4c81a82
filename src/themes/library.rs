//! Built-in theme table and optional YAML theme packs.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use super::{
    LightingTheme, ParticleKind, ParticleTheme, SkyTheme, TerrainTheme, Theme, ThemeId,
};

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid theme '{name}': {reason}")]
    ValidationError { name: String, reason: String },
}

/// A set of themes, keyed by id. A YAML pack can override or extend the
/// built-in set.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    themes: HashMap<ThemeId, Theme>,
}

impl ThemeLibrary {
    /// The six built-in themes.
    pub fn builtin() -> Self {
        let themes = builtin_themes()
            .into_iter()
            .map(|theme| (theme.id, theme))
            .collect();
        Self { themes }
    }

    /// Loads a theme pack from YAML (a sequence of themes) and lays it over
    /// the built-in set.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        let mut library = Self::builtin();
        let overrides: Vec<Theme> = serde_yaml::from_str(yaml)?;
        for theme in overrides {
            validate(&theme)?;
            library.themes.insert(theme.id, theme);
        }
        Ok(library)
    }

    pub fn get(&self, id: ThemeId) -> &Theme {
        // Every ThemeId is present: builtin() seeds all six and overrides
        // only replace entries.
        &self.themes[&id]
    }

    /// Resolves a keyword to its theme, falling back to Forest for unknown
    /// input.
    pub fn resolve(&self, keyword: &str) -> &Theme {
        let id = ThemeId::from_keyword(keyword).unwrap_or(ThemeId::Forest);
        self.get(id)
    }
}

impl Default for ThemeLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(theme: &Theme) -> Result<(), ThemeError> {
    let fail = |reason: &str| {
        Err(ThemeError::ValidationError {
            name: theme.name.clone(),
            reason: reason.to_string(),
        })
    };
    if theme.terrain.scale <= 0.0 {
        return fail("terrain scale must be positive");
    }
    if theme.terrain.amplitude < 0.0 {
        return fail("terrain amplitude must be non-negative");
    }
    if theme.terrain.octaves == 0 {
        return fail("terrain octaves must be at least 1");
    }
    if theme.particles.count == 0 {
        return fail("particle count must be at least 1");
    }
    Ok(())
}

fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme {
            id: ThemeId::Forest,
            name: "Forêt".to_string(),
            terrain: TerrainTheme {
                color: "#2d5016".to_string(),
                secondary_color: "#4a7c2f".to_string(),
                scale: 0.08,
                amplitude: 3.0,
                octaves: 5,
            },
            sky: SkyTheme {
                color: "#87CEEB".to_string(),
                fog_color: "#b8d4e8".to_string(),
                fog_density: 0.02,
            },
            lighting: LightingTheme {
                ambient: "#88aa88".to_string(),
                ambient_intensity: 0.6,
                directional: "#ffffff".to_string(),
                directional_intensity: 0.8,
                directional_position: [10.0, 20.0, 10.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Leaves,
                color: "#6b8e23".to_string(),
                count: 800,
                size: 0.15,
                speed: 0.3,
            },
        },
        Theme {
            id: ThemeId::Desert,
            name: "Désert".to_string(),
            terrain: TerrainTheme {
                color: "#daa520".to_string(),
                secondary_color: "#f4a460".to_string(),
                scale: 0.06,
                amplitude: 2.0,
                octaves: 3,
            },
            sky: SkyTheme {
                color: "#FFE4B5".to_string(),
                fog_color: "#ffd89b".to_string(),
                fog_density: 0.015,
            },
            lighting: LightingTheme {
                ambient: "#ffcc77".to_string(),
                ambient_intensity: 0.8,
                directional: "#ffe4b5".to_string(),
                directional_intensity: 1.2,
                directional_position: [15.0, 25.0, 5.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Dust,
                color: "#daa520".to_string(),
                count: 600,
                size: 0.1,
                speed: 0.5,
            },
        },
        Theme {
            id: ThemeId::Snow,
            name: "Neige".to_string(),
            terrain: TerrainTheme {
                color: "#e8f4f8".to_string(),
                secondary_color: "#ffffff".to_string(),
                scale: 0.1,
                amplitude: 2.5,
                octaves: 4,
            },
            sky: SkyTheme {
                color: "#b0c4de".to_string(),
                fog_color: "#d0e8f0".to_string(),
                fog_density: 0.025,
            },
            lighting: LightingTheme {
                ambient: "#b0d8f0".to_string(),
                ambient_intensity: 0.9,
                directional: "#ffffff".to_string(),
                directional_intensity: 0.7,
                directional_position: [5.0, 15.0, 10.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Snowflakes,
                color: "#ffffff".to_string(),
                count: 1200,
                size: 0.12,
                speed: 0.2,
            },
        },
        Theme {
            id: ThemeId::Volcano,
            name: "Volcan".to_string(),
            terrain: TerrainTheme {
                color: "#2b1a1a".to_string(),
                secondary_color: "#4a0e0e".to_string(),
                scale: 0.12,
                amplitude: 5.0,
                octaves: 6,
            },
            sky: SkyTheme {
                color: "#1a0a0a".to_string(),
                fog_color: "#3d1a1a".to_string(),
                fog_density: 0.03,
            },
            lighting: LightingTheme {
                ambient: "#ff4400".to_string(),
                ambient_intensity: 0.5,
                directional: "#ff6600".to_string(),
                directional_intensity: 1.0,
                directional_position: [0.0, 10.0, 0.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Sparks,
                color: "#ff4400".to_string(),
                count: 1000,
                size: 0.08,
                speed: 0.8,
            },
        },
        Theme {
            id: ThemeId::Cyberpunk,
            name: "Cyberpunk".to_string(),
            terrain: TerrainTheme {
                color: "#0a0a1a".to_string(),
                secondary_color: "#1a0a2e".to_string(),
                scale: 0.15,
                amplitude: 1.5,
                octaves: 3,
            },
            sky: SkyTheme {
                color: "#0a0a1a".to_string(),
                fog_color: "#1a0a3d".to_string(),
                fog_density: 0.04,
            },
            lighting: LightingTheme {
                ambient: "#4d0099".to_string(),
                ambient_intensity: 0.4,
                directional: "#00ffff".to_string(),
                directional_intensity: 0.9,
                directional_position: [10.0, 15.0, 10.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Neon,
                color: "#00ffff".to_string(),
                count: 900,
                size: 0.1,
                speed: 0.4,
            },
        },
        Theme {
            id: ThemeId::Ocean,
            name: "Océan".to_string(),
            terrain: TerrainTheme {
                color: "#006994".to_string(),
                secondary_color: "#0080b3".to_string(),
                scale: 0.05,
                amplitude: 1.2,
                octaves: 4,
            },
            sky: SkyTheme {
                color: "#87CEEB".to_string(),
                fog_color: "#a0d8ef".to_string(),
                fog_density: 0.018,
            },
            lighting: LightingTheme {
                ambient: "#6eb3d6".to_string(),
                ambient_intensity: 0.7,
                directional: "#ffffff".to_string(),
                directional_intensity: 0.9,
                directional_position: [10.0, 20.0, 15.0],
            },
            particles: ParticleTheme {
                kind: ParticleKind::Bubbles,
                color: "#add8e6".to_string(),
                count: 700,
                size: 0.13,
                speed: 0.25,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_has_all_six_themes() {
        let library = ThemeLibrary::builtin();
        for id in ThemeId::ALL {
            let theme = library.get(id);
            assert_eq!(theme.id, id);
            assert!(theme.terrain.octaves >= 1);
            assert!(theme.terrain.scale > 0.0);
        }
    }

    #[test]
    fn resolve_falls_back_to_forest() {
        let library = ThemeLibrary::builtin();
        assert_eq!(library.resolve("xyzzy").id, ThemeId::Forest);
        assert_eq!(library.resolve("volcano").id, ThemeId::Volcano);
    }

    #[test]
    fn forest_builtin_values() {
        let library = ThemeLibrary::builtin();
        let forest = library.get(ThemeId::Forest);
        assert_eq!(forest.terrain.scale, 0.08);
        assert_eq!(forest.terrain.amplitude, 3.0);
        assert_eq!(forest.terrain.octaves, 5);
        assert_eq!(forest.particles.count, 800);
        assert_eq!(forest.particles.kind, ParticleKind::Leaves);
    }

    #[test]
    fn yaml_pack_overrides_builtin() {
        let library = ThemeLibrary::builtin();
        let mut custom = library.get(ThemeId::Desert).clone();
        custom.terrain.amplitude = 9.0;
        let yaml = serde_yaml::to_string(&vec![custom]).unwrap();

        let loaded = ThemeLibrary::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded.get(ThemeId::Desert).terrain.amplitude, 9.0);
        // Untouched themes remain builtin.
        assert_eq!(loaded.get(ThemeId::Forest), library.get(ThemeId::Forest));
    }

    #[test]
    fn invalid_theme_is_rejected() {
        let library = ThemeLibrary::builtin();
        let mut broken = library.get(ThemeId::Ocean).clone();
        broken.terrain.octaves = 0;
        let yaml = serde_yaml::to_string(&vec![broken]).unwrap();

        let err = ThemeLibrary::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ThemeError::ValidationError { .. }));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = ThemeLibrary::from_yaml_str(": not yaml [").unwrap_err();
        assert!(matches!(err, ThemeError::YamlError(_)));
    }
}
