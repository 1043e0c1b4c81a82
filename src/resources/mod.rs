use bevy::prelude::*;

use crate::noise::NoiseField;
use crate::themes::{Theme, ThemeId, ThemeLibrary};

/// Request to generate a new world from a keyword. Written by the UI,
/// consumed by the world plugin.
#[derive(Event, Debug, Clone)]
pub struct GenerateWorld {
    pub keyword: String,
}

/// The single source of truth for the generated world.
///
/// Owns the noise field explicitly (no module-global noise instance): the
/// terrain mesh, object placement and player ground collision all sample
/// through this resource, so tests can build isolated instances with their
/// own seeds.
#[derive(Resource)]
pub struct WorldState {
    pub library: ThemeLibrary,
    pub theme: ThemeId,
    /// Regeneration counter. Bumped on every generate request so the same
    /// theme still produces a different (translated) world.
    pub seed: f64,
    pub field: NoiseField,
}

impl WorldState {
    pub fn new(library: ThemeLibrary, initial_keyword: &str, noise_seed: u64) -> Self {
        let theme = ThemeId::from_keyword(initial_keyword).unwrap_or(ThemeId::Forest);
        Self {
            library,
            theme,
            seed: 0.0,
            field: NoiseField::new(noise_seed),
        }
    }

    /// The active theme's full definition.
    pub fn theme(&self) -> &Theme {
        self.library.get(self.theme)
    }

    /// Applies a keyword: resolves the theme (Forest fallback) and bumps the
    /// regeneration seed.
    pub fn apply_keyword(&mut self, keyword: &str) {
        self.theme = ThemeId::from_keyword(keyword).unwrap_or(ThemeId::Forest);
        self.seed += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keyword_switches_theme_and_bumps_seed() {
        let mut state = WorldState::new(ThemeLibrary::builtin(), "forest", 1);
        assert_eq!(state.theme, ThemeId::Forest);
        assert_eq!(state.seed, 0.0);

        state.apply_keyword("ocean");
        assert_eq!(state.theme, ThemeId::Ocean);
        assert_eq!(state.seed, 1.0);

        // Unknown keywords fall back to Forest but still regenerate.
        state.apply_keyword("???");
        assert_eq!(state.theme, ThemeId::Forest);
        assert_eq!(state.seed, 2.0);
    }
}
