pub mod objects;
pub mod particles;
pub mod player;
pub mod scene;
pub mod terrain;

use bevy::prelude::*;

/// Parses a `#rrggbb` theme color, falling back to white on bad input so a
/// hand-edited theme pack never aborts rendering.
pub(crate) fn hex_color(hex: &str) -> Color {
    Srgba::hex(hex).map(Color::from).unwrap_or(Color::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_and_falls_back() {
        let c = hex_color("#ff0000").to_srgba();
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);

        assert_eq!(hex_color("not a color"), Color::WHITE);
    }
}
