//! DreamScape: keyword-driven procedural world generation.
//!
//! The [`noise`] module is the deterministic core (gradient noise and
//! fractal height fields); [`themes`] maps keywords to world definitions;
//! the remaining modules render and animate the generated world with Bevy.

pub mod components;
pub mod noise;
pub mod persist;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod themes;

pub use noise::{FractalParams, GridParams, HeightGrid, NoiseField, Perlin2};
pub use plugins::{UiPlugin, WorldPlugin};
pub use resources::{GenerateWorld, WorldState};
pub use themes::{Theme, ThemeId, ThemeLibrary};
