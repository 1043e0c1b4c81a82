use bevy::prelude::*;

use crate::themes::ParticleKind;

/// The displaced terrain plane of the current world.
#[derive(Component)]
pub struct TerrainMesh;

/// The flat backdrop plane under the terrain.
#[derive(Component)]
pub struct GroundPlane;

/// Root entity of one decorative object (tree, cactus, snowman, ...).
#[derive(Component)]
pub struct SceneObject;

/// One animated particle. Velocity is in world units per second before the
/// theme's speed factor is applied.
#[derive(Component)]
pub struct Particle {
    pub kind: ParticleKind,
    pub velocity: Vec3,
    /// Per-particle offset so sway/orbit animations desynchronize.
    pub phase: f32,
}

/// The user-controlled character.
#[derive(Component, Default)]
pub struct Player {
    pub velocity: Vec2,
}

/// Slowly orbiting chase camera.
#[derive(Component)]
pub struct OrbitCamera {
    pub distance: f32,
    pub height: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: 30.0,
            height: 15.0,
        }
    }
}

/// The theme's directional light (pulsed on the Volcano theme).
#[derive(Component)]
pub struct ThemedLight {
    pub base_intensity: f32,
}

/// Extra accent point lights (Cyberpunk theme).
#[derive(Component)]
pub struct AccentLight;
