//! Camera, sky, fog and lights.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::components::{AccentLight, OrbitCamera, Player, ThemedLight};
use crate::resources::WorldState;
use crate::systems::hex_color;
use crate::themes::ThemeId;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 15.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog::default(),
        OrbitCamera::default(),
    ));
}

/// Applies the active theme's sky, fog and lights. Runs on every world
/// change, including the initial insertion.
pub fn apply_environment(
    mut commands: Commands,
    world: Res<WorldState>,
    mut clear_color: ResMut<ClearColor>,
    mut fog: Query<&mut DistanceFog, With<Camera3d>>,
    lights: Query<Entity, Or<(With<ThemedLight>, With<AccentLight>)>>,
) {
    let theme = world.theme();

    clear_color.0 = hex_color(&theme.sky.color);
    for mut fog in fog.iter_mut() {
        fog.color = hex_color(&theme.sky.fog_color);
        fog.falloff = FogFalloff::Exponential {
            density: theme.sky.fog_density,
        };
    }

    commands.insert_resource(AmbientLight {
        color: hex_color(&theme.lighting.ambient),
        brightness: theme.lighting.ambient_intensity * 100.0,
    });

    for entity in lights.iter() {
        commands.entity(entity).despawn();
    }

    let illuminance = theme.lighting.directional_intensity * 10_000.0;
    let [x, y, z] = theme.lighting.directional_position;
    commands.spawn((
        ThemedLight {
            base_intensity: illuminance,
        },
        DirectionalLight {
            color: hex_color(&theme.lighting.directional),
            illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // The cyberpunk skyline gets two colored accent lights.
    if world.theme == ThemeId::Cyberpunk {
        for (hex, position) in [("#ff00ff", Vec3::new(-15.0, 10.0, -15.0)),
            ("#00ffff", Vec3::new(15.0, 10.0, 15.0))]
        {
            commands.spawn((
                AccentLight,
                PointLight {
                    color: hex_color(hex),
                    intensity: 500_000.0,
                    range: 60.0,
                    ..default()
                },
                Transform::from_translation(position),
            ));
        }
    }
}

/// Slowly circles the player.
pub fn orbit_camera(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<OrbitCamera>)>,
    mut cameras: Query<(&OrbitCamera, &mut Transform)>,
) {
    let target = players
        .iter()
        .next()
        .map(|t| t.translation)
        .unwrap_or(Vec3::ZERO);
    let angle = time.elapsed_secs() * 0.05;

    for (orbit, mut transform) in cameras.iter_mut() {
        let offset = Vec3::new(
            angle.sin() * orbit.distance,
            orbit.height,
            angle.cos() * orbit.distance,
        );
        transform.translation = target + offset;
        transform.look_at(target, Vec3::Y);
    }
}

/// Flickers the volcano theme's sun.
pub fn pulse_themed_light(
    time: Res<Time>,
    world: Res<WorldState>,
    mut lights: Query<(&ThemedLight, &mut DirectionalLight)>,
) {
    if world.theme != ThemeId::Volcano {
        return;
    }
    let t = time.elapsed_secs();
    for (themed, mut light) in lights.iter_mut() {
        light.illuminance = themed.base_intensity * (0.8 + 0.2 * (t * 2.0).sin());
    }
}
