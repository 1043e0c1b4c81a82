//! The controllable character: a cube that glides over the terrain with
//! momentum and tumbles in its direction of travel.

use bevy::prelude::*;

use crate::components::Player;
use crate::resources::WorldState;
use crate::systems::hex_color;
use crate::systems::terrain::{ground_height, TERRAIN_Y, WORLD_BOUND};

const MOVE_SPEED: f32 = 0.15;
const FRICTION: f32 = 0.9;
/// The player's cube sits this far above the ground surface.
const RIDE_HEIGHT: f32 = 1.0;

pub fn spawn_player(
    mut commands: Commands,
    world: Res<WorldState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = hex_color(&world.theme().particles.color);
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 0.3,
        ..default()
    });

    let fractal = world.theme().terrain.fractal();
    let y = ground_height(&world.field, &fractal, world.seed, 0.0, 0.0) + TERRAIN_Y + RIDE_HEIGHT;
    commands.spawn((
        Player::default(),
        Mesh3d(meshes.add(Cuboid::new(2.0, 2.0, 2.0))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, y, 0.0),
    ));
}

/// WASD / ZQSD / arrow keys, with momentum and friction. The cube is
/// clamped to the playable area and snapped to the terrain surface.
pub fn move_player(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    world: Res<WorldState>,
    mut players: Query<(&mut Player, &mut Transform)>,
) {
    let step = time.delta_secs() * 60.0;
    let mut direction = Vec2::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::KeyZ, KeyCode::ArrowUp]) {
        direction.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::KeyQ, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }
    let direction = direction.normalize_or_zero();

    let fractal = world.theme().terrain.fractal();
    for (mut player, mut transform) in players.iter_mut() {
        player.velocity += direction * MOVE_SPEED * step;
        player.velocity *= FRICTION.powf(step);

        let x = (transform.translation.x + player.velocity.x * step)
            .clamp(-WORLD_BOUND, WORLD_BOUND);
        let z = (transform.translation.z + player.velocity.y * step)
            .clamp(-WORLD_BOUND, WORLD_BOUND);
        let y = ground_height(&world.field, &fractal, world.seed, x, z) + TERRAIN_Y + RIDE_HEIGHT;
        transform.translation = Vec3::new(x, y, z);

        // Tumble around the axis perpendicular to the motion.
        transform.rotate_x(player.velocity.y * 0.05 * step);
        transform.rotate_z(-player.velocity.x * 0.05 * step);
    }
}

/// Re-tints the player cube when the theme changes.
pub fn recolor_player(
    world: Res<WorldState>,
    players: Query<&MeshMaterial3d<StandardMaterial>, With<Player>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = hex_color(&world.theme().particles.color);
    for handle in players.iter() {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = color;
            material.emissive = color.to_linear() * 0.3;
        }
    }
}
