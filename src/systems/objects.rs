//! Decorative object placement. Each theme scatters its own props (trees,
//! cacti, snowmen, ...) in a ring around the origin, positioned by a cheap
//! deterministic hash so a given seed always yields the same layout.

use bevy::prelude::*;

use crate::components::SceneObject;
use crate::resources::WorldState;
use crate::systems::hex_color;
use crate::systems::terrain::{ground_height, TERRAIN_Y};
use crate::themes::ThemeId;

/// The decorative prop family each theme scatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Tree,
    Cactus,
    Snowman,
    VolcanicRock,
    CyberStructure,
    CoralRock,
}

impl ObjectKind {
    pub fn for_theme(id: ThemeId) -> Self {
        match id {
            ThemeId::Forest => ObjectKind::Tree,
            ThemeId::Desert => ObjectKind::Cactus,
            ThemeId::Snow => ObjectKind::Snowman,
            ThemeId::Volcano => ObjectKind::VolcanicRock,
            ThemeId::Cyberpunk => ObjectKind::CyberStructure,
            ThemeId::Ocean => ObjectKind::CoralRock,
        }
    }
}

/// Shader-style scatter hash: `fract(sin(dot) * 43758.5453)` in `[0, 1)`.
pub fn scatter_hash(index: f64, salt: f64, seed: f64) -> f32 {
    let v = (index * 12.9898 + salt * 78.233 + seed).sin() * 43758.5453;
    v.rem_euclid(1.0) as f32
}

/// Despawns all props and scatters a fresh set for the active theme.
pub fn rebuild_objects(
    mut commands: Commands,
    world: Res<WorldState>,
    existing: Query<Entity, With<SceneObject>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let theme = world.theme();
    let fractal = theme.terrain.fractal();
    let count = world.theme.object_count();

    for i in 0..count {
        let idx = i as f64;
        let angle = scatter_hash(idx, 0.0, world.seed) * std::f32::consts::TAU;
        let distance = 10.0 + scatter_hash(idx, 1.0, world.seed) * 30.0;
        let x = angle.cos() * distance;
        let z = angle.sin() * distance;
        let y = ground_height(&world.field, &fractal, world.seed, x, z) + TERRAIN_Y;
        let spin = scatter_hash(idx, 2.0, world.seed) * std::f32::consts::TAU;
        let size = 0.7 + scatter_hash(idx, 3.0, world.seed) * 0.6;

        let root = commands
            .spawn((
                SceneObject,
                Transform::from_xyz(x, y, z)
                    .with_rotation(Quat::from_rotation_y(spin))
                    .with_scale(Vec3::splat(size)),
                Visibility::default(),
            ))
            .id();

        match ObjectKind::for_theme(world.theme) {
            ObjectKind::Tree => spawn_tree(&mut commands, root, &mut meshes, &mut materials),
            ObjectKind::Cactus => spawn_cactus(&mut commands, root, &mut meshes, &mut materials),
            ObjectKind::Snowman => spawn_snowman(&mut commands, root, &mut meshes, &mut materials),
            ObjectKind::VolcanicRock => {
                spawn_boulder(&mut commands, root, &mut meshes, &mut materials)
            }
            ObjectKind::CyberStructure => spawn_tower(
                &mut commands,
                root,
                &mut meshes,
                &mut materials,
                &theme.particles.color,
            ),
            ObjectKind::CoralRock => spawn_coral(&mut commands, root, &mut meshes, &mut materials),
        }
    }

    debug!("placed {} objects for theme {}", count, theme.name);
}

fn spawn_tree(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let trunk = materials.add(StandardMaterial {
        base_color: hex_color("#4a2f1b"),
        perceptual_roughness: 1.0,
        ..default()
    });
    let foliage = materials.add(StandardMaterial {
        base_color: hex_color("#2d5016"),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.2, 2.0))),
            MeshMaterial3d(trunk),
            Transform::from_xyz(0.0, 1.0, 0.0),
        ));
        parent.spawn((
            Mesh3d(meshes.add(Cone {
                radius: 1.2,
                height: 2.5,
            })),
            MeshMaterial3d(foliage.clone()),
            Transform::from_xyz(0.0, 2.8, 0.0),
        ));
        parent.spawn((
            Mesh3d(meshes.add(Cone {
                radius: 0.9,
                height: 2.0,
            })),
            MeshMaterial3d(foliage),
            Transform::from_xyz(0.0, 3.8, 0.0),
        ));
    });
}

fn spawn_cactus(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let green = materials.add(StandardMaterial {
        base_color: hex_color("#3a6b35"),
        perceptual_roughness: 0.8,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.3, 2.5))),
            MeshMaterial3d(green.clone()),
            Transform::from_xyz(0.0, 1.25, 0.0),
        ));
        parent.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.18, 1.0))),
            MeshMaterial3d(green.clone()),
            Transform::from_xyz(0.45, 1.6, 0.0)
                .with_rotation(Quat::from_rotation_z(-0.9)),
        ));
        parent.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.18, 0.8))),
            MeshMaterial3d(green),
            Transform::from_xyz(-0.4, 1.2, 0.0).with_rotation(Quat::from_rotation_z(0.9)),
        ));
    });
}

fn spawn_snowman(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let snow = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.6,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        for (radius, y) in [(0.8, 0.8), (0.55, 1.9), (0.35, 2.7)] {
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(radius))),
                MeshMaterial3d(snow.clone()),
                Transform::from_xyz(0.0, y, 0.0),
            ));
        }
    });
}

fn spawn_boulder(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let rock = materials.add(StandardMaterial {
        base_color: hex_color("#3d2b2b"),
        emissive: LinearRgba::rgb(0.25, 0.04, 0.0),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Sphere::new(0.9))),
            MeshMaterial3d(rock.clone()),
            Transform::from_xyz(0.0, 0.5, 0.0).with_scale(Vec3::new(1.0, 0.7, 1.1)),
        ));
        parent.spawn((
            Mesh3d(meshes.add(Sphere::new(0.5))),
            MeshMaterial3d(rock),
            Transform::from_xyz(0.7, 0.3, -0.3).with_scale(Vec3::new(1.1, 0.6, 0.9)),
        ));
    });
}

fn spawn_tower(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    neon_hex: &str,
) {
    let neon = hex_color(neon_hex).to_linear();
    let body = materials.add(StandardMaterial {
        base_color: hex_color("#0a0a1a"),
        perceptual_roughness: 0.3,
        metallic: 0.8,
        ..default()
    });
    let glow = materials.add(StandardMaterial {
        base_color: Color::from(neon),
        emissive: neon * 3.0,
        unlit: true,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(1.2, 5.0, 1.2))),
            MeshMaterial3d(body),
            Transform::from_xyz(0.0, 2.5, 0.0),
        ));
        for y in [1.0, 2.5, 4.0] {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.25, 0.1, 1.25))),
                MeshMaterial3d(glow.clone()),
                Transform::from_xyz(0.0, y, 0.0),
            ));
        }
    });
}

fn spawn_coral(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let coral = materials.add(StandardMaterial {
        base_color: hex_color("#ff7f50"),
        perceptual_roughness: 0.7,
        ..default()
    });
    let stone = materials.add(StandardMaterial {
        base_color: hex_color("#5f9ea0"),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Sphere::new(0.7))),
            MeshMaterial3d(stone),
            Transform::from_xyz(0.0, 0.4, 0.0).with_scale(Vec3::new(1.0, 0.6, 1.0)),
        ));
        for (x, z, h) in [(0.2, 0.1, 1.4), (-0.3, -0.2, 1.0), (0.0, 0.3, 1.8)] {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.08, h))),
                MeshMaterial3d(coral.clone()),
                Transform::from_xyz(x, 0.5 + h / 2.0, z),
            ));
        }
    });
}
