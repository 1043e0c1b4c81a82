//! Terrain mesh generation and animation.

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use crate::components::{GroundPlane, TerrainMesh};
use crate::noise::{FractalParams, NoiseField};
use crate::resources::WorldState;
use crate::systems::hex_color;
use crate::themes::ThemeId;

/// Side length of the displaced terrain plane, world units.
pub const TERRAIN_SIZE: f32 = 300.0;
/// Quads per side of the terrain plane.
pub const TERRAIN_SEGMENTS: usize = 150;
/// Vertical offset of the terrain plane.
pub const TERRAIN_Y: f32 = -2.0;
/// Players and objects stay within this distance of the origin on x/z.
pub const WORLD_BOUND: f32 = 45.0;

/// Terrain height at world position `(x, z)`.
///
/// The regeneration seed enters as a large coordinate offset before the
/// fixed `0.1` pre-scale, so bumping the seed lands the query in a distant,
/// visually unrelated region of the field. This intentionally differs from
/// [`crate::noise::GridParams::seed`], which offsets grid coordinates
/// directly.
pub fn ground_height(
    field: &NoiseField,
    fractal: &FractalParams,
    seed: f64,
    x: f32,
    z: f32,
) -> f32 {
    let nx = (x as f64 + seed * 1000.0) * 0.1;
    let nz = (z as f64 + seed * 1000.0) * 0.1;
    field.height(nx, nz, fractal) as f32
}

/// Builds the displaced terrain plane as an indexed triangle mesh with
/// smooth normals accumulated from face normals.
pub fn build_terrain_mesh(field: &NoiseField, fractal: &FractalParams, seed: f64) -> Mesh {
    let verts_per_side = TERRAIN_SEGMENTS + 1;
    let step = TERRAIN_SIZE / TERRAIN_SEGMENTS as f32;
    let half = TERRAIN_SIZE / 2.0;

    let mut positions = Vec::with_capacity(verts_per_side * verts_per_side);
    let mut uvs = Vec::with_capacity(verts_per_side * verts_per_side);
    for row in 0..verts_per_side {
        for col in 0..verts_per_side {
            let x = col as f32 * step - half;
            let z = row as f32 * step - half;
            let y = ground_height(field, fractal, seed, x, z);
            positions.push([x, y, z]);
            uvs.push([
                col as f32 / TERRAIN_SEGMENTS as f32,
                row as f32 / TERRAIN_SEGMENTS as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity(TERRAIN_SEGMENTS * TERRAIN_SEGMENTS * 6);
    for row in 0..TERRAIN_SEGMENTS {
        for col in 0..TERRAIN_SEGMENTS {
            let i = (row * verts_per_side + col) as u32;
            let right = i + 1;
            let below = i + verts_per_side as u32;
            let below_right = below + 1;
            // Counter-clockwise when viewed from +y.
            indices.extend_from_slice(&[i, below, right, right, below, below_right]);
        }
    }

    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let face = (pb - pa).cross(pc - pa);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    let normals: Vec<[f32; 3]> = normals
        .into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Despawns and rebuilds the terrain and backdrop plane whenever the world
/// state changes (including the initial insertion).
pub fn rebuild_terrain(
    mut commands: Commands,
    world: Res<WorldState>,
    existing: Query<Entity, Or<(With<TerrainMesh>, With<GroundPlane>)>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let theme = world.theme();
    let fractal = theme.terrain.fractal();
    let mesh = build_terrain_mesh(&world.field, &fractal, world.seed);

    let terrain_material = StandardMaterial {
        base_color: hex_color(&theme.terrain.color),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    };
    commands.spawn((
        TerrainMesh,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(terrain_material)),
        Transform::from_xyz(0.0, TERRAIN_Y, 0.0),
    ));

    let plane_material = StandardMaterial {
        base_color: hex_color(&theme.terrain.secondary_color),
        perceptual_roughness: 1.0,
        ..default()
    };
    commands.spawn((
        GroundPlane,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(200.0, 200.0))),
        MeshMaterial3d(materials.add(plane_material)),
        Transform::from_xyz(0.0, -5.0, 0.0),
    ));

    debug!(
        "terrain rebuilt: theme={}, seed={}",
        theme.name, world.seed
    );
}

/// Subtle idle motion: the terrain plane rocks imperceptibly, and the
/// volcano theme's surface glows with a slow emissive pulse.
pub fn animate_terrain(
    time: Res<Time>,
    world: Res<WorldState>,
    mut terrain: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<TerrainMesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let t = time.elapsed_secs();
    for (mut transform, material) in terrain.iter_mut() {
        transform.rotation = Quat::from_rotation_z((t * 0.2).sin() * 0.001);

        if world.theme == ThemeId::Volcano {
            if let Some(mat) = materials.get_mut(&material.0) {
                let glow = 0.5 + 0.5 * (t * 2.0).sin();
                mat.emissive = LinearRgba::rgb(0.3 * glow, 0.05 * glow, 0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{ThemeId, ThemeLibrary};

    #[test]
    fn ground_height_is_deterministic_per_seed() {
        let field = NoiseField::new(7);
        let fractal = FractalParams::new(0.08, 3.0, 5);
        let a = ground_height(&field, &fractal, 1.0, 12.5, -3.0);
        let b = ground_height(&field, &fractal, 1.0, 12.5, -3.0);
        assert_eq!(a.to_bits(), b.to_bits());

        // A different seed shifts into a distant region.
        let c = ground_height(&field, &fractal, 2.0, 12.5, -3.0);
        assert_ne!(a.to_bits(), c.to_bits());
    }

    #[test]
    fn ground_height_respects_amplitude_bound() {
        let field = NoiseField::new(7);
        let fractal = FractalParams::new(0.08, 3.0, 5);
        for i in 0..100 {
            let x = i as f32 * 0.9 - 45.0;
            let z = i as f32 * -0.7 + 20.0;
            let h = ground_height(&field, &fractal, 0.0, x, z);
            assert!(h.abs() <= 2.0 * fractal.amplitude as f32);
        }
    }

    #[test]
    fn terrain_mesh_has_expected_counts() {
        let field = NoiseField::new(1);
        let library = ThemeLibrary::builtin();
        let fractal = library.get(ThemeId::Forest).terrain.fractal();
        let mesh = build_terrain_mesh(&field, &fractal, 0.0);

        let verts = (TERRAIN_SEGMENTS + 1) * (TERRAIN_SEGMENTS + 1);
        assert_eq!(mesh.count_vertices(), verts);
        match mesh.indices() {
            Some(Indices::U32(indices)) => {
                assert_eq!(indices.len(), TERRAIN_SEGMENTS * TERRAIN_SEGMENTS * 6);
                assert!(indices.iter().all(|&i| (i as usize) < verts));
            }
            other => panic!("expected u32 indices, got {other:?}"),
        }
    }

    #[test]
    fn terrain_mesh_heights_match_ground_height() {
        let field = NoiseField::new(3);
        let fractal = FractalParams::new(0.1, 2.0, 3);
        let mesh = build_terrain_mesh(&field, &fractal, 5.0);

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .unwrap();
        for &[x, y, z] in positions.iter().step_by(997) {
            let expected = ground_height(&field, &fractal, 5.0, x, z);
            assert_eq!(y.to_bits(), expected.to_bits());
        }
    }
}
