//! Ambient particle field. Each theme has one particle kind with its own
//! initial velocities and per-frame behavior (sway, gravity, orbit, ...).

use bevy::prelude::*;

use crate::components::Particle;
use crate::resources::WorldState;
use crate::systems::hex_color;
use crate::systems::objects::scatter_hash;
use crate::themes::ParticleKind;

/// Half-extent of the particle volume on x and z.
const FIELD_HALF: f32 = 50.0;
/// Particles live between these heights; leaving the band respawns or wraps.
const FIELD_TOP: f32 = 50.0;
const FIELD_BOTTOM: f32 = -5.0;

/// Initial velocity for one particle, before the theme speed factor.
fn initial_velocity(kind: ParticleKind, u: f32, v: f32) -> Vec3 {
    match kind {
        ParticleKind::Leaves => Vec3::new(u - 0.5, -0.4 - v * 0.3, v - 0.5) * 0.5,
        ParticleKind::Dust => Vec3::new(u - 0.5, (v - 0.5) * 0.2, v - 0.5) * 1.5,
        ParticleKind::Snowflakes => Vec3::new((u - 0.5) * 0.3, -0.5 - v * 0.5, (v - 0.5) * 0.3),
        ParticleKind::Sparks => Vec3::new(u - 0.5, 1.5 + v, v - 0.5),
        ParticleKind::Neon => Vec3::ZERO,
        ParticleKind::Bubbles => Vec3::new((u - 0.5) * 0.2, 0.4 + v * 0.4, (v - 0.5) * 0.2),
    }
}

/// Despawns the particle field and spawns the active theme's set. All
/// particles share one mesh and one material.
pub fn rebuild_particles(
    mut commands: Commands,
    world: Res<WorldState>,
    existing: Query<Entity, With<Particle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let theme = world.theme();
    let particles = &theme.particles;
    let color = hex_color(&particles.color);
    let emissive = match particles.kind {
        ParticleKind::Sparks | ParticleKind::Neon => color.to_linear() * 2.0,
        _ => LinearRgba::BLACK,
    };
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive,
        unlit: matches!(particles.kind, ParticleKind::Neon),
        ..default()
    });
    let mesh = meshes.add(Sphere::new(particles.size));

    for i in 0..particles.count {
        let idx = i as f64;
        let u = scatter_hash(idx, 10.0, world.seed);
        let v = scatter_hash(idx, 11.0, world.seed);
        let w = scatter_hash(idx, 12.0, world.seed);

        let position = Vec3::new(
            (u - 0.5) * 2.0 * FIELD_HALF,
            w * FIELD_TOP,
            (v - 0.5) * 2.0 * FIELD_HALF,
        );
        commands.spawn((
            Particle {
                kind: particles.kind,
                velocity: initial_velocity(particles.kind, u, v) * particles.speed,
                phase: w * std::f32::consts::TAU,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }
}

/// Moves every particle by its kind's rules. Time step is normalized so the
/// motion constants read as per-frame values at 60 fps.
pub fn animate_particles(
    time: Res<Time>,
    world: Res<WorldState>,
    mut particles: Query<(&mut Particle, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs() * 60.0;
    let speed = world.theme().particles.speed;

    for (mut particle, mut transform) in particles.iter_mut() {
        let phase = particle.phase;
        match particle.kind {
            ParticleKind::Snowflakes | ParticleKind::Leaves => {
                transform.translation += particle.velocity * 0.05 * dt;
                transform.translation.x += (t + phase).sin() * 0.02 * dt;
                if particle.kind == ParticleKind::Leaves {
                    transform.rotate_y(0.02 * dt);
                }
                if transform.translation.y < FIELD_BOTTOM {
                    transform.translation.y = FIELD_TOP;
                }
            }
            ParticleKind::Dust => {
                transform.translation += particle.velocity * 0.03 * dt;
                transform.translation.y += (t * 0.7 + phase).sin() * 0.01 * dt;
                if transform.translation.y > FIELD_TOP {
                    transform.translation.y = 0.0;
                }
            }
            ParticleKind::Sparks => {
                particle.velocity.y -= 0.01 * speed * dt;
                let velocity = particle.velocity;
                transform.translation += velocity * 0.05 * dt;
                if transform.translation.y < FIELD_BOTTOM {
                    transform.translation.y = 0.0;
                    particle.velocity.y = (1.5 + (phase).sin().abs()) * speed;
                }
            }
            ParticleKind::Neon => {
                let radius = 0.5 + phase * 0.1;
                transform.translation.x += (t * 0.8 + phase).cos() * radius * 0.01 * dt;
                transform.translation.z += (t * 0.8 + phase).sin() * radius * 0.01 * dt;
                let pulse = 1.0 + 0.3 * (t * 3.0 + phase).sin();
                transform.scale = Vec3::splat(pulse);
            }
            ParticleKind::Bubbles => {
                transform.translation += particle.velocity * 0.04 * dt;
                transform.translation.x += (t * 0.5 + phase).sin() * 0.01 * dt;
                if transform.translation.y > FIELD_TOP {
                    transform.translation.y = FIELD_BOTTOM;
                }
            }
        }

        // Keep the field centered on the scene.
        let p = &mut transform.translation;
        if p.x.abs() > FIELD_HALF {
            p.x = -p.x.signum() * FIELD_HALF;
        }
        if p.z.abs() > FIELD_HALF {
            p.z = -p.z.signum() * FIELD_HALF;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflakes_fall_and_sparks_rise() {
        let snow = initial_velocity(ParticleKind::Snowflakes, 0.5, 0.5);
        assert!(snow.y < 0.0);

        let spark = initial_velocity(ParticleKind::Sparks, 0.5, 0.5);
        assert!(spark.y > 0.0);
    }

    #[test]
    fn neon_starts_at_rest() {
        assert_eq!(initial_velocity(ParticleKind::Neon, 0.2, 0.8), Vec3::ZERO);
    }
}
