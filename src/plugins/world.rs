//! World lifecycle: initial state, keyword handling, and the systems that
//! rebuild and animate the scene.

use bevy::prelude::*;
use rand::Rng;

use crate::persist::{self, SavedState};
use crate::resources::{GenerateWorld, WorldState};
use crate::systems::{objects, particles, player, scene, terrain};
use crate::themes::ThemeLibrary;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let initial_keyword = match persist::load() {
            Ok(Some(state)) => state.keyword,
            Ok(None) => "forêt".to_string(),
            Err(err) => {
                warn!("Failed to load saved state: {err}");
                "forêt".to_string()
            }
        };
        let noise_seed = rand::thread_rng().gen();
        info!("Starting world: keyword='{initial_keyword}', noise seed={noise_seed}");

        app.insert_resource(WorldState::new(
            ThemeLibrary::builtin(),
            &initial_keyword,
            noise_seed,
        ))
        .add_event::<GenerateWorld>()
        .add_systems(Startup, (scene::spawn_camera, player::spawn_player))
        .add_systems(
            Update,
            (
                handle_generate,
                (
                    terrain::rebuild_terrain,
                    objects::rebuild_objects,
                    particles::rebuild_particles,
                    scene::apply_environment,
                    player::recolor_player,
                )
                    .run_if(resource_changed::<WorldState>),
                terrain::animate_terrain,
                particles::animate_particles,
                player::move_player,
                scene::orbit_camera,
                scene::pulse_themed_light,
            )
                .chain(),
        );
    }
}

/// Applies keyword requests from the UI and persists the last keyword.
fn handle_generate(mut events: EventReader<GenerateWorld>, mut world: ResMut<WorldState>) {
    for event in events.read() {
        world.apply_keyword(&event.keyword);
        info!(
            "Generated '{}' world (seed {})",
            world.theme().name,
            world.seed
        );
        let saved = SavedState {
            keyword: event.keyword.clone(),
        };
        if let Err(err) = persist::save(&saved) {
            warn!("Failed to save state: {err}");
        }
    }
}
