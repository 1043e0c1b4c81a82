//! Keyword input panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::resources::{GenerateWorld, WorldState};

const SUGGESTIONS: [&str; 6] = ["forêt", "désert", "neige", "volcan", "cyberpunk", "océan"];

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<UiState>()
            .add_systems(Update, keyword_panel);
    }
}

#[derive(Resource, Default)]
struct UiState {
    keyword: String,
}

fn keyword_panel(
    mut contexts: EguiContexts,
    mut state: ResMut<UiState>,
    world: Res<WorldState>,
    mut events: EventWriter<GenerateWorld>,
) {
    egui::Window::new("DreamScape")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Décris un monde :");

            let response = ui.text_edit_singleline(&mut state.keyword);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.button("Générer").clicked();
            if (submitted || clicked) && !state.keyword.trim().is_empty() {
                events.send(GenerateWorld {
                    keyword: state.keyword.clone(),
                });
            }

            ui.separator();
            ui.label(format!("Monde actuel : {}", world.theme().name));

            ui.horizontal_wrapped(|ui| {
                for suggestion in SUGGESTIONS {
                    if ui.small_button(suggestion).clicked() {
                        state.keyword = suggestion.to_string();
                        events.send(GenerateWorld {
                            keyword: suggestion.to_string(),
                        });
                    }
                }
            });
        });
}
