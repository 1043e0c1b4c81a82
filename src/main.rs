use bevy::prelude::*;

use dreamscape::{UiPlugin, WorldPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "DreamScape".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((WorldPlugin, UiPlugin))
        .run();
}
