mod ui;
mod world;

pub use ui::UiPlugin;
pub use world::WorldPlugin;
