use bevy::prelude::*;

pub mod dashboard;
pub mod education;
pub mod home;
pub mod layer_panel;
pub mod loading_screen;
pub mod map_sidebar;
pub mod navigation;
pub mod nyc_table;
pub mod theme;
pub mod tract_details;
pub mod ui_widgets;

mod plugin_registration;

/// egui pages and map overlays for every [`tracts::Page`].
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        plugin_registration::register_ui_systems(app);
    }
}
