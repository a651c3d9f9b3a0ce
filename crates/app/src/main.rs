use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

#[cfg(not(target_arch = "wasm32"))]
mod screenshots;
mod start_page;

use start_page::StartPage;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: ui::navigation::BRAND.to_string(),
            resolution: (1280.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        tracts::TractsPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .insert_resource(StartPage::detect())
    .add_systems(Startup, start_page::apply_start_page);

    #[cfg(not(target_arch = "wasm32"))]
    if std::env::var(screenshots::SCREENSHOTS_ENV).is_ok() {
        app.init_resource::<screenshots::ScreenshotQueue>()
            .add_systems(Update, screenshots::drive_screenshots);
    }

    app.run();
}
