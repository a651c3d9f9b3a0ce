use bevy::prelude::*;

pub mod camera;
pub mod colors;
pub mod egui_input_guard;
pub mod outlines;
pub mod picking;
pub mod surface;
pub mod tract_mesh;

use camera::{LeftClickDrag, MapCamera};
use picking::CursorWorldPos;
use surface::BevySurface;
use tracts::pipeline::{recompute_rendered, sync_overlay, MapSurfacePlugin};
use tracts::Page;

/// Draws the mounted map surface and turns mouse/keyboard input on it into
/// camera moves and tract picks.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(colors::CLEAR))
            .init_resource::<MapCamera>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<CursorWorldPos>()
            .add_plugins(MapSurfacePlugin::<BevySurface>::default())
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                (
                    picking::update_cursor_world_pos,
                    picking::click_to_select,
                    camera::camera_left_drag,
                    camera::camera_pan_keyboard,
                    camera::camera_zoom,
                    camera::camera_zoom_keyboard,
                    picking::update_hover,
                )
                    .chain()
                    .run_if(map_page_shown),
            )
            .add_systems(
                Update,
                (
                    camera::handle_view_requests.after(recompute_rendered),
                    surface::apply_surface_ops.after(sync_overlay::<BevySurface>),
                    camera::apply_map_camera,
                    surface::scale_markers,
                    surface::update_hover_fill,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (outlines::draw_graticule, outlines::draw_overlay_outlines)
                    .run_if(map_page_shown),
            );
    }
}

fn map_page_shown(page: Res<State<Page>>) -> bool {
    page.get().shows_map()
}
