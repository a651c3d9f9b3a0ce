//! Cursor picking against the live overlay.
//!
//! Hover follows the cursor every frame. A left click that did not turn into
//! a drag selects the topmost feature: a tract on the national map, a marker
//! on the NYC page.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use tracts::map_surface::{pick, MapSurface};
use tracts::selection::{HoveredTract, NycTractPicked, TractClicked};
use tracts::Page;

use crate::camera::{LeftClickDrag, MapCamera};
use crate::egui_input_guard::egui_wants_pointer;
use crate::surface::BevySurface;

/// Cursor position in world space while it is over the map.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorWorldPos(pub Option<Vec2>);

pub fn update_cursor_world_pos(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut contexts: EguiContexts,
    mut cursor: ResMut<CursorWorldPos>,
) {
    let world = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        let cursor_pos = windows.get_single().ok().and_then(Window::cursor_position);
        match (cursor_pos, cameras.get_single()) {
            (Some(pos), Ok((camera, transform))) => camera.viewport_to_world_2d(transform, pos).ok(),
            _ => None,
        }
    };
    cursor.set_if_neq(CursorWorldPos(world));
}

/// Topmost feature id under the cursor.
fn picked_id(surface: &BevySurface, cursor: &CursorWorldPos, map_camera: &MapCamera) -> Option<String> {
    let world = cursor.0?;
    pick(surface.current_features(), world, map_camera.units_per_pixel()).map(|f| f.id.clone())
}

pub fn update_hover(
    surface: Res<BevySurface>,
    cursor: Res<CursorWorldPos>,
    map_camera: Res<MapCamera>,
    mut hovered: ResMut<HoveredTract>,
) {
    let id = if surface.is_mounted() {
        picked_id(&surface, &cursor, &map_camera)
    } else {
        None
    };
    hovered.set_if_neq(HoveredTract(id));
}

/// Runs before the drag system so `left_drag` still describes the press
/// being released.
#[allow(clippy::too_many_arguments)]
pub fn click_to_select(
    buttons: Res<ButtonInput<MouseButton>>,
    left_drag: Res<LeftClickDrag>,
    page: Res<State<Page>>,
    surface: Res<BevySurface>,
    cursor: Res<CursorWorldPos>,
    map_camera: Res<MapCamera>,
    mut clicks: EventWriter<TractClicked>,
    mut picks: EventWriter<NycTractPicked>,
) {
    if !buttons.just_released(MouseButton::Left) || !left_drag.pressed || left_drag.is_dragging {
        return;
    }
    let Some(id) = picked_id(&surface, &cursor, &map_camera) else {
        return;
    };
    match page.get() {
        Page::Map => {
            clicks.send(TractClicked { id });
        }
        Page::Nyc => {
            picks.send(NycTractPicked { id, focus: false });
        }
        _ => {}
    }
}
