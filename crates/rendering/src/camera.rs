use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use tracts::config::{FIT_PADDING_PX, MAX_ZOOM, MIN_ZOOM};
use tracts::projection::{units_per_pixel, MapView};
use tracts::selection::ViewRequest;

use crate::egui_input_guard::{egui_wants_keyboard, egui_wants_pointer};

/// Logical pixels per second for keyboard panning.
const PAN_SPEED: f32 = 600.0;
/// Zoom levels per scroll line.
const ZOOM_PER_LINE: f32 = 0.5;
/// Zoom levels per second while a zoom key is held.
const KEY_ZOOM_SPEED: f32 = 2.0;

/// Slippy-map camera state: world-space center and fractional zoom level.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center: Vec2,
    pub zoom: f32,
}

impl Default for MapCamera {
    fn default() -> Self {
        let view = MapView::us();
        Self {
            center: view.center,
            zoom: view.zoom,
        }
    }
}

impl MapCamera {
    pub fn set_view(&mut self, view: MapView) {
        self.center = view.center;
        self.zoom = view.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn units_per_pixel(&self) -> f32 {
        units_per_pixel(self.zoom)
    }

    /// World position under `cursor` (window coordinates, y down).
    pub fn screen_to_world(&self, cursor: Vec2, window_size: Vec2) -> Vec2 {
        let offset = cursor - window_size / 2.0;
        self.center + Vec2::new(offset.x, -offset.y) * self.units_per_pixel()
    }

    /// Zoom by `delta` levels keeping the world point under `anchor` fixed.
    pub fn zoom_about(&mut self, delta: f32, anchor: Vec2) {
        let old = self.units_per_pixel();
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = self.units_per_pixel() / old;
        self.center = anchor + (self.center - anchor) * ratio;
    }
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial
/// press it becomes a pan and the release is not treated as a click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
}

const LEFT_DRAG_THRESHOLD: f32 = 5.0;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System: apply MapCamera state to the camera transform and projection.
pub fn apply_map_camera(
    map_camera: Res<MapCamera>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !map_camera.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation = map_camera.center.extend(transform.translation.z);
    projection.scale = map_camera.units_per_pixel();
}

/// Resolves fit/focus requests against the current window size.
pub fn handle_view_requests(
    mut requests: EventReader<ViewRequest>,
    windows: Query<&Window>,
    mut map_camera: ResMut<MapCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    for request in requests.read() {
        let view = match request {
            ViewRequest::Fit(bounds) => bounds.fit(window.size(), FIT_PADDING_PX),
            ViewRequest::Focus(view) => *view,
        };
        map_camera.set_view(view);
    }
}

/// Arrow keys / WASD: pan at a constant on-screen speed.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    mut map_camera: ResMut<MapCamera>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if dir != Vec2::ZERO {
        let delta = PAN_SPEED * map_camera.units_per_pixel() * time.delta_secs();
        map_camera.center += dir.normalize() * delta;
    }
}

/// Left-mouse drag: pan (with threshold to distinguish from clicks).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut map_camera: ResMut<MapCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD
            {
                left_drag.is_dragging = true;
            }
            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                let upp = map_camera.units_per_pixel();
                map_camera.center -= Vec2::new(delta.x, -delta.y) * upp;
            }
            left_drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom about the cursor.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut map_camera: ResMut<MapCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let anchor = window
            .cursor_position()
            .map(|c| map_camera.screen_to_world(c, window.size()))
            .unwrap_or(map_camera.center);
        map_camera.zoom_about(dy * ZOOM_PER_LINE, anchor);
    }
}

/// `=`/`-` keys: zoom about the view center.
pub fn camera_zoom_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    mut map_camera: ResMut<MapCamera>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }
    let mut dz = 0.0;
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        dz += 1.0;
    }
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        dz -= 1.0;
    }
    if dz != 0.0 {
        let center = map_camera.center;
        map_camera.zoom_about(dz * KEY_ZOOM_SPEED * time.delta_secs(), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(zoom: f32) -> MapCamera {
        MapCamera {
            center: Vec2::new(100.0, 100.0),
            zoom,
        }
    }

    #[test]
    fn window_center_maps_to_camera_center() {
        let cam = camera(10.0);
        let world = cam.screen_to_world(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
        assert_eq!(world, cam.center);
    }

    #[test]
    fn screen_y_grows_down_world_y_grows_up() {
        let cam = camera(10.0);
        let world = cam.screen_to_world(Vec2::new(400.0, 0.0), Vec2::new(800.0, 600.0));
        assert!((world.y - 400.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut cam = camera(10.0);
        let size = Vec2::new(800.0, 600.0);
        let cursor = Vec2::new(600.0, 150.0);
        let before = cam.screen_to_world(cursor, size);
        cam.zoom_about(1.0, before);
        let after = cam.screen_to_world(cursor, size);
        assert!((before - after).length() < 1e-3);
        assert_eq!(cam.zoom, 11.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera(MAX_ZOOM);
        let center = cam.center;
        cam.zoom_about(3.0, center);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.set_view(MapView {
            center,
            zoom: -5.0,
        });
        assert_eq!(cam.zoom, MIN_ZOOM);
    }
}
