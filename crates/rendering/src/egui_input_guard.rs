//! Egui input guard: keeps clicks and keys on panels from reaching the map.
//!
//! The sidebar, table and dashboard all float over the map surface. Map input
//! systems check these before panning, zooming or picking a tract.

use bevy_egui::EguiContexts;

/// Returns `true` when the cursor is over an egui panel or egui is handling
/// a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Returns `true` while a text field (zip code, table search) has focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts.ctx_mut().wants_keyboard_input()
}
