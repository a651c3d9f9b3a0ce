use bevy::prelude::*;

use tracts::layers::Rgb;

/// Tract fill opacity at rest and under the cursor.
pub const FILL_ALPHA: f32 = 0.7;
pub const HOVER_FILL_ALPHA: f32 = 0.9;

pub const OUTLINE: Color = Color::srgb(0.0, 0.0, 0.0);
pub const EMPHASIS_OUTLINE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const HOVER_OUTLINE: Color = Color::srgb(0.23, 0.51, 0.96);
pub const MARKER_OUTLINE: Color = Color::srgb(1.0, 1.0, 1.0);

/// Land-ish backdrop drawn under overlays in place of map tiles.
pub const BACKDROP: Color = Color::srgb(0.93, 0.93, 0.90);
pub const CLEAR: Color = Color::srgb(0.67, 0.83, 0.87);

pub fn fill(rgb: Rgb, alpha: f32) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::srgba(r, g, b, alpha)
}
