//! Gizmo outlines for tract polygons and NYC markers, plus a lat/lon
//! graticule on the backdrop.

use bevy::prelude::*;

use tracts::config::MARKER_RADIUS_PX;
use tracts::map_surface::{MapSurface, OverlayShape};
use tracts::projection::project;
use tracts::selection::HoveredTract;

use crate::camera::MapCamera;
use crate::colors::{EMPHASIS_OUTLINE, HOVER_OUTLINE, MARKER_OUTLINE, OUTLINE};
use crate::surface::BevySurface;

const GRATICULE_STEP_DEG: usize = 10;
const GRATICULE_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.08);

/// Emphasized outlines are redrawn this many pixels out to look heavier.
const EMPHASIS_OFFSETS_PX: [Vec2; 3] = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];

pub fn draw_overlay_outlines(
    surface: Res<BevySurface>,
    hovered: Res<HoveredTract>,
    map_camera: Res<MapCamera>,
    mut gizmos: Gizmos,
) {
    if !surface.is_mounted() {
        return;
    }
    let upp = map_camera.units_per_pixel();
    for feature in surface.live_features() {
        let is_hovered = hovered.0.as_deref() == Some(feature.id.as_str());
        match &feature.shape {
            OverlayShape::Polygon(ring) => {
                let Some(&first) = ring.first() else {
                    continue;
                };
                let closed = || ring.iter().copied().chain(std::iter::once(first));
                if feature.emphasized {
                    for offset in EMPHASIS_OFFSETS_PX {
                        let shift = offset * upp;
                        gizmos.linestrip_2d(closed().map(|p| p + shift), EMPHASIS_OUTLINE);
                    }
                } else if is_hovered {
                    gizmos.linestrip_2d(closed(), HOVER_OUTLINE);
                } else {
                    gizmos.linestrip_2d(closed(), OUTLINE);
                }
            }
            OverlayShape::Marker(center) => {
                let radius = MARKER_RADIUS_PX * upp;
                gizmos.circle_2d(*center, radius, MARKER_OUTLINE);
                if feature.emphasized || is_hovered {
                    gizmos.circle_2d(*center, radius + 2.0 * upp, HOVER_OUTLINE);
                }
            }
        }
    }
}

pub fn draw_graticule(surface: Res<BevySurface>, mut gizmos: Gizmos) {
    if !surface.is_mounted() {
        return;
    }
    for lon in (-180..=180).step_by(GRATICULE_STEP_DEG) {
        let lon = f64::from(lon);
        gizmos.line_2d(project(lon, -80.0), project(lon, 80.0), GRATICULE_COLOR);
    }
    for lat in (-80..=80).step_by(GRATICULE_STEP_DEG) {
        let lat = f64::from(lat);
        gizmos.line_2d(project(-180.0, lat), project(180.0, lat), GRATICULE_COLOR);
    }
}
