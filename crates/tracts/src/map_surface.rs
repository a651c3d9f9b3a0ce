//! The map widget boundary.
//!
//! Everything that draws tracts goes through [`MapSurface`]. The overlay
//! controller keeps at most one overlay alive on a surface and swaps it on
//! every refresh, so the rendered set is always rebuilt from scratch.

use bevy::prelude::*;

use crate::config::{BASE_LAYER_ATTRIBUTION, MARKER_RADIUS_PX};
use crate::layers::{Rgb, StyledTract};
use crate::nyc::NycCatalog;
use crate::projection::{project, ring_contains, Bounds, MapView};
use crate::tract::{TractCatalog, TractFeature};

/// Handle returned by [`MapSurface::add_overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayer {
    pub attribution: &'static str,
}

impl Default for BaseLayer {
    fn default() -> Self {
        Self {
            attribution: BASE_LAYER_ATTRIBUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    /// Outer ring in world space, without the closing vertex.
    Polygon(Vec<Vec2>),
    /// Circle of constant screen radius centered at a world position.
    Marker(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFeature {
    pub id: String,
    pub shape: OverlayShape,
    pub fill: Rgb,
    /// Drawn with a heavier outline.
    pub emphasized: bool,
}

impl OverlayFeature {
    /// Whether `world` falls on this feature at the given zoom scale.
    pub fn hit(&self, world: Vec2, units_per_pixel: f32) -> bool {
        match &self.shape {
            OverlayShape::Polygon(ring) => ring_contains(ring, world),
            OverlayShape::Marker(center) => {
                center.distance(world) <= MARKER_RADIUS_PX * units_per_pixel
            }
        }
    }

    pub fn points(&self) -> &[Vec2] {
        match &self.shape {
            OverlayShape::Polygon(ring) => ring,
            OverlayShape::Marker(center) => std::slice::from_ref(center),
        }
    }
}

/// Topmost feature under `world`. Later features draw above earlier ones.
pub fn pick(features: &[OverlayFeature], world: Vec2, units_per_pixel: f32) -> Option<&OverlayFeature> {
    features.iter().rev().find(|f| f.hit(world, units_per_pixel))
}

pub fn bounds_of(features: &[OverlayFeature]) -> Option<Bounds> {
    Bounds::from_points(features.iter().flat_map(|f| f.points().iter().copied()))
}

/// Capability that draws a base map and tract overlays.
pub trait MapSurface {
    fn mount(&mut self, view: MapView, base_layer: BaseLayer);
    fn add_overlay(&mut self, features: Vec<OverlayFeature>) -> OverlayId;
    fn remove_overlay(&mut self, id: OverlayId);
    fn destroy(&mut self);
    /// True once the mount has taken effect.
    fn is_mounted(&self) -> bool;
}

/// Owns the single live overlay handle on the current surface.
#[derive(Resource, Debug, Default)]
pub struct MapOverlay {
    handle: Option<OverlayId>,
}

impl MapOverlay {
    pub fn handle(&self) -> Option<OverlayId> {
        self.handle
    }

    /// Replaces the live overlay with `features`.
    pub fn refresh<S: MapSurface>(&mut self, surface: &mut S, features: Vec<OverlayFeature>) {
        if let Some(old) = self.handle.take() {
            surface.remove_overlay(old);
        }
        self.handle = Some(surface.add_overlay(features));
    }

    /// Forgets the handle without touching the surface; used after destroy.
    pub fn forget(&mut self) {
        self.handle = None;
    }
}

/// Whether the map surface has finished mounting.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapLoadState {
    #[default]
    Loading,
    Ready,
}

pub fn world_ring(feature: &TractFeature) -> Vec<Vec2> {
    feature
        .geometry
        .outer_ring()
        .iter()
        .map(|&[lon, lat]| project(lon, lat))
        .collect()
}

/// World bounds of a tract set; `None` when empty.
pub fn tract_bounds(features: &[&TractFeature]) -> Option<Bounds> {
    Bounds::from_points(features.iter().flat_map(|f| world_ring(f)))
}

/// Polygons for the rendered tract set, in rendered order.
pub fn tract_overlay(
    catalog: &TractCatalog,
    rendered: &[StyledTract],
    selected: Option<&str>,
) -> Vec<OverlayFeature> {
    rendered
        .iter()
        .filter_map(|styled| {
            let feature = catalog.get(&styled.id)?;
            Some(OverlayFeature {
                id: styled.id.clone(),
                shape: OverlayShape::Polygon(world_ring(feature)),
                fill: styled.fill,
                emphasized: selected == Some(styled.id.as_str()),
            })
        })
        .collect()
}

pub const DESERT_MARKER: Rgb = Rgb::hex("#ef4444");
pub const OK_MARKER: Rgb = Rgb::hex("#22c55e");

/// One marker per NYC tract: red for deserts, green otherwise.
pub fn nyc_overlay(catalog: &NycCatalog, selected: Option<&str>) -> Vec<OverlayFeature> {
    catalog
        .tracts
        .iter()
        .map(|t| OverlayFeature {
            id: t.id.clone(),
            shape: OverlayShape::Marker(project(t.lon(), t.lat())),
            fill: if t.is_desert { DESERT_MARKER } else { OK_MARKER },
            emphasized: selected == Some(t.id.as_str()),
        })
        .collect()
}

/// A call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Mount(MapView, BaseLayer),
    AddOverlay(OverlayId, usize),
    RemoveOverlay(OverlayId),
    Destroy,
}

/// In-memory surface that records every call. Used by headless runs.
#[derive(Resource, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub overlays: Vec<(OverlayId, Vec<OverlayFeature>)>,
    pub view: Option<MapView>,
    next_id: u64,
}

impl RecordingSurface {
    pub fn live_overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Features of the most recently added live overlay.
    pub fn current_features(&self) -> &[OverlayFeature] {
        self.overlays.last().map_or(&[], |(_, f)| f.as_slice())
    }
}

impl MapSurface for RecordingSurface {
    fn mount(&mut self, view: MapView, base_layer: BaseLayer) {
        self.view = Some(view);
        self.calls.push(SurfaceCall::Mount(view, base_layer));
    }

    fn add_overlay(&mut self, features: Vec<OverlayFeature>) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.calls.push(SurfaceCall::AddOverlay(id, features.len()));
        self.overlays.push((id, features));
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.overlays.retain(|(live, _)| *live != id);
        self.calls.push(SurfaceCall::RemoveOverlay(id));
    }

    fn destroy(&mut self) {
        self.overlays.clear();
        self.view = None;
        self.calls.push(SurfaceCall::Destroy);
    }

    fn is_mounted(&self) -> bool {
        self.view.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nyc::{nyc_tract, Borough};

    fn square(id: &str, x: f32) -> OverlayFeature {
        OverlayFeature {
            id: id.to_string(),
            shape: OverlayShape::Polygon(vec![
                Vec2::new(x, 0.0),
                Vec2::new(x + 10.0, 0.0),
                Vec2::new(x + 10.0, 10.0),
                Vec2::new(x, 10.0),
            ]),
            fill: Rgb(0, 0, 0),
            emphasized: false,
        }
    }

    #[test]
    fn refresh_keeps_a_single_live_overlay() {
        let mut surface = RecordingSurface::default();
        let mut overlay = MapOverlay::default();
        surface.mount(MapView::us(), BaseLayer::default());
        overlay.refresh(&mut surface, vec![square("a", 0.0)]);
        overlay.refresh(&mut surface, vec![square("a", 0.0), square("b", 20.0)]);
        overlay.refresh(&mut surface, vec![]);
        assert_eq!(surface.live_overlay_count(), 1);
        assert_eq!(overlay.handle(), Some(OverlayId(3)));
        assert_eq!(
            surface.calls[1..],
            [
                SurfaceCall::AddOverlay(OverlayId(1), 1),
                SurfaceCall::RemoveOverlay(OverlayId(1)),
                SurfaceCall::AddOverlay(OverlayId(2), 2),
                SurfaceCall::RemoveOverlay(OverlayId(2)),
                SurfaceCall::AddOverlay(OverlayId(3), 0),
            ]
        );
    }

    #[test]
    fn mount_carries_attribution() {
        let mut surface = RecordingSurface::default();
        assert!(!surface.is_mounted());
        surface.mount(MapView::nyc(), BaseLayer::default());
        assert!(surface.is_mounted());
        assert!(matches!(
            &surface.calls[0],
            SurfaceCall::Mount(_, base) if base.attribution.contains("OpenStreetMap")
        ));
        surface.destroy();
        assert!(!surface.is_mounted());
    }

    #[test]
    fn pick_prefers_topmost_and_misses_gaps() {
        let features = vec![square("under", 0.0), square("over", 5.0), square("far", 100.0)];
        let hit = pick(&features, Vec2::new(7.0, 5.0), 1.0).map(|f| f.id.as_str());
        assert_eq!(hit, Some("over"));
        assert!(pick(&features, Vec2::new(50.0, 5.0), 1.0).is_none());
    }

    #[test]
    fn marker_hit_radius_scales_with_zoom() {
        let marker = OverlayFeature {
            id: "m".to_string(),
            shape: OverlayShape::Marker(Vec2::ZERO),
            fill: OK_MARKER,
            emphasized: false,
        };
        let p = Vec2::new(10.0, 0.0);
        assert!(!marker.hit(p, 1.0));
        assert!(marker.hit(p, 2.0));
    }

    #[test]
    fn nyc_markers_are_colored_by_desert_flag() {
        let mut desert = nyc_tract("1", Borough::Bronx, 10);
        desert.is_desert = true;
        let catalog = NycCatalog {
            tracts: vec![desert, nyc_tract("2", Borough::Queens, 10)],
        };
        let features = nyc_overlay(&catalog, Some("2"));
        assert_eq!(features[0].fill, DESERT_MARKER);
        assert_eq!(features[1].fill, OK_MARKER);
        assert!(!features[0].emphasized && features[1].emphasized);
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = bounds_of(&[square("a", 0.0), square("b", 20.0)]).unwrap();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(30.0, 10.0));
        assert!(bounds_of(&[]).is_none());
    }
}
