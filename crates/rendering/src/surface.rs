//! Bevy implementation of the map surface.
//!
//! [`BevySurface`] records calls made through [`MapSurface`] and
//! [`apply_surface_ops`] turns them into entities: one `Mesh2d` per tract
//! polygon, one circle per NYC marker, and a backdrop standing in for the
//! base tile layer. The surface only reports itself mounted after the mount
//! has been applied, so the first frame on a map page shows the loading
//! overlay.

use bevy::prelude::*;

use tracts::config::MARKER_RADIUS_PX;
use tracts::map_surface::{BaseLayer, MapSurface, OverlayFeature, OverlayId, OverlayShape};
use tracts::projection::{project, MapView};
use tracts::selection::HoveredTract;

use crate::camera::MapCamera;
use crate::colors::{fill, BACKDROP, FILL_ALPHA, HOVER_FILL_ALPHA};
use crate::tract_mesh::{centroid, polygon_mesh};

const BACKDROP_Z: f32 = -10.0;
const POLYGON_Z: f32 = 1.0;
const MARKER_Z: f32 = 5.0;
/// Depth step between successive features so later ones draw on top.
const FEATURE_Z_STEP: f32 = 0.001;

#[derive(Debug, Clone, PartialEq)]
enum SurfaceOp {
    Mount(MapView),
    Add(OverlayId),
    Remove(OverlayId),
    Destroy,
}

#[derive(Resource, Debug, Default)]
pub struct BevySurface {
    pending: Vec<SurfaceOp>,
    next_id: u64,
    mounted: bool,
    base_layer: Option<BaseLayer>,
    overlays: Vec<(OverlayId, Vec<OverlayFeature>)>,
}

impl BevySurface {
    /// Features of every live overlay, bottom to top.
    pub fn live_features(&self) -> impl Iterator<Item = &OverlayFeature> {
        self.overlays.iter().flat_map(|(_, features)| features.iter())
    }

    /// Features of the most recently added live overlay.
    pub fn current_features(&self) -> &[OverlayFeature] {
        self.overlays.last().map_or(&[], |(_, f)| f.as_slice())
    }

    pub fn attribution(&self) -> Option<&'static str> {
        self.base_layer.map(|b| b.attribution)
    }

    fn features(&self, id: OverlayId) -> Option<&[OverlayFeature]> {
        self.overlays
            .iter()
            .find(|(live, _)| *live == id)
            .map(|(_, f)| f.as_slice())
    }
}

impl MapSurface for BevySurface {
    fn mount(&mut self, view: MapView, base_layer: BaseLayer) {
        self.base_layer = Some(base_layer);
        self.overlays.clear();
        self.pending.push(SurfaceOp::Mount(view));
    }

    fn add_overlay(&mut self, features: Vec<OverlayFeature>) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.overlays.push((id, features));
        self.pending.push(SurfaceOp::Add(id));
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.overlays.retain(|(live, _)| *live != id);
        self.pending.push(SurfaceOp::Remove(id));
    }

    fn destroy(&mut self) {
        self.overlays.clear();
        self.base_layer = None;
        self.mounted = false;
        self.pending.push(SurfaceOp::Destroy);
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Tags every entity spawned for an overlay.
#[derive(Component, Debug, Clone, Copy)]
pub struct OverlayMember(pub OverlayId);

/// A drawn tract or marker and its layer color.
#[derive(Component, Debug, Clone)]
pub struct TractShape {
    pub id: String,
    pub fill: tracts::layers::Rgb,
}

/// Marker circles keep a constant on-screen radius.
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerScale;

#[derive(Component)]
pub struct SurfaceBackdrop;

fn spawn_backdrop(commands: &mut Commands) {
    let min = project(-180.0, -85.0);
    let max = project(180.0, 85.0);
    commands.spawn((
        Sprite::from_color(BACKDROP, max - min),
        Transform::from_translation(((min + max) / 2.0).extend(BACKDROP_Z)),
        SurfaceBackdrop,
    ));
}

fn spawn_feature(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    overlay: OverlayId,
    index: usize,
    feature: &OverlayFeature,
    units_per_pixel: f32,
) {
    let material = materials.add(ColorMaterial::from(fill(feature.fill, FILL_ALPHA)));
    let shape = TractShape {
        id: feature.id.clone(),
        fill: feature.fill,
    };
    let dz = index as f32 * FEATURE_Z_STEP;
    match &feature.shape {
        OverlayShape::Polygon(ring) => {
            if ring.len() < 3 {
                warn!("Skipping tract {} with {} vertices", feature.id, ring.len());
                return;
            }
            commands.spawn((
                Mesh2d(meshes.add(polygon_mesh(ring))),
                MeshMaterial2d(material),
                Transform::from_translation(centroid(ring).extend(POLYGON_Z + dz)),
                OverlayMember(overlay),
                shape,
            ));
        }
        OverlayShape::Marker(center) => {
            commands.spawn((
                Mesh2d(meshes.add(Circle::new(1.0))),
                MeshMaterial2d(material),
                Transform::from_translation(center.extend(MARKER_Z + dz))
                    .with_scale(Vec3::splat(MARKER_RADIUS_PX * units_per_pixel)),
                OverlayMember(overlay),
                MarkerScale,
                shape,
            ));
        }
    }
}

/// Applies queued surface calls in the order they were made.
#[allow(clippy::too_many_arguments)]
pub fn apply_surface_ops(
    mut commands: Commands,
    mut surface: ResMut<BevySurface>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut map_camera: ResMut<MapCamera>,
    members: Query<(Entity, &OverlayMember)>,
    backdrops: Query<Entity, With<SurfaceBackdrop>>,
) {
    if surface.pending.is_empty() {
        return;
    }
    let ops = std::mem::take(&mut surface.pending);
    for op in ops {
        match op {
            SurfaceOp::Mount(view) => {
                map_camera.set_view(view);
                spawn_backdrop(&mut commands);
                surface.mounted = true;
            }
            SurfaceOp::Add(id) => {
                // Already removed again within this batch.
                let Some(features) = surface.features(id) else {
                    continue;
                };
                let upp = map_camera.units_per_pixel();
                for (index, feature) in features.iter().enumerate() {
                    spawn_feature(
                        &mut commands,
                        &mut meshes,
                        &mut materials,
                        id,
                        index,
                        feature,
                        upp,
                    );
                }
                debug!("Overlay {:?}: {} features", id, features.len());
            }
            SurfaceOp::Remove(id) => {
                for (entity, member) in &members {
                    if member.0 == id {
                        commands.entity(entity).despawn();
                    }
                }
            }
            SurfaceOp::Destroy => {
                for (entity, _) in &members {
                    commands.entity(entity).despawn();
                }
                for entity in &backdrops {
                    commands.entity(entity).despawn();
                }
                surface.mounted = false;
            }
        }
    }
}

/// Keeps marker circles at a constant screen radius while zooming.
pub fn scale_markers(
    map_camera: Res<MapCamera>,
    mut markers: Query<&mut Transform, With<MarkerScale>>,
) {
    if !map_camera.is_changed() {
        return;
    }
    let radius = MARKER_RADIUS_PX * map_camera.units_per_pixel();
    for mut transform in &mut markers {
        transform.scale = Vec3::splat(radius);
    }
}

/// Raises the opacity of the hovered tract.
pub fn update_hover_fill(
    hovered: Res<HoveredTract>,
    shapes: Query<(&TractShape, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !hovered.is_changed() {
        return;
    }
    for (shape, material) in &shapes {
        let alpha = if hovered.0.as_deref() == Some(shape.id.as_str()) {
            HOVER_FILL_ALPHA
        } else {
            FILL_ALPHA
        };
        if let Some(material) = materials.get_mut(&material.0) {
            material.color = fill(shape.fill, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;
    use tracts::layers::Rgb;

    fn marker(id: &str) -> OverlayFeature {
        OverlayFeature {
            id: id.to_string(),
            shape: OverlayShape::Marker(Vec2::ZERO),
            fill: Rgb(1, 2, 3),
            emphasized: false,
        }
    }

    #[test]
    fn mount_takes_effect_only_when_applied() {
        let mut surface = BevySurface::default();
        surface.mount(MapView::us(), BaseLayer::default());
        assert!(!surface.is_mounted());
        assert!(surface.attribution().is_some());
        assert_eq!(surface.pending, [SurfaceOp::Mount(MapView::us())]);
    }

    #[test]
    fn removed_overlays_leave_no_live_features() {
        let mut surface = BevySurface::default();
        let a = surface.add_overlay(vec![marker("a")]);
        let b = surface.add_overlay(vec![marker("b"), marker("c")]);
        surface.remove_overlay(a);
        let ids: Vec<&str> = surface.live_features().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
        assert!(surface.features(a).is_none());
        assert_eq!(surface.features(b).map(<[_]>::len), Some(2));
    }

    fn surface_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.init_asset::<Mesh>().init_asset::<ColorMaterial>();
        app.init_resource::<MapCamera>()
            .init_resource::<BevySurface>()
            .add_systems(Update, apply_surface_ops);
        app
    }

    fn member_count(app: &mut App) -> usize {
        let world = app.world_mut();
        let mut query = world.query::<&OverlayMember>();
        query.iter(world).count()
    }

    #[test]
    fn applied_ops_spawn_and_despawn_entities() {
        let mut app = surface_app();
        {
            let mut surface = app.world_mut().resource_mut::<BevySurface>();
            surface.mount(MapView::nyc(), BaseLayer::default());
            surface.add_overlay(vec![marker("a"), marker("b")]);
        }
        app.update();
        assert!(app.world().resource::<BevySurface>().is_mounted());
        assert_eq!(app.world().resource::<MapCamera>().center, MapView::nyc().center);
        assert_eq!(member_count(&mut app), 2);

        app.world_mut().resource_mut::<BevySurface>().destroy();
        app.update();
        assert_eq!(member_count(&mut app), 0);
    }

    #[test]
    fn overlay_removed_in_the_same_frame_is_never_spawned() {
        let mut app = surface_app();
        {
            let mut surface = app.world_mut().resource_mut::<BevySurface>();
            surface.mount(MapView::us(), BaseLayer::default());
            let first = surface.add_overlay(vec![marker("a")]);
            surface.remove_overlay(first);
            surface.add_overlay(vec![marker("b")]);
        }
        app.update();
        assert_eq!(member_count(&mut app), 1);
    }

    #[test]
    fn destroy_clears_everything() {
        let mut surface = BevySurface::default();
        surface.mount(MapView::nyc(), BaseLayer::default());
        surface.add_overlay(vec![marker("a")]);
        surface.destroy();
        assert!(!surface.is_mounted());
        assert!(surface.attribution().is_none());
        assert_eq!(surface.live_features().count(), 0);
        assert_eq!(surface.pending.last(), Some(&SurfaceOp::Destroy));
    }
}
