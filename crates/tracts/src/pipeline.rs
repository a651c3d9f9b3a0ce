//! Systems that keep the map surface in step with the user's choices.
//!
//! Flow: sidebar edits [`FilterDraft`] → Search commits it to
//! [`FilterState`] → [`RenderedTracts`] is recomputed whenever the filter,
//! layer or catalog changes → the live overlay on the surface is replaced.
//! The surface systems are generic so the renderer and headless runs share
//! them.

use std::marker::PhantomData;

use bevy::prelude::*;

use crate::app_state::Page;
use crate::filter::FilterState;
use crate::layers::{render_set, LayerSelection, StyledTract};
use crate::map_surface::{
    nyc_overlay, tract_bounds, tract_overlay, BaseLayer, MapLoadState, MapOverlay, MapSurface,
};
use crate::nyc::{NycCatalog, SelectedNycTract};
use crate::projection::MapView;
use crate::selection::{SelectedTract, ViewRequest};
use crate::tract::TractCatalog;

/// Sidebar form contents not yet applied with Search.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft(pub FilterState);

/// Search button pressed.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SearchRequested;

/// Tracts currently drawn, with their layer colors.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct RenderedTracts {
    pub tracts: Vec<StyledTract>,
}

impl RenderedTracts {
    pub fn len(&self) -> usize {
        self.tracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracts.is_empty()
    }
}

/// Commits the draft and fits the camera to the matching tracts.
pub fn apply_search(
    mut requests: EventReader<SearchRequested>,
    draft: Res<FilterDraft>,
    catalog: Res<TractCatalog>,
    mut filter: ResMut<FilterState>,
    mut views: EventWriter<ViewRequest>,
) {
    if requests.read().last().is_none() {
        return;
    }
    *filter = draft.0.clone();

    let matching = filter.apply(&catalog.features);
    info!(
        "Search matched {} of {} census tracts",
        matching.len(),
        catalog.len()
    );
    if let Some(bounds) = tract_bounds(&matching) {
        views.send(ViewRequest::Fit(bounds));
    }
}

pub fn recompute_rendered(
    catalog: Res<TractCatalog>,
    filter: Res<FilterState>,
    layer: Res<LayerSelection>,
    mut rendered: ResMut<RenderedTracts>,
) {
    if !(catalog.is_changed() || filter.is_changed() || layer.is_changed()) {
        return;
    }
    rendered.tracts = render_set(&catalog.features, &filter, layer.kind);
    debug!(
        "Rendered {} tracts with layer '{}'",
        rendered.len(),
        layer.kind.label()
    );
}

pub fn mount_surface<S: MapSurface + Resource>(
    page: Res<State<Page>>,
    mut surface: ResMut<S>,
    mut overlay: ResMut<MapOverlay>,
    mut load: ResMut<MapLoadState>,
) {
    let view = match page.get() {
        Page::Nyc => MapView::nyc(),
        _ => MapView::us(),
    };
    overlay.forget();
    *load = MapLoadState::Loading;
    surface.mount(view, BaseLayer::default());
    info!("Mounted map surface for {:?}", page.get());
}

pub fn destroy_surface<S: MapSurface + Resource>(
    mut surface: ResMut<S>,
    mut overlay: ResMut<MapOverlay>,
    mut load: ResMut<MapLoadState>,
) {
    surface.destroy();
    overlay.forget();
    *load = MapLoadState::Loading;
    info!("Destroyed map surface");
}

pub fn track_load_state<S: MapSurface + Resource>(surface: Res<S>, mut load: ResMut<MapLoadState>) {
    if surface.is_mounted() && *load == MapLoadState::Loading {
        *load = MapLoadState::Ready;
    }
}

/// Replaces the live overlay when the drawn set or the selection changes.
#[allow(clippy::too_many_arguments)]
pub fn sync_overlay<S: MapSurface + Resource>(
    page: Res<State<Page>>,
    load: Res<MapLoadState>,
    catalog: Res<TractCatalog>,
    rendered: Res<RenderedTracts>,
    selected: Res<SelectedTract>,
    nyc: Res<NycCatalog>,
    nyc_selected: Res<SelectedNycTract>,
    mut overlay: ResMut<MapOverlay>,
    mut surface: ResMut<S>,
) {
    if *load != MapLoadState::Ready {
        return;
    }
    let stale = overlay.handle().is_none()
        || match page.get() {
            Page::Map => rendered.is_changed() || selected.is_changed() || catalog.is_changed(),
            Page::Nyc => nyc.is_changed() || nyc_selected.is_changed(),
            _ => false,
        };
    if !stale {
        return;
    }
    let features = match page.get() {
        Page::Map => tract_overlay(&catalog, &rendered.tracts, selected.0.as_deref()),
        Page::Nyc => nyc_overlay(&nyc, nyc_selected.0.as_deref()),
        _ => return,
    };
    overlay.refresh(&mut *surface, features);
}

/// Drives surface `S` from the core resources: mounted on entering a map
/// page, destroyed on leaving it, overlay kept current in between.
pub struct MapSurfacePlugin<S>(PhantomData<fn() -> S>);

impl<S> Default for MapSurfacePlugin<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S: MapSurface + Resource + Default> Plugin for MapSurfacePlugin<S> {
    fn build(&self, app: &mut App) {
        app.init_resource::<S>()
            .add_systems(OnEnter(Page::Map), mount_surface::<S>)
            .add_systems(OnEnter(Page::Nyc), mount_surface::<S>)
            .add_systems(OnExit(Page::Map), destroy_surface::<S>)
            .add_systems(OnExit(Page::Nyc), destroy_surface::<S>)
            .add_systems(
                Update,
                (track_load_state::<S>, sync_overlay::<S>)
                    .chain()
                    .after(recompute_rendered),
            );
    }
}
