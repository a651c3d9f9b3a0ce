//! Tract selection, hover and the intervention panel's visibility.

use bevy::prelude::*;

use crate::config::NYC_FOCUS_ZOOM;
use crate::nyc::{NycCatalog, SelectedNycTract};
use crate::projection::{Bounds, MapView};
use crate::recommendations::Dismissals;
use crate::tract::TractCatalog;

/// Tract whose details are shown on the national map.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedTract(pub Option<String>);

/// Feature under the cursor on whichever map is mounted.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HoveredTract(pub Option<String>);

/// When open, the intervention cards replace the detail card.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterventionPanel {
    pub open: bool,
}

/// A tract polygon was clicked on the national map.
#[derive(Event, Debug, Clone)]
pub struct TractClicked {
    pub id: String,
}

/// A NYC tract was picked from a marker or a table row.
#[derive(Event, Debug, Clone)]
pub struct NycTractPicked {
    pub id: String,
    /// Move the camera onto the tract's marker.
    pub focus: bool,
}

/// Camera move requested by the core; the renderer resolves it against the
/// current viewport.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ViewRequest {
    Fit(Bounds),
    Focus(MapView),
}

/// Selects the clicked tract and opens the panel for food deserts.
pub fn handle_tract_clicks(
    mut clicks: EventReader<TractClicked>,
    catalog: Res<TractCatalog>,
    mut selected: ResMut<SelectedTract>,
    mut panel: ResMut<InterventionPanel>,
) {
    for click in clicks.read() {
        let Some(feature) = catalog.get(&click.id) else {
            warn!("Clicked tract {} is not in the catalog", click.id);
            continue;
        };
        selected.0 = Some(click.id.clone());
        if feature.properties.is_desert {
            panel.open = true;
        }
        debug!(
            "Selected tract {} (desert: {})",
            click.id, feature.properties.is_desert
        );
    }
}

pub fn handle_nyc_picks(
    mut picks: EventReader<NycTractPicked>,
    catalog: Res<NycCatalog>,
    mut selected: ResMut<SelectedNycTract>,
    mut views: EventWriter<ViewRequest>,
) {
    for pick in picks.read() {
        let Some(tract) = catalog.get(&pick.id) else {
            warn!("Picked NYC tract {} is not in the catalog", pick.id);
            continue;
        };
        selected.0 = Some(pick.id.clone());
        if pick.focus {
            views.send(ViewRequest::Focus(MapView::at(
                tract.lat(),
                tract.lon(),
                NYC_FOCUS_ZOOM,
            )));
        }
    }
}

/// Closing the panel discards the dismissed cards with it.
pub fn reset_dismissals_on_close(
    panel: Res<InterventionPanel>,
    mut dismissals: ResMut<Dismissals>,
) {
    if panel.is_changed() && !panel.open && !dismissals.is_empty() {
        *dismissals = dismissals.reset();
    }
}

/// Leaving a map page drops its selection state.
pub fn clear_map_selection(
    mut selected: ResMut<SelectedTract>,
    mut hovered: ResMut<HoveredTract>,
    mut panel: ResMut<InterventionPanel>,
) {
    selected.0 = None;
    hovered.0 = None;
    panel.open = false;
}

pub fn clear_nyc_selection(mut selected: ResMut<SelectedNycTract>, mut hovered: ResMut<HoveredTract>) {
    selected.0 = None;
    hovered.0 = None;
}
