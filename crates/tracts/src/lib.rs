use bevy::prelude::*;

pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod education;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod geography;
pub mod layers;
pub mod map_surface;
pub mod nyc;
pub mod pipeline;
pub mod projection;
pub mod recommendations;
pub mod selection;
pub mod table;
pub mod tract;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use app_state::Page;
pub use error::DataError;

use dashboard::{DashboardData, DashboardRegion};
use education::EducationGuide;
use filter::FilterState;
use layers::LayerSelection;
use map_surface::{MapLoadState, MapOverlay};
use nyc::{NycCatalog, SelectedNycTract};
use pipeline::{FilterDraft, RenderedTracts, SearchRequested};
use recommendations::Dismissals;
use selection::{
    HoveredTract, InterventionPanel, NycTractPicked, SelectedTract, TractClicked, ViewRequest,
};
use table::TableQuery;
use tract::TractCatalog;

/// Core state, fixtures and the systems that derive views from them.
///
/// Map surfaces are attached separately with
/// [`pipeline::MapSurfacePlugin`] so headless runs can use a recording
/// surface in place of the renderer.
pub struct TractsPlugin;

impl Plugin for TractsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Page>()
            .init_resource::<TractCatalog>()
            .init_resource::<NycCatalog>()
            .init_resource::<DashboardData>()
            .init_resource::<FilterState>()
            .init_resource::<FilterDraft>()
            .init_resource::<LayerSelection>()
            .init_resource::<RenderedTracts>()
            .init_resource::<SelectedTract>()
            .init_resource::<HoveredTract>()
            .init_resource::<InterventionPanel>()
            .init_resource::<Dismissals>()
            .init_resource::<SelectedNycTract>()
            .init_resource::<TableQuery>()
            .init_resource::<DashboardRegion>()
            .init_resource::<EducationGuide>()
            .init_resource::<MapOverlay>()
            .init_resource::<MapLoadState>()
            .add_event::<TractClicked>()
            .add_event::<NycTractPicked>()
            .add_event::<ViewRequest>()
            .add_event::<SearchRequested>()
            .add_systems(Startup, fixtures::load_fixtures)
            .add_systems(
                Update,
                (
                    selection::handle_tract_clicks,
                    selection::handle_nyc_picks,
                    selection::reset_dismissals_on_close,
                    pipeline::apply_search,
                    pipeline::recompute_rendered,
                )
                    .chain(),
            )
            .add_systems(Update, log_page_changes)
            .add_systems(OnExit(Page::Map), selection::clear_map_selection)
            .add_systems(OnExit(Page::Nyc), selection::clear_nyc_selection);
    }
}

fn log_page_changes(page: Res<State<Page>>) {
    if page.is_changed() {
        info!("Page: {} ({})", page.get().label(), page.get().route());
    }
}
