//! Integration tests for the atlas core using the `TestAtlas` harness.
//!
//! These spin up a headless Bevy App with `TractsPlugin` and a recording map
//! surface and verify page flow, selection and the overlay pipeline.

use crate::app_state::Page;
use crate::filter::FilterState;
use crate::layers::{LayerKind, LayerSelection};
use crate::map_surface::{MapLoadState, OverlayShape, SurfaceCall};
use crate::nyc::{NycCatalog, SelectedNycTract};
use crate::pipeline::{FilterDraft, RenderedTracts};
use crate::recommendations::{card_view, CardView, Dismissals};
use crate::selection::{InterventionPanel, SelectedTract, ViewRequest};
use crate::test_harness::TestAtlas;
use crate::tract::TractCatalog;

// ===========================================================================
// 1. Harness bootstrap
// ===========================================================================

#[test]
fn fixtures_load_on_startup() {
    let atlas = TestAtlas::new();
    assert_eq!(atlas.resource::<TractCatalog>().len(), 13);
    assert_eq!(atlas.resource::<NycCatalog>().tracts.len(), 20);
    assert_eq!(atlas.page(), Page::Home);
}

#[test]
fn unfiltered_render_set_contains_every_tract() {
    let atlas = TestAtlas::new();
    assert_eq!(atlas.resource::<RenderedTracts>().len(), 13);
}

#[test]
fn surface_is_not_mounted_off_the_map_pages() {
    let atlas = TestAtlas::new();
    assert!(atlas.surface().calls.is_empty());
    assert_eq!(*atlas.resource::<MapLoadState>(), MapLoadState::Loading);
}

// ===========================================================================
// 2. Surface lifecycle
// ===========================================================================

#[test]
fn entering_map_mounts_and_draws_one_overlay() {
    let atlas = TestAtlas::on_page(Page::Map);
    let surface = atlas.surface();
    assert!(matches!(surface.calls[0], SurfaceCall::Mount(..)));
    assert_eq!(surface.live_overlay_count(), 1);
    assert_eq!(surface.current_features().len(), 13);
    assert_eq!(*atlas.resource::<MapLoadState>(), MapLoadState::Ready);
}

#[test]
fn leaving_map_destroys_the_surface() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.goto(Page::Dashboard);
    assert_eq!(atlas.surface().calls.last(), Some(&SurfaceCall::Destroy));
    assert_eq!(atlas.surface().live_overlay_count(), 0);
    assert_eq!(*atlas.resource::<MapLoadState>(), MapLoadState::Loading);
}

#[test]
fn nyc_page_draws_one_marker_per_tract() {
    let atlas = TestAtlas::on_page(Page::Nyc);
    let features = atlas.surface().current_features();
    assert_eq!(features.len(), 20);
    assert!(features
        .iter()
        .all(|f| matches!(f.shape, OverlayShape::Marker(_))));
}

#[test]
fn layer_change_replaces_the_overlay() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    let before = atlas.surface().current_features()[0].fill;
    atlas.resource_mut::<LayerSelection>().kind = LayerKind::Poverty;
    atlas.update();
    let surface = atlas.surface();
    assert_eq!(surface.live_overlay_count(), 1);
    assert_ne!(surface.current_features()[0].fill, before);
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, SurfaceCall::RemoveOverlay(_))));
}

// ===========================================================================
// 3. Filter + search
// ===========================================================================

#[test]
fn draft_edits_do_not_filter_until_search() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.resource_mut::<FilterDraft>().0 = FilterState::default().with_state("TX");
    atlas.update();
    assert_eq!(atlas.resource::<RenderedTracts>().len(), 13);
}

#[test]
fn search_filters_and_fits_the_camera() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.drain_view_requests();
    atlas.search(FilterState::default().with_state("CA").with_low_income(true));

    let rendered: Vec<&str> = atlas
        .resource::<RenderedTracts>()
        .tracts
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(rendered, ["06001400100", "06075010100", "06037206200"]);
    assert_eq!(atlas.surface().current_features().len(), 3);

    let requests = atlas.drain_view_requests();
    assert!(matches!(requests.as_slice(), [ViewRequest::Fit(_)]));
}

#[test]
fn empty_search_result_keeps_camera() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.drain_view_requests();
    atlas.search(FilterState::default().with_state("FL").with_zip_code("999"));
    assert!(atlas.resource::<RenderedTracts>().is_empty());
    assert!(atlas.drain_view_requests().is_empty());
}

// ===========================================================================
// 4. Selection + recommendations
// ===========================================================================

#[test]
fn clicking_a_desert_opens_the_panel() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("06001400100");
    assert_eq!(
        atlas.resource::<SelectedTract>().0.as_deref(),
        Some("06001400100")
    );
    assert!(atlas.resource::<InterventionPanel>().open);

    let catalog = atlas.resource::<TractCatalog>();
    let tract = &catalog.get("06001400100").unwrap().properties;
    assert!(matches!(
        card_view(Some(tract), atlas.resource::<Dismissals>()),
        CardView::Cards(_)
    ));
}

#[test]
fn clicking_a_non_desert_keeps_panel_closed() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("06001400200");
    assert!(!atlas.resource::<InterventionPanel>().open);
    assert_eq!(
        atlas.resource::<SelectedTract>().0.as_deref(),
        Some("06001400200")
    );
}

#[test]
fn unknown_tract_click_is_ignored() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("does-not-exist");
    assert!(atlas.resource::<SelectedTract>().0.is_none());
}

#[test]
fn selected_tract_is_emphasized_on_the_surface() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("48201010100");
    let emphasized: Vec<&str> = atlas
        .surface()
        .current_features()
        .iter()
        .filter(|f| f.emphasized)
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(emphasized, ["48201010100"]);
}

#[test]
fn dismissals_survive_reselection_but_not_closing() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("06001400100");
    let dismissed = atlas.resource::<Dismissals>().dismiss("mobile-farmers-market");
    *atlas.resource_mut::<Dismissals>() = dismissed;
    atlas.click_tract("48201010100");
    assert!(atlas
        .resource::<Dismissals>()
        .is_dismissed("mobile-farmers-market"));

    atlas.resource_mut::<InterventionPanel>().open = false;
    atlas.update();
    assert!(atlas.resource::<Dismissals>().is_empty());
}

#[test]
fn leaving_the_map_clears_selection() {
    let mut atlas = TestAtlas::on_page(Page::Map);
    atlas.click_tract("06001400100");
    atlas.goto(Page::Home);
    assert!(atlas.resource::<SelectedTract>().0.is_none());
    assert!(!atlas.resource::<InterventionPanel>().open);
}

// ===========================================================================
// 5. NYC picking
// ===========================================================================

#[test]
fn table_pick_focuses_the_marker() {
    let mut atlas = TestAtlas::on_page(Page::Nyc);
    atlas.drain_view_requests();
    atlas.pick_nyc("36005023100", true);
    assert_eq!(
        atlas.resource::<SelectedNycTract>().0.as_deref(),
        Some("36005023100")
    );
    let requests = atlas.drain_view_requests();
    let [ViewRequest::Focus(view)] = requests.as_slice() else {
        panic!("expected one focus request, got {requests:?}");
    };
    assert_eq!(view.zoom, crate::config::NYC_FOCUS_ZOOM);
    let emphasized = atlas
        .surface()
        .current_features()
        .iter()
        .filter(|f| f.emphasized)
        .count();
    assert_eq!(emphasized, 1);
}

#[test]
fn marker_pick_does_not_move_camera() {
    let mut atlas = TestAtlas::on_page(Page::Nyc);
    atlas.drain_view_requests();
    atlas.pick_nyc("36085002700", false);
    assert!(atlas.drain_view_requests().is_empty());
    atlas.goto(Page::Map);
    assert!(atlas.resource::<SelectedNycTract>().0.is_none());
}
