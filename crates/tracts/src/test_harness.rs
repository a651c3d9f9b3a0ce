//! # TestAtlas: headless harness for the atlas core
//!
//! Wraps `bevy::app::App` + `TractsPlugin` with a [`RecordingSurface`] in
//! place of the renderer, so page flow, selection and the overlay pipeline
//! can be driven without a window.

use bevy::app::App;
use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::app_state::Page;
use crate::filter::FilterState;
use crate::map_surface::RecordingSurface;
use crate::pipeline::{FilterDraft, MapSurfacePlugin, SearchRequested};
use crate::selection::{NycTractPicked, TractClicked, ViewRequest};
use crate::TractsPlugin;

pub struct TestAtlas {
    app: App,
}

impl TestAtlas {
    /// Fixtures loaded, sitting on the home page.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.add_plugins(TractsPlugin);
        app.add_plugins(MapSurfacePlugin::<RecordingSurface>::default());
        // Startup systems run on the first update.
        app.update();
        Self { app }
    }

    pub fn on_page(page: Page) -> Self {
        let mut atlas = Self::new();
        atlas.goto(page);
        atlas
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn goto(&mut self, page: Page) {
        self.app
            .world_mut()
            .resource_mut::<NextState<Page>>()
            .set(page);
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Fill the sidebar with `filter` and press Search.
    pub fn search(&mut self, filter: FilterState) {
        self.app.world_mut().insert_resource(FilterDraft(filter));
        self.send(SearchRequested);
        self.app.update();
    }

    pub fn click_tract(&mut self, id: &str) {
        self.send(TractClicked { id: id.to_string() });
        self.app.update();
    }

    pub fn pick_nyc(&mut self, id: &str, focus: bool) {
        self.send(NycTractPicked {
            id: id.to_string(),
            focus,
        });
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<'_, T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn page(&self) -> Page {
        *self.app.world().resource::<State<Page>>().get()
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.resource::<RecordingSurface>()
    }

    /// Camera requests emitted since the last drain.
    pub fn drain_view_requests(&mut self) -> Vec<ViewRequest> {
        self.app
            .world_mut()
            .resource_mut::<Events<ViewRequest>>()
            .drain()
            .collect()
    }
}

impl Default for TestAtlas {
    fn default() -> Self {
        Self::new()
    }
}
