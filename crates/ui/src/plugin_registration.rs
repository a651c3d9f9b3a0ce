use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use tracts::Page;

use crate::*;

/// Register all UI resources and systems.
///
/// The nav bar claims the top panel first; every page system runs after it
/// so side and central panels lay out below the bar. The guide window runs
/// last so it stacks above whichever page is shown.
pub(crate) fn register_ui_systems(app: &mut App) {
    // Core egui
    app.add_plugins(EguiPlugin);

    // UI resources
    app.init_resource::<map_sidebar::SidebarOpen>();
    app.init_resource::<nyc_table::NycTableVisible>();
    app.init_resource::<loading_screen::LoadingAnimation>();

    // UI systems
    app.add_systems(Startup, theme::apply_atlas_theme);
    app.add_systems(Update, navigation::nav_bar_ui);
    app.add_systems(
        Update,
        home::home_page_ui
            .after(navigation::nav_bar_ui)
            .run_if(in_state(Page::Home)),
    );
    app.add_systems(
        Update,
        (
            map_sidebar::map_sidebar_ui,
            layer_panel::layer_panel_ui,
            layer_panel::layer_keybinds,
            tract_details::tract_details_ui,
        )
            .chain()
            .after(navigation::nav_bar_ui)
            .run_if(in_state(Page::Map)),
    );
    app.add_systems(
        Update,
        (
            nyc_table::nyc_table_ui,
            layer_panel::nyc_legend_ui,
            nyc_table::nyc_tract_popup_ui,
        )
            .chain()
            .after(navigation::nav_bar_ui)
            .run_if(in_state(Page::Nyc)),
    );
    app.add_systems(
        Update,
        loading_screen::loading_screen_ui
            .after(tract_details::tract_details_ui)
            .after(nyc_table::nyc_tract_popup_ui)
            .run_if(map_page_shown),
    );
    app.add_systems(
        Update,
        dashboard::dashboard_page_ui
            .after(navigation::nav_bar_ui)
            .run_if(in_state(Page::Dashboard)),
    );
    app.add_systems(
        Update,
        education::learn_page_ui
            .after(navigation::nav_bar_ui)
            .run_if(in_state(Page::Learn)),
    );
    app.add_systems(
        Update,
        education::education_guide_ui
            .after(loading_screen::loading_screen_ui)
            .after(home::home_page_ui)
            .after(dashboard::dashboard_page_ui)
            .after(education::learn_page_ui),
    );
}

fn map_page_shown(page: Res<State<Page>>) -> bool {
    page.get().shows_map()
}
