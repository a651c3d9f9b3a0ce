//! Filter sidebar on the national map.
//!
//! Edits go to [`FilterDraft`]; nothing reaches the map until "Search &
//! Update Map" sends [`SearchRequested`].

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::filter::{FilterState, ANY};
use tracts::geography::{self, STATES};
use tracts::pipeline::{FilterDraft, SearchRequested};

use crate::theme;
use crate::ui_widgets::{caption, section_separator, themed_button, themed_button_primary, themed_heading};

const SIDEBAR_WIDTH: f32 = 280.0;
const ZIP_MAX_CHARS: usize = 5;

#[derive(Resource)]
pub struct SidebarOpen(pub bool);

impl Default for SidebarOpen {
    fn default() -> Self {
        Self(true)
    }
}

/// Lines of the "Active Filters" summary for `filter`.
pub fn active_filter_lines(filter: &FilterState) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(state) = geography::state(&filter.state) {
        lines.push(format!("State: {}", state.name));
    }
    if let Some(county) = geography::county_name(&filter.state, &filter.county) {
        lines.push(format!("County: {county}"));
    }
    if !filter.zip_code.is_empty() {
        lines.push(format!("Zip Code: {}", filter.zip_code));
    }
    let shown: Vec<&str> = [
        (filter.low_income, "Low Income"),
        (filter.low_access, "Low Access"),
        (filter.both, "Food Deserts"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect();
    if !shown.is_empty() {
        lines.push(format!("Showing: {}", shown.join(", ")));
    }
    if lines.is_empty() {
        lines.push("No filters applied".to_string());
    }
    lines
}

fn state_label(code: &str) -> &'static str {
    geography::state(code).map_or("All States", |s| s.name)
}

fn county_label(filter: &FilterState) -> &'static str {
    if !filter.county_enabled() {
        return "Select state first";
    }
    geography::county_name(&filter.state, &filter.county).unwrap_or("All Counties")
}

pub fn map_sidebar_ui(
    mut contexts: EguiContexts,
    mut open: ResMut<SidebarOpen>,
    mut draft: ResMut<FilterDraft>,
    mut searches: EventWriter<SearchRequested>,
) {
    let ctx = contexts.ctx_mut();

    if !open.0 {
        egui::Area::new(egui::Id::new("sidebar_trigger"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 60.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                if themed_button(ui, "☰ Filters").clicked() {
                    open.0 = true;
                }
            });
        return;
    }

    // Edits build a new value; the resource is only written when it differs.
    let mut edited = draft.0.clone();
    let mut search = false;

    egui::SidePanel::left("map_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(theme::ITEM_SPACING);
            ui.horizontal(|ui| {
                themed_heading(ui, "Map Filters");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("«").on_hover_text("Hide filters").clicked() {
                        open.0 = false;
                    }
                });
            });
            section_separator(ui);

            egui::ScrollArea::vertical().show(ui, |ui| {
                geographic_filters(ui, &mut edited);
                section_separator(ui);
                demographic_filters(ui, &mut edited);
                section_separator(ui);

                ui.vertical_centered_justified(|ui| {
                    if themed_button_primary(ui, "🔍 Search & Update Map").clicked() {
                        search = true;
                    }
                });
                section_separator(ui);

                ui.label(
                    egui::RichText::new("Active Filters")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED)
                        .strong(),
                );
                for line in active_filter_lines(&edited) {
                    caption(ui, &line);
                }
            });
        });

    if edited != draft.0 {
        draft.0 = edited;
    }
    if search {
        searches.send(SearchRequested);
    }
}

fn group_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED)
            .strong(),
    );
}

fn geographic_filters(ui: &mut egui::Ui, filter: &mut FilterState) {
    group_label(ui, "Geographic Filters");

    ui.label("State");
    egui::ComboBox::from_id_salt("filter_state")
        .width(SIDEBAR_WIDTH - 40.0)
        .selected_text(state_label(&filter.state))
        .show_ui(ui, |ui| {
            if ui.selectable_label(!filter.county_enabled(), "All States").clicked() {
                *filter = filter.with_state(ANY);
            }
            for state in STATES {
                if ui
                    .selectable_label(filter.state == state.code, state.name)
                    .clicked()
                {
                    *filter = filter.with_state(state.code);
                }
            }
        });

    ui.label("County");
    ui.add_enabled_ui(filter.county_enabled(), |ui| {
        egui::ComboBox::from_id_salt("filter_county")
            .width(SIDEBAR_WIDTH - 40.0)
            .selected_text(county_label(filter))
            .show_ui(ui, |ui| {
                let any = geography::county_name(&filter.state, &filter.county).is_none();
                if ui.selectable_label(any, "All Counties").clicked() {
                    *filter = filter.with_county(ANY);
                }
                for (slug, name) in geography::counties_for(&filter.state) {
                    if ui.selectable_label(filter.county == *slug, *name).clicked() {
                        *filter = filter.with_county(*slug);
                    }
                }
            });
    });

    ui.label("Zip Code");
    let mut zip = filter.zip_code.clone();
    ui.add(
        egui::TextEdit::singleline(&mut zip)
            .hint_text("Enter zip code")
            .char_limit(ZIP_MAX_CHARS)
            .desired_width(SIDEBAR_WIDTH - 40.0),
    );
    if zip != filter.zip_code {
        *filter = filter.with_zip_code(zip);
    }
}

fn demographic_filters(ui: &mut egui::Ui, filter: &mut FilterState) {
    group_label(ui, "Demographic Filters");

    let mut low_income = filter.low_income;
    if ui.checkbox(&mut low_income, "Low Income Areas").changed() {
        *filter = filter.with_low_income(low_income);
    }
    let mut low_access = filter.low_access;
    if ui
        .checkbox(&mut low_access, "Low Access to Grocery Stores")
        .changed()
    {
        *filter = filter.with_low_access(low_access);
    }
    let mut both = filter.both;
    if ui.checkbox(&mut both, "Both (Food Deserts)").changed() {
        *filter = filter.with_both(both);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_reports_nothing_applied() {
        assert_eq!(active_filter_lines(&FilterState::default()), ["No filters applied"]);
    }

    #[test]
    fn test_summary_names_state_county_zip_and_toggles() {
        let filter = FilterState::default()
            .with_state("CA")
            .with_county("alameda")
            .with_zip_code("946")
            .with_low_income(true)
            .with_both(true);
        assert_eq!(
            active_filter_lines(&filter),
            [
                "State: California",
                "County: Alameda County",
                "Zip Code: 946",
                "Showing: Low Income, Food Deserts",
            ]
        );
    }

    #[test]
    fn test_any_sentinel_is_not_listed() {
        let filter = FilterState::default().with_state(ANY).with_low_access(true);
        assert_eq!(active_filter_lines(&filter), ["Showing: Low Access"]);
    }

    #[test]
    fn test_county_selector_labels() {
        assert_eq!(county_label(&FilterState::default()), "Select state first");
        let filter = FilterState::default().with_state("TX");
        assert_eq!(county_label(&filter), "All Counties");
        assert_eq!(county_label(&filter.with_county("travis")), "Travis County");
        assert_eq!(state_label("TX"), "Texas");
        assert_eq!(state_label(ANY), "All States");
    }

    #[test]
    fn test_sidebar_starts_open() {
        assert!(SidebarOpen::default().0);
    }
}
