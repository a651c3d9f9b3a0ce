use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::dashboard::format_thousands;
use tracts::map_surface::MapLoadState;
use tracts::nyc::{Borough, NycCatalog, NycTract, SelectedNycTract};
use tracts::selection::NycTractPicked;
use tracts::table::{BoroughFilter, DesertFilter, SortField, TableQuery, TableSummary};

use super::cells::{distance_cell, highlight, percent_cell, status_cell, summary_cards};
use super::types::NycTableVisible;
use crate::theme;
use crate::ui_widgets::{
    caption, card_frame, desert_badge, overlay_frame, section_separator, stat_row, status_dot,
    themed_button, themed_heading, themed_subheading,
};

const POPUP_WIDTH: f32 = 300.0;
const MARGIN: f32 = 12.0;

// =============================================================================
// Table panel
// =============================================================================

pub fn nyc_table_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<NycTableVisible>,
    mut query: ResMut<TableQuery>,
    catalog: Res<NycCatalog>,
    selected: Res<SelectedNycTract>,
    mut picks: EventWriter<NycTractPicked>,
) {
    let ctx = contexts.ctx_mut();

    if !visible.0 {
        egui::Area::new(egui::Id::new("show_nyc_table"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(MARGIN, 60.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                if themed_button(ui, "▦ Show Data Table").clicked() {
                    visible.0 = true;
                }
            });
        return;
    }

    let mut edited = query.clone();
    let rows = query.run(&catalog.tracts);
    let summary = TableSummary::of(&rows);
    let mut picked: Option<String> = None;
    let half_width = ctx.screen_rect().width() / 2.0;

    egui::SidePanel::left("nyc_table")
        .resizable(true)
        .default_width(half_width)
        .show(ctx, |ui| {
            ui.add_space(theme::ITEM_SPACING);
            ui.horizontal(|ui| {
                themed_heading(ui, "▦ NYC Food Desert Data");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if themed_button(ui, "Hide Table").clicked() {
                        visible.0 = false;
                    }
                });
            });
            caption(
                ui,
                &format!(
                    "Searchable and sortable data for {} census tracts across NYC's five boroughs",
                    catalog.tracts.len()
                ),
            );
            ui.add_space(theme::ITEM_SPACING);

            summary_row(ui, &summary);
            ui.add_space(theme::ITEM_SPACING);
            controls(ui, &mut edited);
            section_separator(ui);

            if rows.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SECTION_SPACING);
                    caption(ui, "No census tracts match your current filters.");
                });
                return;
            }

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    picked = table_grid(ui, &rows, &mut edited, selected.0.as_deref());
                });
        });

    if edited != *query {
        *query = edited;
    }
    if let Some(id) = picked {
        picks.send(NycTractPicked { id, focus: true });
    }
}

fn summary_row(ui: &mut egui::Ui, summary: &TableSummary) {
    ui.columns(4, |columns| {
        for (ui, (title, value, color)) in columns.iter_mut().zip(summary_cards(summary)) {
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                caption(ui, title);
                ui.label(
                    egui::RichText::new(value)
                        .size(theme::FONT_HEADING)
                        .color(color)
                        .strong(),
                );
            });
        }
    });
}

fn controls(ui: &mut egui::Ui, query: &mut TableQuery) {
    ui.add(
        egui::TextEdit::singleline(&mut query.search)
            .hint_text("🔍 Search by borough, census tract, or ID...")
            .desired_width(f32::INFINITY),
    );
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("nyc_borough")
            .selected_text(query.borough.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut query.borough, BoroughFilter::All, BoroughFilter::All.label());
                for borough in Borough::ALL {
                    let option = BoroughFilter::Only(borough);
                    ui.selectable_value(&mut query.borough, option, option.label());
                }
            });
        egui::ComboBox::from_id_salt("nyc_desert")
            .selected_text(query.desert.label())
            .show_ui(ui, |ui| {
                for option in DesertFilter::ALL {
                    ui.selectable_value(&mut query.desert, option, option.label());
                }
            });
    });
}

fn header_text(query: &TableQuery, field: SortField) -> String {
    if query.sort.field == field {
        format!("{} {}", field.label(), query.sort.direction.arrow())
    } else {
        field.label().to_string()
    }
}

/// Clickable cell text; returns `true` when clicked.
fn cell(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> bool {
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
        .clicked()
}

/// Draws the header and rows; returns the id of a clicked row.
fn table_grid(
    ui: &mut egui::Ui,
    rows: &[&NycTract],
    query: &mut TableQuery,
    selected: Option<&str>,
) -> Option<String> {
    // Grid row 0 is the header.
    let selected_row = selected.and_then(|id| rows.iter().position(|t| t.id == id)).map(|i| i + 1);
    let mut picked = None;

    egui::Grid::new("nyc_table_grid")
        .num_columns(SortField::ALL.len() + 1)
        .striped(true)
        .spacing(egui::vec2(14.0, 6.0))
        .with_row_color(move |row, _style| {
            (Some(row) == selected_row).then_some(theme::ROW_SELECTED)
        })
        .show(ui, |ui| {
            for field in SortField::ALL {
                let text = egui::RichText::new(header_text(query, field))
                    .strong()
                    .color(theme::TEXT_HEADING);
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    query.sort = query.sort.toggled(field);
                }
            }
            ui.label(egui::RichText::new("Status").strong().color(theme::TEXT_HEADING));
            ui.end_row();

            for tract in rows {
                let mut clicked = cell(ui, egui::RichText::new(tract.borough.label()).strong());
                clicked |= cell(ui, tract.census_tract.as_str());
                clicked |= cell(
                    ui,
                    egui::RichText::new(percent_cell(tract.low_income_percent))
                        .color(highlight(tract.low_income_flagged(), theme::ERROR)),
                );
                clicked |= cell(
                    ui,
                    egui::RichText::new(percent_cell(tract.low_access_percent))
                        .color(highlight(tract.low_access_flagged(), theme::CAUTION)),
                );
                clicked |= cell(ui, format_thousands(u64::from(tract.population)));
                clicked |= cell(
                    ui,
                    egui::RichText::new(distance_cell(tract.distance_to_grocery))
                        .color(highlight(tract.distance_flagged(), theme::ERROR)),
                );
                let (status, color) = status_cell(tract.is_desert);
                clicked |= cell(ui, egui::RichText::new(status).color(color).strong());
                ui.end_row();

                if clicked {
                    picked = Some(tract.id.clone());
                }
            }
        });
    picked
}

// =============================================================================
// Picked tract popup
// =============================================================================

pub fn nyc_tract_popup_ui(
    mut contexts: EguiContexts,
    load: Res<MapLoadState>,
    catalog: Res<NycCatalog>,
    selected: Res<SelectedNycTract>,
) {
    if *load != MapLoadState::Ready {
        return;
    }
    let Some(tract) = selected.0.as_deref().and_then(|id| catalog.get(id)) else {
        return;
    };
    let ctx = contexts.ctx_mut();
    // Bottom-left of whatever the table panel leaves for the map.
    let free = ctx.available_rect();

    egui::Area::new(egui::Id::new("nyc_tract_popup"))
        .fixed_pos(egui::pos2(free.min.x + MARGIN, free.max.y - MARGIN))
        .pivot(egui::Align2::LEFT_BOTTOM)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                ui.set_width(POPUP_WIDTH);
                popup_contents(ui, tract);
            });
        });
}

fn popup_contents(ui: &mut egui::Ui, tract: &NycTract) {
    ui.horizontal(|ui| {
        themed_subheading(ui, &tract.title());
        desert_badge(ui, tract.is_desert, "Food Desert", "Not a Food Desert");
    });
    caption(ui, &format!("Census Tract ID: {}", tract.id));
    section_separator(ui);

    ui.strong("USDA Classification");
    for (label, value, flagged) in [
        ("Low Income", tract.low_income_percent, tract.low_income_flagged()),
        ("Low Access", tract.low_access_percent, tract.low_access_flagged()),
    ] {
        ui.horizontal(|ui| {
            status_dot(ui, if flagged { theme::ERROR } else { theme::SUCCESS });
            stat_row(ui, label, &percent_cell(value));
        });
    }
    ui.add_space(theme::ITEM_SPACING);

    ui.strong("Food Access");
    stat_row(
        ui,
        "Distance to grocery",
        &format!("{} miles", tract.distance_to_grocery),
    );
    ui.add_space(theme::ITEM_SPACING);

    ui.strong("Demographics");
    stat_row(
        ui,
        "Population",
        &format_thousands(u64::from(tract.population)),
    );
}
