//! Bottom-left card for the selected tract, and the intervention cards that
//! replace it while the panel is open.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::dashboard::format_thousands;
use tracts::map_surface::MapLoadState;
use tracts::recommendations::{card_view, CardView, Dismissals, InterventionStrategy, Priority};
use tracts::selection::{InterventionPanel, SelectedTract};
use tracts::tract::{Tract, TractCatalog};

use crate::theme;
use crate::ui_widgets::{
    badge, body, caption, desert_badge, flag_row, overlay_frame, section_separator, stat_row,
    themed_button, themed_button_primary, themed_subheading,
};

const DETAIL_WIDTH: f32 = 320.0;
const CARDS_WIDTH: f32 = 380.0;
const CARDS_MAX_HEIGHT: f32 = 460.0;
const MARGIN: f32 = 12.0;

/// "Alameda County, California • Zip: 94601"
pub fn location_line(tract: &Tract) -> String {
    format!("{} • Zip: {}", tract.place_label(), tract.zip_code)
}

/// `(fill, text)` colors of a priority badge.
pub fn priority_colors(priority: Priority) -> (egui::Color32, egui::Color32) {
    match priority {
        Priority::High => (egui::Color32::from_rgb(254, 226, 226), theme::ERROR),
        Priority::Medium => (egui::Color32::from_rgb(254, 249, 195), egui::Color32::from_rgb(161, 98, 7)),
        Priority::Low => (egui::Color32::from_rgb(220, 252, 231), egui::Color32::from_rgb(21, 128, 61)),
    }
}

fn bottom_left_area(ctx: &egui::Context, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(MARGIN, -MARGIN))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            overlay_frame().show(ui, add_contents);
        });
}

pub fn tract_details_ui(
    mut contexts: EguiContexts,
    load: Res<MapLoadState>,
    selected: Res<SelectedTract>,
    catalog: Res<TractCatalog>,
    mut panel: ResMut<InterventionPanel>,
    mut dismissals: ResMut<Dismissals>,
) {
    if *load != MapLoadState::Ready {
        return;
    }
    let Some(tract) = selected
        .0
        .as_deref()
        .and_then(|id| catalog.get(id))
        .map(|f| &f.properties)
    else {
        return;
    };
    let ctx = contexts.ctx_mut();

    let view = card_view(Some(tract), &dismissals);
    if panel.open && view != CardView::Hidden {
        let mut action = None;
        bottom_left_area(ctx, "intervention_cards", |ui| {
            ui.set_width(CARDS_WIDTH);
            action = intervention_cards(ui, tract, &view);
        });
        match action {
            Some(CardAction::Dismiss(id)) => {
                *dismissals = dismissals.dismiss(id);
                debug!("Dismissed strategy {id} ({} hidden)", dismissals.len());
            }
            Some(CardAction::ShowAll) => *dismissals = dismissals.reset(),
            Some(CardAction::CloseAll) => panel.open = false,
            None => {}
        }
        return;
    }

    let mut open_panel = false;
    bottom_left_area(ctx, "tract_details", |ui| {
        ui.set_width(DETAIL_WIDTH);
        open_panel = detail_card(ui, tract);
    });
    if open_panel {
        panel.open = true;
    }
}

/// Returns `true` when "View Intervention Strategies" was pressed.
fn detail_card(ui: &mut egui::Ui, tract: &Tract) -> bool {
    ui.horizontal(|ui| {
        themed_subheading(ui, &format!("Census Tract {}", tract.id));
        desert_badge(ui, tract.is_desert, "Food Desert", "Not a Food Desert");
    });
    caption(ui, &location_line(tract));
    section_separator(ui);

    ui.strong("Classification");
    flag_row(
        ui,
        tract.is_low_income,
        if tract.is_low_income { "Low Income Area" } else { "Not Low Income" },
    );
    flag_row(
        ui,
        tract.is_low_access,
        if tract.is_low_access { "Low Access to Grocery" } else { "Good Grocery Access" },
    );
    ui.add_space(theme::ITEM_SPACING);

    ui.strong("Food Access");
    stat_row(
        ui,
        "Distance to grocery",
        &format!("{} miles", tract.distance_to_grocery),
    );
    ui.add_space(theme::ITEM_SPACING);

    ui.strong("Economic Indicators");
    stat_row(
        ui,
        "Median income",
        &format!("${}", format_thousands(tract.median_income.round() as u64)),
    );
    stat_row(ui, "Poverty rate", &format!("{}%", tract.poverty_rate));
    stat_row(ui, "Unemployment", &format!("{}%", tract.unemployment_rate));
    ui.add_space(theme::ITEM_SPACING);

    ui.strong("Demographics");
    stat_row(
        ui,
        "Population density",
        &format!(
            "{}/sq mi",
            format_thousands(tract.population_density.round() as u64)
        ),
    );
    stat_row(ui, "Bachelor's degree", &format!("{}%", tract.education_bachelor));
    stat_row(ui, "Vehicle access", &format!("{}%", tract.vehicle_access));

    if !tract.is_desert {
        return false;
    }
    section_separator(ui);
    let mut clicked = false;
    ui.vertical_centered_justified(|ui| {
        clicked = themed_button_primary(ui, "🎯 View Intervention Strategies").clicked();
    });
    clicked
}

enum CardAction {
    Dismiss(&'static str),
    ShowAll,
    CloseAll,
}

fn intervention_cards(ui: &mut egui::Ui, tract: &Tract, view: &CardView) -> Option<CardAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            themed_subheading(
                ui,
                &format!("Intervention Strategies for Census Tract {}", tract.id),
            );
            caption(ui, &tract.place_label());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            if themed_button(ui, "Close All").clicked() {
                action = Some(CardAction::CloseAll);
            }
        });
    });
    section_separator(ui);

    match view {
        CardView::Cards(strategies) => {
            egui::ScrollArea::vertical()
                .max_height(CARDS_MAX_HEIGHT)
                .show(ui, |ui| {
                    for strategy in strategies {
                        if strategy_card(ui, strategy) {
                            action = Some(CardAction::Dismiss(strategy.id));
                        }
                        ui.add_space(theme::ITEM_SPACING);
                    }
                });
        }
        CardView::AllDismissed => {
            ui.vertical_centered(|ui| {
                body(ui, "All intervention cards dismissed");
                if themed_button_primary(ui, "Show All Interventions").clicked() {
                    action = Some(CardAction::ShowAll);
                }
            });
        }
        CardView::NoneIdentified => {
            caption(ui, "No specific intervention strategies identified for this area.");
        }
        CardView::Hidden => {}
    }
    action
}

/// Returns `true` when the dismiss button was pressed.
fn strategy_card(ui: &mut egui::Ui, strategy: &InterventionStrategy) -> bool {
    let mut dismissed = false;
    egui::Frame::new()
        .fill(theme::BG_MUTED)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(strategy.icon.glyph()).size(theme::FONT_HEADING));
                ui.vertical(|ui| {
                    ui.strong(strategy.title);
                    let (fill, text) = priority_colors(strategy.priority);
                    badge(ui, &format!("{} priority", strategy.priority.label()), fill, text);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    dismissed = ui
                        .small_button("✕")
                        .on_hover_text("Dismiss")
                        .clicked();
                });
            });
            body(ui, strategy.description);
            ui.horizontal(|ui| {
                caption(ui, &format!("💲 {}", strategy.estimated_cost));
                caption(ui, &format!("⏱ {}", strategy.timeframe));
            });
        });
    dismissed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tract() -> Tract {
        Tract {
            id: "06001400100".to_string(),
            state: "CA".to_string(),
            county: "alameda".to_string(),
            zip_code: "94601".to_string(),
            is_desert: true,
            is_low_income: true,
            is_low_access: true,
            distance_to_grocery: 2.3,
            median_income: 35000.0,
            population_density: 4500.0,
            poverty_rate: 28.5,
            unemployment_rate: 12.3,
            education_bachelor: 18.2,
            vehicle_access: 65.4,
            county_name: "Alameda County".to_string(),
            state_name: "California".to_string(),
        }
    }

    #[test]
    fn test_location_line() {
        assert_eq!(
            location_line(&tract()),
            "Alameda County, California • Zip: 94601"
        );
    }

    #[test]
    fn test_priority_colors_differ_per_tier() {
        let high = priority_colors(Priority::High);
        let medium = priority_colors(Priority::Medium);
        let low = priority_colors(Priority::Low);
        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert_eq!(high.1, theme::ERROR);
    }

    #[test]
    fn test_desert_tract_offers_cards() {
        let view = card_view(Some(&tract()), &Dismissals::default());
        assert!(matches!(view, CardView::Cards(ref cards) if !cards.is_empty()));
    }
}
