//! Dashboard building blocks: metric cards and the strategy details table.

use bevy_egui::egui;

use tracts::dashboard::{format_compact, format_thousands, RegionSummary, SuccessTier, Trend};

use crate::theme;
use crate::ui_widgets::{badge, caption, card_frame, themed_subheading};

/// "$44,444"
pub fn cost_label(dollars: f64) -> String {
    format!("${}", format_thousands(dollars.max(0.0).round() as u64))
}

/// `(arrow, color)` for the year-over-year change.
pub fn trend_marker(trend: Trend) -> (&'static str, egui::Color32) {
    match trend {
        Trend::Improving => ("⏷", theme::SUCCESS),
        Trend::Worsening => ("⏶", theme::ERROR),
    }
}

/// `(fill, text)` colors of the success-rate badge.
pub fn tier_colors(tier: SuccessTier) -> (egui::Color32, egui::Color32) {
    match tier {
        SuccessTier::Good => (theme::PRIMARY, theme::TEXT_ON_PRIMARY),
        SuccessTier::Fair => (theme::BG_DARK, theme::TEXT_HEADING),
        SuccessTier::Poor => (theme::ERROR, theme::TEXT_ON_PRIMARY),
    }
}

fn metric_card(
    ui: &mut egui::Ui,
    title: &str,
    icon: &str,
    value: &str,
    footer: impl FnOnce(&mut egui::Ui),
) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(icon).color(theme::TEXT_MUTED));
            });
        });
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_HEADING + 4.0)
                .color(theme::TEXT_HEADING)
                .strong(),
        );
        footer(ui);
    });
}

pub fn metric_cards(ui: &mut egui::Ui, region: &RegionSummary) {
    ui.columns(4, |columns| {
        metric_card(
            &mut columns[0],
            "Total Food Desert Tracts",
            "📍",
            &format_thousands(u64::from(region.total_tracts)),
            |ui| {
                let (arrow, color) = trend_marker(region.trend());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{arrow} {}%",
                            region.change_from_last_year.abs()
                        ))
                        .size(theme::FONT_SMALL)
                        .color(color),
                    );
                    caption(ui, "from last year");
                });
            },
        );
        metric_card(
            &mut columns[1],
            "Population Affected",
            "👥",
            &format!("{}%", region.population_affected),
            |ui| {
                caption(
                    ui,
                    &format!(
                        "{} of {} people",
                        format_compact(region.affected_population as f64),
                        format_compact(region.total_population as f64)
                    ),
                );
            },
        );
        metric_card(
            &mut columns[2],
            "Active Interventions",
            "🎯",
            &format_thousands(u64::from(region.total_interventions())),
            |ui| {
                caption(
                    ui,
                    &format!("Across {} strategy types", region.interventions.len()),
                );
            },
        );
        metric_card(
            &mut columns[3],
            "Avg Success Rate",
            "📈",
            &format!("{}%", region.average_success()),
            |ui| caption(ui, "Intervention effectiveness"),
        );
    });
}

pub fn chart_card(ui: &mut egui::Ui, title: &str, description: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        themed_subheading(ui, title);
        caption(ui, description);
        ui.add_space(theme::ITEM_SPACING);
        add_contents(ui);
    });
}

const TABLE_HEADERS: [&str; 5] = [
    "Strategy Type",
    "Count",
    "Total Cost ($M)",
    "Success Rate",
    "Cost per Success",
];

pub fn strategy_table(ui: &mut egui::Ui, region: &RegionSummary) {
    chart_card(
        ui,
        "Intervention Strategy Details",
        "Comprehensive overview of intervention strategies and their performance",
        |ui| {
            egui::Grid::new("strategy_details")
                .num_columns(TABLE_HEADERS.len())
                .striped(true)
                .spacing(egui::vec2(32.0, 8.0))
                .show(ui, |ui| {
                    for header in TABLE_HEADERS {
                        ui.label(egui::RichText::new(header).strong().color(theme::TEXT_HEADING));
                    }
                    ui.end_row();

                    for stat in &region.interventions {
                        ui.label(egui::RichText::new(&stat.kind).strong());
                        ui.label(stat.count.to_string());
                        ui.label(format!("${}M", stat.cost));
                        let (fill, text) = tier_colors(stat.tier());
                        badge(ui, &format!("{}%", stat.success), fill, text);
                        ui.label(cost_label(stat.cost_per_success()));
                        ui.end_row();
                    }
                });
        },
    );
}
