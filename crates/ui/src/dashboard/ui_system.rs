//! Dashboard page system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::dashboard::{DashboardData, DashboardRegion};

use super::charts::{
    draw_intervention_chart, draw_trend_chart, COUNT_COLOR, SHARE_COLOR, SUCCESS_COLOR,
    TRACTS_COLOR,
};
use super::panels::{chart_card, metric_cards, strategy_table};
use crate::theme;
use crate::ui_widgets::{body, caption, legend_item, themed_title};

const CHART_HEIGHT: f32 = 300.0;
const DATA_UPDATED: &str = "Updated: December 2023";

pub fn dashboard_page_ui(
    mut contexts: EguiContexts,
    data: Res<DashboardData>,
    mut region: ResMut<DashboardRegion>,
) {
    let ctx = contexts.ctx_mut();
    let mut chosen = region.0.clone();

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::BG_DARK).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            themed_title(ui, "Food Desert Dashboard");
                            body(ui, "Monitor food access trends and intervention effectiveness");
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            caption(ui, &format!("📅 {DATA_UPDATED}"));
                        });
                    });
                    ui.add_space(theme::SECTION_SPACING);

                    ui.horizontal(|ui| {
                        ui.strong("Filter by Region:");
                        let selected_label = data
                            .region(&chosen)
                            .map_or("Select region", |r| r.label.as_str());
                        egui::ComboBox::from_id_salt("dashboard_region")
                            .width(200.0)
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for r in &data.regions {
                                    ui.selectable_value(&mut chosen, r.code.clone(), r.label.as_str());
                                }
                            });
                    });
                    ui.add_space(theme::SECTION_SPACING);

                    let summary = match data.region(&region.0) {
                        Ok(summary) => summary,
                        Err(err) => {
                            caption(ui, "No dashboard data available.");
                            if region.0 != DashboardRegion::default().0 {
                                warn!("{err}; falling back to all regions");
                                chosen = DashboardRegion::default().0;
                            }
                            return;
                        }
                    };

                    metric_cards(ui, summary);
                    ui.add_space(theme::SECTION_SPACING);

                    ui.columns(2, |columns| {
                        chart_card(
                            &mut columns[0],
                            "Food Desert Trends Over Time",
                            "Changes in food desert tracts and affected population",
                            |ui| {
                                draw_trend_chart(ui, &summary.time_series, CHART_HEIGHT);
                                ui.horizontal(|ui| {
                                    legend_item(ui, TRACTS_COLOR, "Food Desert Tracts");
                                    legend_item(ui, SHARE_COLOR, "Population Affected (%)");
                                });
                            },
                        );
                        chart_card(
                            &mut columns[1],
                            "Interventions by Type",
                            "Number of active interventions and their success rates",
                            |ui| {
                                draw_intervention_chart(ui, &summary.interventions, CHART_HEIGHT);
                                ui.horizontal(|ui| {
                                    legend_item(ui, COUNT_COLOR, "Number of Interventions");
                                    legend_item(ui, SUCCESS_COLOR, "Success Rate (%)");
                                });
                            },
                        );
                    });
                    ui.add_space(theme::SECTION_SPACING);

                    strategy_table(ui, summary);
                });
        });

    if chosen != region.0 {
        info!("Dashboard region: {chosen}");
        region.0 = chosen;
    }
}
