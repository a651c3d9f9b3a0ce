//! Landing page: hero, headline statistics, feature cards and calls to action.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::Page;

use crate::navigation::BRAND;
use crate::theme;
use crate::ui_widgets::{
    body, card_frame, caption, themed_button, themed_button_primary, themed_heading,
    themed_subheading, themed_title,
};

const BADGE: &str = "Mapping Food Access Across America";
const TAGLINE: &str = "Explore interactive maps of food desert areas across the United States. \
    Discover data-driven insights, track intervention strategies, and help build healthier \
    communities with better food access.";

/// `(figure, caption, color)` below the hero.
const HERO_STATS: [(&str, &str, egui::Color32); 3] = [
    ("13.5K+", "Food Desert Tracts", theme::SECONDARY),
    ("23.5%", "Population Affected", theme::PRIMARY),
    ("1.7K+", "Active Interventions", theme::ACCENT_PURPLE),
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    color: egui::Color32,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🗺",
        title: "Interactive Mapping",
        text: "Explore detailed census tract data with zoom, filter, and click functionality. \
               Visualize food desert areas and demographic patterns across the United States.",
        color: theme::SECONDARY,
    },
    Feature {
        icon: "📊",
        title: "Data Analytics",
        text: "Track trends over time, analyze intervention effectiveness, and access \
               comprehensive dashboards with key metrics and performance indicators.",
        color: theme::PRIMARY,
    },
    Feature {
        icon: "🎯",
        title: "Smart Interventions",
        text: "Get tailored intervention recommendations based on local demographics, \
               infrastructure, and community characteristics for maximum impact.",
        color: theme::ACCENT_PURPLE,
    },
];

const IMPACT: [(&str, &str); 2] = [
    ("-2.3%", "Reduction in Food Desert Areas"),
    ("12.7M", "People in Tracked Areas"),
];

const CARD_WIDTH: f32 = 280.0;

/// Buttons on the landing page and the page each one opens.
pub const HERO_ACTIONS: [(&str, Page); 3] = [
    ("Start Exploring", Page::Map),
    ("View Dashboard", Page::Dashboard),
    ("Learn About Food Deserts", Page::Learn),
];

pub fn home_page_ui(mut contexts: EguiContexts, mut next_page: ResMut<NextState<Page>>) {
    let ctx = contexts.ctx_mut();
    let mut target = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::BG_DARK).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        hero(ui, &mut target);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        features(ui);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        impact(ui);
                        ui.add_space(theme::SECTION_SPACING * 2.0);
                        themed_heading(ui, "Ready to Explore Food Access Data?");
                        body(
                            ui,
                            "Start mapping food desert areas in your community and discover \
                             evidence-based solutions for improving food access.",
                        );
                        ui.add_space(theme::ITEM_SPACING);
                        if themed_button_primary(ui, "🗺 Start Exploring Now →").clicked() {
                            target = Some(Page::Map);
                        }
                        ui.add_space(theme::SECTION_SPACING);
                    });
                });
        });

    if let Some(page) = target {
        next_page.set(page);
    }
}

fn hero(ui: &mut egui::Ui, target: &mut Option<Page>) {
    ui.add_space(theme::SECTION_SPACING);
    caption(ui, BADGE);
    themed_title(ui, BRAND);
    ui.add_space(theme::ITEM_SPACING);
    ui.set_max_width(720.0);
    body(ui, TAGLINE);
    ui.add_space(theme::SECTION_SPACING);

    ui.horizontal(|ui| {
        centered_row(ui, 3.0 * 200.0);
        for (i, (label, page)) in HERO_ACTIONS.iter().enumerate() {
            let clicked = if i == 0 {
                themed_button_primary(ui, label).clicked()
            } else {
                themed_button(ui, label).clicked()
            };
            if clicked {
                *target = Some(*page);
            }
        }
    });
    ui.add_space(theme::SECTION_SPACING);

    ui.horizontal(|ui| {
        centered_row(ui, 3.0 * 180.0);
        for (figure, label, color) in HERO_STATS {
            ui.vertical(|ui| {
                ui.set_width(170.0);
                ui.label(
                    egui::RichText::new(figure)
                        .size(theme::FONT_TITLE)
                        .color(color)
                        .strong(),
                );
                caption(ui, label);
            });
        }
    });
}

fn features(ui: &mut egui::Ui) {
    themed_heading(ui, "Comprehensive Food Access Analysis");
    body(
        ui,
        "Our platform combines census data, USDA classifications, and intervention tracking to \
         provide actionable insights for policymakers and community leaders.",
    );
    ui.add_space(theme::SECTION_SPACING);
    ui.horizontal(|ui| {
        centered_row(ui, 3.0 * (CARD_WIDTH + 40.0));
        for feature in &FEATURES {
            card_frame().show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(feature.icon)
                            .size(theme::FONT_TITLE)
                            .color(feature.color),
                    );
                    themed_subheading(ui, feature.title);
                    body(ui, feature.text);
                });
            });
        }
    });
}

fn impact(ui: &mut egui::Ui) {
    themed_heading(ui, "Making a Real Impact");
    body(
        ui,
        "Our data-driven approach helps communities identify the most effective strategies for \
         improving food access and building healthier neighborhoods.",
    );
    ui.add_space(theme::SECTION_SPACING);
    ui.horizontal(|ui| {
        centered_row(ui, 2.0 * (CARD_WIDTH + 40.0));
        for (figure, label) in IMPACT {
            card_frame().fill(theme::BG_MUTED).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(figure)
                            .size(theme::FONT_TITLE)
                            .color(theme::SECONDARY)
                            .strong(),
                    );
                    caption(ui, label);
                });
            });
        }
    });
}

/// Left padding that centers a row of roughly `content_width`.
fn centered_row(ui: &mut egui::Ui, content_width: f32) {
    let pad = ((ui.available_width() - content_width) / 2.0).max(0.0);
    ui.add_space(pad);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_actions_open_distinct_pages() {
        let pages: Vec<Page> = HERO_ACTIONS.iter().map(|(_, p)| *p).collect();
        assert_eq!(pages, [Page::Map, Page::Dashboard, Page::Learn]);
    }

    #[test]
    fn test_hero_actions_never_return_home() {
        assert!(HERO_ACTIONS.iter().all(|(_, p)| *p != Page::Home));
    }
}
