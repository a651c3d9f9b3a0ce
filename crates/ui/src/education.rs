//! "Understanding Food Deserts" guide.
//!
//! The same content is shown two ways: as a closeable window that any page
//! can open through [`EducationGuide`], and as the full Learn page.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::education::{
    EducationGuide, AFFECTED_GROUPS, CRITERIA, DEFINITION, IMPACTS, KEY_STATISTICS, PRINCIPLES,
    STRATEGIES,
};
use tracts::Page;

use crate::theme;
use crate::ui_widgets::{body, caption, card_frame, themed_button_primary, themed_heading, themed_title};

const GUIDE_TITLE: &str = "Understanding Food Deserts";
const EXPLORE_LABEL: &str = "Start Exploring →";

/// Accent per criterion card: low income then low access.
const CRITERIA_COLORS: [egui::Color32; 2] = [theme::ERROR, theme::CAUTION];

const IMPACT_COLORS: [egui::Color32; 3] = [theme::ERROR, theme::SECONDARY, theme::PRIMARY];

const GROUP_COLORS: [egui::Color32; 4] = [
    theme::SECONDARY,
    theme::PRIMARY,
    theme::WARNING,
    theme::ERROR,
];

const PRINCIPLE_COLORS: [egui::Color32; 3] =
    [theme::SECONDARY, theme::PRIMARY, theme::ACCENT_PURPLE];

/// Progress bar fill for a strategy's success rate.
pub fn success_fraction(success: u8) -> f32 {
    f32::from(success.min(100)) / 100.0
}

/// Draws the whole guide. Returns true when "Start Exploring" was pressed.
pub fn guide_contents(ui: &mut egui::Ui) -> bool {
    section_heading(ui, "📍", "What Are Food Deserts?", theme::ERROR);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        body(ui, DEFINITION);
        ui.add_space(theme::ITEM_SPACING);
        ui.columns(CRITERIA.len(), |cols| {
            for ((col, criterion), color) in cols.iter_mut().zip(&CRITERIA).zip(CRITERIA_COLORS) {
                accent_card(col, color, |ui| {
                    ui.label(egui::RichText::new(criterion.title).strong().color(color));
                    caption(ui, criterion.detail);
                });
            }
        });
    });

    section_heading(ui, "⚠", "Why Food Deserts Matter", theme::SECONDARY);
    ui.columns(IMPACTS.len(), |cols| {
        for ((col, area), color) in cols.iter_mut().zip(&IMPACTS).zip(IMPACT_COLORS) {
            card_frame().show(col, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(area.title)
                        .size(theme::FONT_SUBHEADING)
                        .strong()
                        .color(color),
                );
                for point in area.points {
                    caption(ui, &format!("• {point}"));
                }
            });
        }
    });

    section_heading(ui, "👥", "Who Is Most Affected?", theme::ACCENT_PURPLE);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.columns(AFFECTED_GROUPS.len(), |cols| {
            for ((col, (group, note)), color) in
                cols.iter_mut().zip(AFFECTED_GROUPS).zip(GROUP_COLORS)
            {
                col.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(group).strong().color(color));
                    caption(ui, note);
                });
            }
        });
    });

    section_heading(ui, "🎯", "Intervention Strategies", theme::PRIMARY);
    for pair in STRATEGIES.chunks(2) {
        ui.columns(2, |cols| {
            for (col, strategy) in cols.iter_mut().zip(pair) {
                card_frame().show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(strategy.icon.glyph())
                                .size(theme::FONT_HEADING)
                                .color(theme::PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(strategy.title)
                                .size(theme::FONT_SUBHEADING)
                                .strong()
                                .color(theme::TEXT_HEADING),
                        );
                    });
                    caption(ui, strategy.summary);
                    ui.add(
                        egui::ProgressBar::new(success_fraction(strategy.success))
                            .fill(theme::PRIMARY)
                            .text(format!("{}% success", strategy.success)),
                    );
                });
            }
        });
        ui.add_space(theme::ITEM_SPACING);
    }

    section_heading(ui, "📈", "How Interventions Create Change", theme::WARNING);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.columns(PRINCIPLES.len(), |cols| {
            for ((col, (title, text)), color) in
                cols.iter_mut().zip(PRINCIPLES).zip(PRINCIPLE_COLORS)
            {
                col.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(title)
                            .size(theme::FONT_SUBHEADING)
                            .strong()
                            .color(color),
                    );
                    caption(ui, text);
                });
            }
        });
    });

    section_heading(ui, "ℹ", "Key Statistics", theme::SECONDARY);
    ui.columns(KEY_STATISTICS.len(), |cols| {
        for (col, (figure, label)) in cols.iter_mut().zip(KEY_STATISTICS) {
            card_frame().show(col, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(figure)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::SECONDARY),
                    );
                    caption(ui, label);
                });
            });
        }
    });

    ui.add_space(theme::SECTION_SPACING);
    let mut explore = false;
    card_frame().fill(theme::BG_MUTED).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            themed_heading(ui, "Ready to Explore Food Desert Data?");
            body(
                ui,
                "Use our interactive map to discover food desert areas in your community and \
                 learn about effective intervention strategies.",
            );
            ui.add_space(theme::ITEM_SPACING);
            explore = themed_button_primary(ui, EXPLORE_LABEL).clicked();
        });
    });
    explore
}

fn section_heading(ui: &mut egui::Ui, icon: &str, title: &str, color: egui::Color32) {
    ui.add_space(theme::SECTION_SPACING);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(theme::FONT_HEADING).color(color));
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_HEADING),
        );
    });
    ui.add_space(theme::ITEM_SPACING);
}

/// Tinted card with a colored border.
fn accent_card(ui: &mut egui::Ui, color: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.08))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Floating guide window, available on every page.
pub fn education_guide_ui(mut contexts: EguiContexts, mut guide: ResMut<EducationGuide>) {
    if !guide.open {
        return;
    }
    let ctx = contexts.ctx_mut();
    let mut open = true;
    let mut explore = false;

    egui::Window::new(egui::RichText::new(format!("📖 {GUIDE_TITLE}")).strong())
        .id(egui::Id::new("education_guide"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([820.0, 640.0])
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    explore = guide_contents(ui);
                });
        });

    if !open || explore {
        guide.open = false;
    }
}

/// Full-page rendition of the guide.
pub fn learn_page_ui(
    mut contexts: EguiContexts,
    mut next_page: ResMut<NextState<Page>>,
) {
    let ctx = contexts.ctx_mut();
    let mut explore = false;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::BG_DARK).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(960.0);
                    themed_title(ui, GUIDE_TITLE);
                    explore = guide_contents(ui);
                    ui.add_space(theme::SECTION_SPACING);
                });
        });

    if explore {
        next_page.set(Page::Map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_fraction_scales_percent() {
        assert_eq!(success_fraction(0), 0.0);
        assert_eq!(success_fraction(50), 0.5);
        assert_eq!(success_fraction(100), 1.0);
    }

    #[test]
    fn test_success_fraction_clamps_overflow() {
        assert_eq!(success_fraction(250), 1.0);
    }

    #[test]
    fn test_every_section_has_an_accent() {
        assert_eq!(CRITERIA_COLORS.len(), CRITERIA.len());
        assert_eq!(IMPACT_COLORS.len(), IMPACTS.len());
        assert_eq!(GROUP_COLORS.len(), AFFECTED_GROUPS.len());
        assert_eq!(PRINCIPLE_COLORS.len(), PRINCIPLES.len());
    }
}
