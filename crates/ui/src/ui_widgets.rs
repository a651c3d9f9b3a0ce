//! Reusable themed widget helpers for the atlas UI.
//!
//! These wrap common egui patterns (cards, buttons, headers, stat rows,
//! badges, legend swatches) with consistent styling from [`crate::theme`].

use bevy_egui::egui;

use tracts::layers::Rgb;

use crate::theme;

// =============================================================================
// Cards
// =============================================================================

/// White rounded card with a light border.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BG_PANEL)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(theme::CARD_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(12))
}

/// Floating panel drawn over the map.
pub fn overlay_frame() -> egui::Frame {
    card_frame().shadow(egui::Shadow {
        offset: [0, 2],
        blur: 8,
        spread: 0,
        color: egui::Color32::from_black_alpha(40),
    })
}

// =============================================================================
// Buttons
// =============================================================================

pub fn themed_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).size(theme::FONT_BODY))
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// A primary (highlighted) button for the main action in a panel.
pub fn themed_button_primary(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_ON_PRIMARY),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// Primary styling when `active`, plain otherwise.
pub fn toggle_button(ui: &mut egui::Ui, text: &str, active: bool) -> egui::Response {
    if active {
        themed_button_primary(ui, text)
    } else {
        themed_button(ui, text)
    }
}

// =============================================================================
// Headers
// =============================================================================

pub fn themed_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_TITLE)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn themed_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn themed_subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SUBHEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

// =============================================================================
// Stat Rows
// =============================================================================

/// Renders as `label:  value` with the label muted.
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    stat_row_colored(ui, label, value, theme::TEXT);
}

pub fn stat_row_colored(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{label}:"))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_BODY)
                .color(color)
                .strong(),
        );
    });
}

// =============================================================================
// Badges, dots and swatches
// =============================================================================

pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, color: egui::Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(color)
                    .strong(),
            );
        });
}

/// Red "Food Desert" or green "Not a Food Desert" pill.
pub fn desert_badge(ui: &mut egui::Ui, is_desert: bool, positive: &str, negative: &str) {
    if is_desert {
        badge(ui, positive, theme::ERROR, theme::TEXT_ON_PRIMARY);
    } else {
        badge(ui, negative, theme::SUCCESS, theme::TEXT_ON_PRIMARY);
    }
}

pub fn status_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}

/// Dot plus label, red when `flagged`.
pub fn flag_row(ui: &mut egui::Ui, flagged: bool, text: &str) {
    ui.horizontal(|ui| {
        status_dot(ui, if flagged { theme::ERROR } else { theme::SUCCESS });
        ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(theme::TEXT));
    });
}

pub fn legend_item(ui: &mut egui::Ui, color: egui::Color32, label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, color);
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT),
        );
    });
}

// =============================================================================
// Section helpers
// =============================================================================

pub fn section_separator(ui: &mut egui::Ui) {
    ui.add_space(theme::ITEM_SPACING);
    ui.separator();
    ui.add_space(theme::ITEM_SPACING);
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

pub fn body(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(theme::TEXT));
}

// =============================================================================
// Conversion helpers
// =============================================================================

pub fn rgb_to_egui(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
