//! Light palette and type scale shared by every panel.
//!
//! Colors follow the Tailwind-like tones the atlas uses on the web: gray text
//! on white cards, red for food deserts, green for adequate access.

use bevy_egui::{egui, EguiContexts};

// =============================================================================
// Colors
// =============================================================================

pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
pub const BG_MUTED: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const TEXT_ON_PRIMARY: egui::Color32 = egui::Color32::WHITE;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
pub const CAUTION: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
pub const ACCENT_PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);

/// Selected table row.
pub const ROW_SELECTED: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);

// =============================================================================
// Sizes
// =============================================================================

pub const FONT_TITLE: f32 = 32.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_SUBHEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const CARD_CORNER_RADIUS: u8 = 8;
pub const ITEM_SPACING: f32 = 6.0;
pub const SECTION_SPACING: f32 = 16.0;

pub fn apply_atlas_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let inactive = egui::Color32::from_rgb(243, 244, 246);
    let hover = egui::Color32::from_rgb(229, 231, 235);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    style.visuals.window_fill = BG_PANEL;
    style.visuals.panel_fill = BG_PANEL;
    style.visuals.extreme_bg_color = BG_PANEL;
    style.visuals.faint_bg_color = BG_MUTED;
    style.visuals.window_stroke = egui::Stroke::new(1.0, BORDER);

    style.visuals.selection.bg_fill = ROW_SELECTED;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, SECONDARY);

    let window_rounding = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, ITEM_SPACING);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}
