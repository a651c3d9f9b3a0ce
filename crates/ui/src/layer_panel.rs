//! Map controls in the top-right corner: layer selector, legend, guide
//! button and the "Showing N of M" counter. The NYC page gets its own
//! marker legend in the same spot.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::egui_input_guard::egui_wants_keyboard;
use rendering::surface::BevySurface;
use tracts::education::EducationGuide;
use tracts::layers::{LayerKind, LayerSelection};
use tracts::map_surface::{DESERT_MARKER, OK_MARKER};
use tracts::nyc::NycCatalog;
use tracts::pipeline::RenderedTracts;
use tracts::tract::TractCatalog;

use crate::theme;
use crate::ui_widgets::{caption, legend_item, overlay_frame, rgb_to_egui, themed_button, themed_subheading};

const PANEL_WIDTH: f32 = 230.0;
const MARGIN: f32 = 12.0;

pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} census tracts")
}

fn controls_area(ctx: &egui::Context, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-MARGIN, MARGIN + 48.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                ui.set_width(PANEL_WIDTH);
                add_contents(ui);
            });
        });
}

fn attribution_area(ctx: &egui::Context, surface: &BevySurface) {
    let Some(text) = surface.attribution() else {
        return;
    };
    egui::Area::new(egui::Id::new("base_layer_attribution"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-4.0, -4.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| caption(ui, text));
}

fn guide_button(ui: &mut egui::Ui, guide: &mut EducationGuide) {
    ui.vertical_centered_justified(|ui| {
        if themed_button(ui, "📖 Learn About Food Deserts").clicked() {
            guide.open = true;
        }
    });
}

pub fn layer_panel_ui(
    mut contexts: EguiContexts,
    mut layer: ResMut<LayerSelection>,
    rendered: Res<RenderedTracts>,
    catalog: Res<TractCatalog>,
    surface: Res<BevySurface>,
    mut guide: ResMut<EducationGuide>,
) {
    let ctx = contexts.ctx_mut();
    let mut chosen = layer.kind;

    controls_area(ctx, "layer_panel", |ui| {
        ui.label(
            egui::RichText::new("Select Data Layer:")
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
        egui::ComboBox::from_id_salt("data_layer")
            .width(PANEL_WIDTH)
            .selected_text(chosen.label())
            .show_ui(ui, |ui| {
                for kind in LayerKind::ALL {
                    ui.selectable_value(&mut chosen, kind, kind.label());
                }
            });
        ui.add_space(theme::ITEM_SPACING);

        themed_subheading(ui, "Legend");
        for entry in chosen.config().legend() {
            legend_item(ui, rgb_to_egui(entry.color), &entry.label);
        }
        ui.add_space(theme::ITEM_SPACING);

        guide_button(ui, &mut guide);
        ui.add_space(theme::ITEM_SPACING);
        caption(ui, &showing_label(rendered.len(), catalog.len()));
    });
    attribution_area(ctx, &surface);

    if chosen != layer.kind {
        layer.kind = chosen;
    }
}

/// Tab / Shift+Tab cycle the data layer while no text field has focus.
pub fn layer_keybinds(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut layer: ResMut<LayerSelection>,
) {
    if !keys.just_pressed(KeyCode::Tab) || egui_wants_keyboard(&mut contexts) {
        return;
    }
    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    layer.kind = if shift { layer.kind.prev() } else { layer.kind.next() };
}

pub fn nyc_legend_ui(
    mut contexts: EguiContexts,
    catalog: Res<NycCatalog>,
    surface: Res<BevySurface>,
    mut guide: ResMut<EducationGuide>,
) {
    let ctx = contexts.ctx_mut();
    let deserts = catalog.desert_count();
    let others = catalog.tracts.len() - deserts;

    controls_area(ctx, "nyc_legend", |ui| {
        themed_subheading(ui, "NYC Food Deserts");
        legend_item(
            ui,
            rgb_to_egui(DESERT_MARKER),
            &format!("Food Desert ({deserts} tracts)"),
        );
        legend_item(
            ui,
            rgb_to_egui(OK_MARKER),
            &format!("Not Food Desert ({others} tracts)"),
        );
        ui.add_space(theme::ITEM_SPACING);
        guide_button(ui, &mut guide);
        ui.add_space(theme::ITEM_SPACING);
        caption(
            ui,
            &format!("Showing {} NYC census tracts", catalog.tracts.len()),
        );
    });
    attribution_area(ctx, &surface);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(3, 12), "Showing 3 of 12 census tracts");
        assert_eq!(showing_label(0, 0), "Showing 0 of 0 census tracts");
    }
}
