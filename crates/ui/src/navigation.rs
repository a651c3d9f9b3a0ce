//! Top navigation bar: brand on the left, one button per page.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::Page;

use crate::theme;
use crate::ui_widgets::toggle_button;

pub const BRAND: &str = "Food Desert Navigator";

pub fn nav_bar_ui(
    mut contexts: EguiContexts,
    page: Res<State<Page>>,
    mut next_page: ResMut<NextState<Page>>,
) {
    let ctx = contexts.ctx_mut();
    let current = *page.get();

    egui::TopBottomPanel::top("nav_bar")
        .frame(
            egui::Frame::new()
                .fill(theme::BG_PANEL)
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("🍎 {BRAND}"))
                        .size(theme::FONT_HEADING)
                        .color(theme::PRIMARY)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for target in Page::ALL.into_iter().rev() {
                        if toggle_button(ui, target.label(), target == current).clicked()
                            && target != current
                        {
                            next_page.set(target);
                        }
                    }
                });
            });
        });
}
