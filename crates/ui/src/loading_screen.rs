//! Loading overlay shown over a map page until its surface is mounted.
//!
//! Displays a translucent veil with an animated "Loading map..." message so
//! the user knows the map is on its way.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracts::map_surface::MapLoadState;

use crate::theme;

// =============================================================================
// Resources
// =============================================================================

/// Tracks the animated dots state for the loading message.
#[derive(Resource)]
pub struct LoadingAnimation {
    /// Number of dots currently shown (cycles 1 -> 2 -> 3 -> 1 ...).
    pub dots: usize,
    pub timer: Timer,
}

impl Default for LoadingAnimation {
    fn default() -> Self {
        Self {
            dots: 1,
            timer: Timer::from_seconds(0.4, TimerMode::Repeating),
        }
    }
}

impl LoadingAnimation {
    pub fn advance(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.dots = self.dots % 3 + 1;
        }
    }

    pub fn reset(&mut self) {
        self.dots = 1;
        self.timer.reset();
    }

    pub fn text(&self) -> String {
        format!("Loading map{}", ".".repeat(self.dots))
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn loading_screen_ui(
    mut contexts: EguiContexts,
    load: Res<MapLoadState>,
    time: Res<Time>,
    mut animation: ResMut<LoadingAnimation>,
) {
    if *load == MapLoadState::Ready {
        animation.reset();
        return;
    }
    animation.advance(time.delta());

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();

    egui::Area::new(egui::Id::new("loading_overlay"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_white_alpha(200),
            );
            // Allocate the full rect so the veil consumes input.
            ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
        });

    egui::Window::new("loading_screen_window")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(220.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.spinner();
                ui.label(
                    egui::RichText::new(animation.text())
                        .size(theme::FONT_SUBHEADING)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(12.0);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_dots_cycle_one_to_three() {
        let mut animation = LoadingAnimation::default();
        assert_eq!(animation.text(), "Loading map.");
        let mut seen = Vec::new();
        for _ in 0..4 {
            animation.advance(Duration::from_millis(450));
            seen.push(animation.dots);
        }
        assert_eq!(seen, [2, 3, 1, 2]);
    }

    #[test]
    fn test_reset_returns_to_one_dot() {
        let mut animation = LoadingAnimation::default();
        animation.advance(Duration::from_millis(450));
        animation.reset();
        assert_eq!(animation.dots, 1);
        assert_eq!(animation.text(), "Loading map.");
    }
}
