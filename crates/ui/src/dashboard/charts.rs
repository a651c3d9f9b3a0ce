//! Dual-axis charts painted with egui primitives: the yearly trend lines and
//! the per-strategy bars. Both show a tooltip for the point under the cursor.

use bevy_egui::egui;

use tracts::dashboard::{format_compact, format_thousands, InterventionStat, YearPoint};

use crate::theme;
use crate::ui_widgets::legend_item;

pub const TRACTS_COLOR: egui::Color32 = theme::ERROR;
pub const SHARE_COLOR: egui::Color32 = theme::SECONDARY;
pub const COUNT_COLOR: egui::Color32 = theme::SECONDARY;
pub const SUCCESS_COLOR: egui::Color32 = theme::PRIMARY;

const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 40.0;
const MARGIN_TOP: f32 = 12.0;
const LINE_MARGIN_BOTTOM: f32 = 22.0;
/// Room for two-line category labels under the bars.
const BAR_MARGIN_BOTTOM: f32 = 36.0;
const GRID_LINES: usize = 4;
const AXIS_FONT: f32 = 10.0;

/// Rounds `v` up to 1, 2 or 5 times a power of ten; `1.0` for non-positive input.
pub fn nice_ceiling(v: f64) -> f64 {
    if v <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    let scaled = v / magnitude;
    let step = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Index of the evenly spaced point nearest to `x`.
pub fn nearest_index(x: f32, left: f32, width: f32, n: usize) -> Option<usize> {
    match n {
        0 => None,
        1 => Some(0),
        _ => {
            let t = ((x - left) / width).clamp(0.0, 1.0);
            Some((t * (n - 1) as f32).round() as usize)
        }
    }
}

/// Index of the equal-width band containing `x`.
pub fn band_index(x: f32, left: f32, width: f32, n: usize) -> Option<usize> {
    if n == 0 || width <= 0.0 || x < left || x >= left + width {
        return None;
    }
    Some(((((x - left) / width) * n as f32) as usize).min(n - 1))
}

fn plot_rect(rect: egui::Rect, bottom: f32) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(rect.min.x + MARGIN_LEFT, rect.min.y + MARGIN_TOP),
        egui::pos2(rect.max.x - MARGIN_RIGHT, rect.max.y - bottom),
    )
}

fn y_at(plot: egui::Rect, value: f64, max: f64) -> f32 {
    plot.max.y - (value / max) as f32 * plot.height()
}

fn axis_text(painter: &egui::Painter, pos: egui::Pos2, anchor: egui::Align2, text: String) {
    painter.text(
        pos,
        anchor,
        text,
        egui::FontId::proportional(AXIS_FONT),
        theme::TEXT_MUTED,
    );
}

/// Grid lines with the left axis on a compact scale and the right in percent.
fn draw_axes(painter: &egui::Painter, plot: egui::Rect, left_max: f64, right_max: f64) {
    for i in 0..=GRID_LINES {
        let t = i as f64 / GRID_LINES as f64;
        let y = y_at(plot, t, 1.0);
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.5, theme::BORDER),
        );
        axis_text(
            painter,
            egui::pos2(plot.min.x - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format_compact(left_max * t),
        );
        axis_text(
            painter,
            egui::pos2(plot.max.x + 6.0, y),
            egui::Align2::LEFT_CENTER,
            format!("{:.0}%", right_max * t),
        );
    }
}

fn chart_canvas(ui: &mut egui::Ui, height: f32) -> (egui::Rect, egui::Response, egui::Painter) {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, theme::BG_MUTED);
    (rect, response, painter)
}

// =============================================================================
// Trend lines
// =============================================================================

pub fn draw_trend_chart(ui: &mut egui::Ui, points: &[YearPoint], height: f32) {
    let (rect, response, painter) = chart_canvas(ui, height);
    if points.len() < 2 {
        return;
    }
    let plot = plot_rect(rect, LINE_MARGIN_BOTTOM);
    let tracts_max = nice_ceiling(points.iter().map(|p| f64::from(p.tracts)).fold(0.0, f64::max));
    let share_max = nice_ceiling(points.iter().map(|p| p.population).fold(0.0, f64::max));
    draw_axes(&painter, plot, tracts_max, share_max);

    let x_at = |i: usize| plot.min.x + i as f32 / (points.len() - 1) as f32 * plot.width();
    let tracts: Vec<egui::Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| egui::pos2(x_at(i), y_at(plot, f64::from(p.tracts), tracts_max)))
        .collect();
    let shares: Vec<egui::Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| egui::pos2(x_at(i), y_at(plot, p.population, share_max)))
        .collect();

    for (line, color) in [(tracts, TRACTS_COLOR), (shares, SHARE_COLOR)] {
        for p in &line {
            painter.circle_filled(*p, 3.0, color);
        }
        painter.add(egui::Shape::line(line, egui::Stroke::new(2.0, color)));
    }
    for (i, p) in points.iter().enumerate() {
        axis_text(
            &painter,
            egui::pos2(x_at(i), plot.max.y + 6.0),
            egui::Align2::CENTER_TOP,
            p.year.to_string(),
        );
    }

    let Some(index) = response
        .hover_pos()
        .and_then(|pos| nearest_index(pos.x, plot.min.x, plot.width(), points.len()))
    else {
        return;
    };
    let x = x_at(index);
    painter.line_segment(
        [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
        egui::Stroke::new(1.0, theme::TEXT_MUTED),
    );
    let point = &points[index];
    response.on_hover_ui_at_pointer(|ui| {
        ui.strong(point.year.to_string());
        legend_item(
            ui,
            TRACTS_COLOR,
            &format!("Food Desert Tracts: {}", format_thousands(u64::from(point.tracts))),
        );
        legend_item(
            ui,
            SHARE_COLOR,
            &format!("Population Affected (%): {}", point.population),
        );
    });
}

// =============================================================================
// Intervention bars
// =============================================================================

pub fn draw_intervention_chart(ui: &mut egui::Ui, stats: &[InterventionStat], height: f32) {
    let (rect, response, painter) = chart_canvas(ui, height);
    if stats.is_empty() {
        return;
    }
    let plot = plot_rect(rect, BAR_MARGIN_BOTTOM);
    let count_max = nice_ceiling(stats.iter().map(|s| f64::from(s.count)).fold(0.0, f64::max));
    draw_axes(&painter, plot, count_max, 100.0);

    let band = plot.width() / stats.len() as f32;
    let hovered = response
        .hover_pos()
        .and_then(|pos| band_index(pos.x, plot.min.x, plot.width(), stats.len()));
    if let Some(i) = hovered {
        let left = plot.min.x + band * i as f32;
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(left, plot.min.y),
                egui::pos2(left + band, plot.max.y),
            ),
            0.0,
            egui::Color32::from_black_alpha(12),
        );
    }

    let bar_width = (band * 0.32).min(22.0);
    let top_rounded = egui::CornerRadius {
        nw: 2,
        ne: 2,
        sw: 0,
        se: 0,
    };
    for (i, stat) in stats.iter().enumerate() {
        let center = plot.min.x + band * (i as f32 + 0.5);
        let count_top = y_at(plot, f64::from(stat.count), count_max);
        let success_top = y_at(plot, stat.success, 100.0);
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(center - bar_width - 1.0, count_top),
                egui::pos2(center - 1.0, plot.max.y),
            ),
            top_rounded,
            COUNT_COLOR,
        );
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(center + 1.0, success_top),
                egui::pos2(center + bar_width + 1.0, plot.max.y),
            ),
            top_rounded,
            SUCCESS_COLOR,
        );
        axis_text(
            &painter,
            egui::pos2(center, plot.max.y + 4.0),
            egui::Align2::CENTER_TOP,
            stat.kind.replace(' ', "\n"),
        );
    }

    let Some(stat) = hovered.map(|i| &stats[i]) else {
        return;
    };
    response.on_hover_ui_at_pointer(|ui| {
        ui.strong(stat.kind.as_str());
        legend_item(ui, COUNT_COLOR, &format!("Number of Interventions: {}", stat.count));
        legend_item(ui, SUCCESS_COLOR, &format!("Success Rate (%): {}", stat.success));
    });
}
