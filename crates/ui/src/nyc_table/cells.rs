//! Text and colors of table cells and summary cards.

use bevy_egui::egui;

use tracts::dashboard::format_thousands;
use tracts::table::TableSummary;

use crate::theme;

pub fn percent_cell(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn distance_cell(miles: f64) -> String {
    format!("{miles:.1}")
}

/// Status column text and color.
pub fn status_cell(is_desert: bool) -> (&'static str, egui::Color32) {
    if is_desert {
        ("Desert", theme::ERROR)
    } else {
        ("OK", theme::SUCCESS)
    }
}

/// Value color for a highlighted numeric cell.
pub(crate) fn highlight(flagged: bool, color: egui::Color32) -> egui::Color32 {
    if flagged {
        color
    } else {
        theme::TEXT
    }
}

/// `(title, value, color)` for the four cards above the table.
pub fn summary_cards(summary: &TableSummary) -> [(&'static str, String, egui::Color32); 4] {
    [
        ("Census Tracts", summary.rows.to_string(), theme::SECONDARY),
        ("Food Deserts", summary.deserts.to_string(), theme::ERROR),
        (
            "Total Population",
            format_thousands(summary.population),
            theme::PRIMARY,
        ),
        (
            "In Food Deserts",
            format_thousands(summary.desert_population),
            theme::CAUTION,
        ),
    ]
}
