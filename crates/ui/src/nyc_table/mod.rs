//! NYC data page: the searchable, sortable tract table beside the marker
//! map, plus the popup card for the picked tract.
//!
//! - Summary cards over the filtered rows (tracts, deserts, population)
//! - Search box, borough and desert-status filters
//! - Clickable headers that toggle the sort
//! - Highlighted cells above the low-income, low-access and distance thresholds
//! - Row click selects the tract and moves the camera onto its marker

mod cells;
mod systems;
mod types;

pub use cells::{distance_cell, percent_cell, status_cell, summary_cards};
pub use systems::{nyc_table_ui, nyc_tract_popup_ui};
pub use types::NycTableVisible;
