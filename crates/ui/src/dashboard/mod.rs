//! Dashboard page.
//!
//! Displays the precomputed summary of the selected region:
//! - Four metric cards: desert tracts with the yearly trend, population
//!   affected, active interventions, average success rate
//! - Dual-axis line chart of desert tracts and affected share per year
//! - Dual-axis bar chart of intervention counts and success rates
//! - Strategy details table with success tiers and cost per success
//!
//! An unknown region code is logged and replaced by the all-regions summary.

mod charts;
mod panels;
mod ui_system;

pub use charts::{band_index, nearest_index, nice_ceiling};
pub use panels::{cost_label, tier_colors, trend_marker};
pub use ui_system::dashboard_page_ui;
