//! Precomputed per-region summaries and the aggregations the dashboard shows.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u16,
    /// Food-desert tract count that year.
    pub tracts: u32,
    /// Share of population affected, in percent.
    pub population: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionStat {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
    /// Total spend in millions of dollars.
    pub cost: f64,
    /// Success rate in percent.
    pub success: f64,
}

impl InterventionStat {
    /// Dollars spent per successful intervention.
    pub fn cost_per_success(&self) -> f64 {
        cost_per_success(self.cost, self.count, self.success)
    }

    pub fn tier(&self) -> SuccessTier {
        SuccessTier::of(self.success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    /// `"all"` or a two-letter state code.
    pub code: String,
    pub label: String,
    pub total_tracts: u32,
    /// Percent of the population living in food-desert tracts.
    pub population_affected: f64,
    pub total_population: u64,
    pub affected_population: u64,
    /// Percent change in desert tract count from the previous year.
    pub change_from_last_year: f64,
    pub time_series: Vec<YearPoint>,
    pub interventions: Vec<InterventionStat>,
}

impl RegionSummary {
    pub fn total_interventions(&self) -> u32 {
        self.interventions.iter().map(|i| i.count).sum()
    }

    /// Mean success rate rounded to a whole percent; zero with no data.
    pub fn average_success(&self) -> u32 {
        if self.interventions.is_empty() {
            return 0;
        }
        let sum: f64 = self.interventions.iter().map(|i| i.success).sum();
        (sum / self.interventions.len() as f64).round() as u32
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change_from_last_year)
    }
}

/// `cost` in millions, `success` in percent. Zero when nothing succeeded.
pub fn cost_per_success(cost: f64, count: u32, success: f64) -> f64 {
    let successes = f64::from(count) * success / 100.0;
    if successes <= 0.0 {
        return 0.0;
    }
    cost * 1_000_000.0 / successes
}

/// `1234567 -> "1.2M"`, `12747 -> "12.7K"`, `999 -> "999"`.
pub fn format_compact(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{n}")
    }
}

/// `13564 -> "13,564"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessTier {
    Good,
    Fair,
    Poor,
}

impl SuccessTier {
    pub fn of(success: f64) -> Self {
        if success >= 80.0 {
            Self::Good
        } else if success >= 70.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Direction of the year-over-year change. Fewer desert tracts is improving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Worsening,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change < 0.0 {
            Self::Improving
        } else {
            Self::Worsening
        }
    }
}

/// Loaded region summaries, `"all"` first.
#[derive(Resource, Debug, Clone, Default)]
pub struct DashboardData {
    pub regions: Vec<RegionSummary>,
}

impl DashboardData {
    pub fn region(&self, code: &str) -> Result<&RegionSummary, DataError> {
        self.regions
            .iter()
            .find(|r| r.code == code)
            .ok_or_else(|| DataError::UnknownRegion(code.to_string()))
    }
}

/// Region picked in the dashboard selector.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct DashboardRegion(pub String);

impl Default for DashboardRegion {
    fn default() -> Self {
        Self("all".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(kind: &str, count: u32, cost: f64, success: f64) -> InterventionStat {
        InterventionStat {
            kind: kind.to_string(),
            count,
            cost,
            success,
        }
    }

    fn region() -> RegionSummary {
        RegionSummary {
            code: "NY".to_string(),
            label: "New York".to_string(),
            total_tracts: 1789,
            population_affected: 15.3,
            total_population: 6_800_000,
            affected_population: 1_040_400,
            change_from_last_year: -4.2,
            time_series: vec![YearPoint {
                year: 2023,
                tracts: 1789,
                population: 15.3,
            }],
            interventions: vec![
                stat("Mobile Markets", 45, 2.8, 83.0),
                stat("Transit Routes", 28, 8.9, 78.0),
                stat("Delivery Co-ops", 67, 1.8, 74.0),
            ],
        }
    }

    #[test]
    fn compact_formatting() {
        assert_eq!(format_compact(54_200_000.0), "54.2M");
        assert_eq!(format_compact(12_747.0), "12.7K");
        assert_eq!(format_compact(1_000.0), "1.0K");
        assert_eq!(format_compact(999.0), "999");
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(13564), "13,564");
        assert_eq!(format_thousands(1_040_400), "1,040,400");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(0), "0");
    }

    #[test]
    fn totals_and_average() {
        let r = region();
        assert_eq!(r.total_interventions(), 140);
        // (83 + 78 + 74) / 3 = 78.33
        assert_eq!(r.average_success(), 78);
        assert_eq!(r.trend(), Trend::Improving);
    }

    #[test]
    fn average_of_empty_is_zero() {
        let r = RegionSummary {
            interventions: vec![],
            ..region()
        };
        assert_eq!(r.average_success(), 0);
    }

    #[test]
    fn cost_per_success_formula() {
        // 15.2M over 342 * 0.78 successes
        let c = stat("Mobile Markets", 342, 15.2, 78.0).cost_per_success();
        assert!((c - 15_200_000.0 / 266.76).abs() < 1e-6);
        assert_eq!(cost_per_success(1.0, 0, 50.0), 0.0);
    }

    #[test]
    fn success_tiers() {
        assert_eq!(SuccessTier::of(80.0), SuccessTier::Good);
        assert_eq!(SuccessTier::of(79.9), SuccessTier::Fair);
        assert_eq!(SuccessTier::of(70.0), SuccessTier::Fair);
        assert_eq!(SuccessTier::of(69.0), SuccessTier::Poor);
    }

    #[test]
    fn zero_change_is_not_improving() {
        assert_eq!(Trend::of(0.0), Trend::Worsening);
        assert_eq!(Trend::of(-0.1), Trend::Improving);
    }

    #[test]
    fn unknown_region_is_an_error() {
        let data = DashboardData {
            regions: vec![region()],
        };
        assert!(data.region("NY").is_ok());
        assert!(matches!(
            data.region("ZZ"),
            Err(DataError::UnknownRegion(code)) if code == "ZZ"
        ));
    }
}
