//! NYC census tracts shown as markers and in the searchable table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{NYC_LOW_ACCESS_HIGHLIGHT, NYC_LOW_INCOME_HIGHLIGHT, NYC_DISTANCE_HIGHLIGHT};

/// The five boroughs, in the order the table filter lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    pub const ALL: [Borough; 5] = [
        Self::Manhattan,
        Self::Brooklyn,
        Self::Queens,
        Self::Bronx,
        Self::StatenIsland,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Brooklyn => "Brooklyn",
            Self::Queens => "Queens",
            Self::Bronx => "Bronx",
            Self::StatenIsland => "Staten Island",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NycTract {
    pub id: String,
    pub borough: Borough,
    pub census_tract: String,
    pub low_income_percent: f64,
    pub low_access_percent: f64,
    pub population: u32,
    pub distance_to_grocery: f64,
    pub is_desert: bool,
    /// Marker position as `[lat, lon]`.
    pub coordinates: [f64; 2],
}

impl NycTract {
    pub fn lat(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[1]
    }

    /// "Bronx - Tract 231"
    pub fn title(&self) -> String {
        format!("{} - Tract {}", self.borough.label(), self.census_tract)
    }

    pub fn low_income_flagged(&self) -> bool {
        self.low_income_percent > NYC_LOW_INCOME_HIGHLIGHT
    }

    pub fn low_access_flagged(&self) -> bool {
        self.low_access_percent > NYC_LOW_ACCESS_HIGHLIGHT
    }

    pub fn distance_flagged(&self) -> bool {
        self.distance_to_grocery > NYC_DISTANCE_HIGHLIGHT
    }
}

/// All NYC tracts in fixture order. Marker entities index into this list.
#[derive(Resource, Debug, Clone, Default)]
pub struct NycCatalog {
    pub tracts: Vec<NycTract>,
}

impl NycCatalog {
    pub fn get(&self, id: &str) -> Option<&NycTract> {
        self.tracts.iter().find(|t| t.id == id)
    }

    pub fn desert_count(&self) -> usize {
        self.tracts.iter().filter(|t| t.is_desert).count()
    }
}

/// Tract picked in the NYC table or on a NYC marker.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SelectedNycTract(pub Option<String>);

#[cfg(test)]
pub(crate) fn nyc_tract(id: &str, borough: Borough, population: u32) -> NycTract {
    NycTract {
        id: id.to_string(),
        borough,
        census_tract: id.trim_start_matches('0').to_string(),
        low_income_percent: 30.0,
        low_access_percent: 20.0,
        population,
        distance_to_grocery: 0.8,
        is_desert: false,
        coordinates: [40.7, -73.9],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borough_deserializes_with_space() {
        let b: Borough = serde_json::from_str("\"Staten Island\"").unwrap();
        assert_eq!(b, Borough::StatenIsland);
        assert_eq!(b.label(), "Staten Island");
    }

    #[test]
    fn highlight_thresholds_are_strict() {
        let mut t = nyc_tract("1", Borough::Bronx, 100);
        t.low_income_percent = 40.0;
        t.low_access_percent = 33.0;
        t.distance_to_grocery = 1.0;
        assert!(!t.low_income_flagged());
        assert!(!t.low_access_flagged());
        assert!(!t.distance_flagged());
        t.low_income_percent = 40.1;
        t.distance_to_grocery = 1.1;
        assert!(t.low_income_flagged());
        assert!(t.distance_flagged());
    }

    #[test]
    fn title_and_coordinates() {
        let mut t = nyc_tract("231", Borough::Bronx, 100);
        t.census_tract = "231".to_string();
        t.coordinates = [40.84, -73.89];
        assert_eq!(t.title(), "Bronx - Tract 231");
        assert!((t.lat() - 40.84).abs() < 1e-9);
        assert!((t.lon() + 73.89).abs() < 1e-9);
    }
}
