//! Census tract records for the national sample map.
//!
//! Tracts are deserialized from a GeoJSON-shaped `FeatureCollection`: the
//! socioeconomic attributes live in `properties` and the boundary ring in
//! `geometry`. Records are immutable once loaded.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One census tract and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tract {
    pub id: String,
    /// Two-letter state code, e.g. `"CA"`.
    pub state: String,
    /// County slug, e.g. `"san-francisco"`.
    pub county: String,
    pub zip_code: String,
    pub is_desert: bool,
    pub is_low_income: bool,
    pub is_low_access: bool,
    /// Miles to the nearest full-service grocery store.
    pub distance_to_grocery: f64,
    pub median_income: f64,
    /// Residents per square mile.
    pub population_density: f64,
    pub poverty_rate: f64,
    pub unemployment_rate: f64,
    /// Share of adults holding a bachelor's degree, in percent.
    pub education_bachelor: f64,
    /// Share of households with access to a vehicle, in percent.
    pub vehicle_access: f64,
    #[serde(rename = "county_name")]
    pub county_name: String,
    #[serde(rename = "state_name")]
    pub state_name: String,
}

impl Tract {
    /// `true` when the authored desert flag agrees with the two criteria it
    /// is supposed to summarize.
    pub fn classification_consistent(&self) -> bool {
        self.is_desert == (self.is_low_income && self.is_low_access)
    }

    /// "Alameda County, California"
    pub fn place_label(&self) -> String {
        format!("{}, {}", self.county_name, self.state_name)
    }
}

/// GeoJSON polygon geometry. Only the outer ring is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Rings of `[lon, lat]` positions; ring 0 is the outer boundary.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Geometry {
    /// Outer ring as `[lon, lat]` pairs without the closing duplicate vertex.
    pub fn outer_ring(&self) -> &[[f64; 2]] {
        let Some(ring) = self.coordinates.first() else {
            return &[];
        };
        match (ring.first(), ring.last()) {
            (Some(a), Some(b)) if ring.len() > 1 && a == b => &ring[..ring.len() - 1],
            _ => ring,
        }
    }
}

/// A tract together with its boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractFeature {
    pub properties: Tract,
    pub geometry: Geometry,
}

impl TractFeature {
    pub fn id(&self) -> &str {
        &self.properties.id
    }

    /// Rejects polygons that cannot be drawn or hit-tested.
    pub fn validate(&self) -> Result<(), DataError> {
        let vertices = self.geometry.outer_ring().len();
        if vertices < 3 {
            return Err(DataError::InvalidGeometry {
                id: self.properties.id.clone(),
                vertices,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<TractFeature>,
}

/// All tracts of the national sample, in fixture order.
#[derive(Resource, Debug, Clone, Default)]
pub struct TractCatalog {
    pub features: Vec<TractFeature>,
}

impl TractCatalog {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TractFeature> {
        self.features.iter().find(|f| f.id() == id)
    }
}

#[cfg(test)]
pub(crate) fn sample_tract() -> Tract {
    Tract {
        id: "00000000001".to_string(),
        state: "CA".to_string(),
        county: "alameda".to_string(),
        zip_code: "94601".to_string(),
        is_desert: true,
        is_low_income: true,
        is_low_access: true,
        distance_to_grocery: 3.0,
        median_income: 30000.0,
        population_density: 5000.0,
        poverty_rate: 30.0,
        unemployment_rate: 12.0,
        education_bachelor: 10.0,
        vehicle_access: 50.0,
        county_name: "Alameda County".to_string(),
        state_name: "California".to_string(),
    }
}
