//! Embedded sample datasets and their loaders.
//!
//! The JSON files are compiled into the binary with `include_str!`, so the
//! app works the same natively and in the browser. Parsing failures are
//! logged and leave the corresponding catalog empty.

use bevy::prelude::*;

use crate::dashboard::{DashboardData, RegionSummary};
use crate::error::DataError;
use crate::nyc::{NycCatalog, NycTract};
use crate::tract::{FeatureCollection, TractCatalog, TractFeature};

const US_SAMPLE_TRACTS: &str = include_str!("../data/us_sample_tracts.json");
const NYC_TRACTS: &str = include_str!("../data/nyc_tracts.json");
const DASHBOARD_REGIONS: &str = include_str!("../data/dashboard_regions.json");

pub fn parse_tract_collection(json: &str) -> Result<Vec<TractFeature>, DataError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    if collection.features.is_empty() {
        return Err(DataError::EmptyCollection("us_sample_tracts"));
    }
    for feature in &collection.features {
        feature.validate()?;
    }
    Ok(collection.features)
}

pub fn parse_nyc_tracts(json: &str) -> Result<Vec<NycTract>, DataError> {
    let tracts: Vec<NycTract> = serde_json::from_str(json)?;
    if tracts.is_empty() {
        return Err(DataError::EmptyCollection("nyc_tracts"));
    }
    Ok(tracts)
}

pub fn parse_dashboard_regions(json: &str) -> Result<Vec<RegionSummary>, DataError> {
    let regions: Vec<RegionSummary> = serde_json::from_str(json)?;
    if regions.is_empty() {
        return Err(DataError::EmptyCollection("dashboard_regions"));
    }
    Ok(regions)
}

/// Ids of tracts whose desert flag disagrees with income && access.
pub fn inconsistent_tracts(features: &[TractFeature]) -> Vec<&str> {
    features
        .iter()
        .filter(|f| !f.properties.classification_consistent())
        .map(TractFeature::id)
        .collect()
}

pub fn sample_tracts() -> Result<Vec<TractFeature>, DataError> {
    parse_tract_collection(US_SAMPLE_TRACTS)
}

pub fn nyc_tracts() -> Result<Vec<NycTract>, DataError> {
    parse_nyc_tracts(NYC_TRACTS)
}

pub fn dashboard_regions() -> Result<Vec<RegionSummary>, DataError> {
    parse_dashboard_regions(DASHBOARD_REGIONS)
}

/// Startup system: parse every fixture into its resource.
pub fn load_fixtures(mut commands: Commands) {
    let features = sample_tracts().unwrap_or_else(|e| {
        error!("Failed to load sample tracts: {e}");
        Vec::new()
    });
    for id in inconsistent_tracts(&features) {
        warn!("Tract {id}: isDesert disagrees with isLowIncome && isLowAccess; keeping authored flag");
    }
    let tracts = nyc_tracts().unwrap_or_else(|e| {
        error!("Failed to load NYC tracts: {e}");
        Vec::new()
    });
    let regions = dashboard_regions().unwrap_or_else(|e| {
        error!("Failed to load dashboard regions: {e}");
        Vec::new()
    });
    info!(
        "Loaded {} sample tracts, {} NYC tracts, {} dashboard regions",
        features.len(),
        tracts.len(),
        regions.len()
    );
    commands.insert_resource(TractCatalog { features });
    commands.insert_resource(NycCatalog { tracts });
    commands.insert_resource(DashboardData { regions });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sample_tracts_parse_and_are_consistent() {
        let features = sample_tracts().unwrap();
        assert_eq!(features.len(), 13);
        assert!(inconsistent_tracts(&features).is_empty());
    }

    #[test]
    fn embedded_nyc_tracts_cover_every_borough() {
        let tracts = nyc_tracts().unwrap();
        assert_eq!(tracts.len(), 20);
        for borough in crate::nyc::Borough::ALL {
            assert!(tracts.iter().any(|t| t.borough == borough), "{borough:?}");
        }
    }

    #[test]
    fn embedded_regions_start_with_all() {
        let regions = dashboard_regions().unwrap();
        let codes: Vec<&str> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["all", "CA", "TX", "NY", "FL"]);
        assert_eq!(regions[0].total_interventions(), 2903);
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = parse_tract_collection(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyCollection("us_sample_tracts")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_nyc_tracts("[{"), Err(DataError::Parse(_))));
        assert!(matches!(
            parse_dashboard_regions("{}"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn inconsistent_flag_is_reported_not_corrected() {
        let mut features = sample_tracts().unwrap();
        features[1].properties.is_desert = true;
        let id = features[1].id().to_string();
        assert_eq!(inconsistent_tracts(&features), [id.as_str()]);
        assert!(features[1].properties.is_desert);
    }
}
