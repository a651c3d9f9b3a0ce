//! Sidebar filter state and the tract predicate it produces.
//!
//! `FilterState` is a plain value: the sidebar builds a new one for every
//! edit and replaces the resource wholesale, so change detection fires once
//! per edit and the predicate stays a pure function.

use bevy::prelude::*;

use crate::tract::{Tract, TractFeature};

/// Sentinel accepted from select widgets meaning "no constraint".
pub const ANY: &str = "all";

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// State code; empty or `"all"` matches every state.
    pub state: String,
    /// County slug; empty or `"all"` matches every county.
    pub county: String,
    /// Substring matched against the tract zip code.
    pub zip_code: String,
    pub low_income: bool,
    pub low_access: bool,
    /// Requires both low income and low access.
    pub both: bool,
}

fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ANY
}

impl FilterState {
    /// Selecting a state always clears the county selection.
    pub fn with_state(&self, state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            county: String::new(),
            ..self.clone()
        }
    }

    pub fn with_county(&self, county: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            ..self.clone()
        }
    }

    pub fn with_zip_code(&self, zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            ..self.clone()
        }
    }

    pub fn with_low_income(&self, low_income: bool) -> Self {
        Self {
            low_income,
            ..self.clone()
        }
    }

    pub fn with_low_access(&self, low_access: bool) -> Self {
        Self {
            low_access,
            ..self.clone()
        }
    }

    pub fn with_both(&self, both: bool) -> Self {
        Self {
            both,
            ..self.clone()
        }
    }

    /// The county selector is only enabled once a concrete state is chosen.
    pub fn county_enabled(&self) -> bool {
        !is_unconstrained(&self.state)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Conjunction of every active constraint.
    pub fn matches(&self, tract: &Tract) -> bool {
        if !is_unconstrained(&self.state) && tract.state != self.state {
            return false;
        }
        if !is_unconstrained(&self.county) && tract.county != self.county {
            return false;
        }
        if !self.zip_code.is_empty() && !tract.zip_code.contains(self.zip_code.as_str()) {
            return false;
        }
        if self.low_income && !tract.is_low_income {
            return false;
        }
        if self.low_access && !tract.is_low_access {
            return false;
        }
        if self.both && !(tract.is_low_income && tract.is_low_access) {
            return false;
        }
        true
    }

    /// Features passing the filter, in their original order.
    pub fn apply<'a>(&self, features: &'a [TractFeature]) -> Vec<&'a TractFeature> {
        features
            .iter()
            .filter(|f| self.matches(&f.properties))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tract::sample_tract;

    fn tract(state: &str, county: &str, zip: &str, li: bool, la: bool) -> Tract {
        Tract {
            state: state.to_string(),
            county: county.to_string(),
            zip_code: zip.to_string(),
            is_low_income: li,
            is_low_access: la,
            is_desert: li && la,
            ..sample_tract()
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let f = FilterState::default();
        assert!(f.is_empty());
        assert!(f.matches(&tract("CA", "alameda", "94601", false, false)));
        assert!(f.matches(&tract("TX", "harris", "77001", true, true)));
    }

    #[test]
    fn all_sentinel_is_unconstrained() {
        let f = FilterState::default().with_state(ANY).with_county(ANY);
        assert!(f.matches(&tract("FL", "broward", "33311", false, false)));
        assert!(!f.county_enabled());
    }

    #[test]
    fn state_change_clears_county() {
        let f = FilterState::default()
            .with_state("CA")
            .with_county("alameda")
            .with_state("TX");
        assert_eq!(f.state, "TX");
        assert!(f.county.is_empty());
        assert!(f.county_enabled());
    }

    #[test]
    fn zip_matches_by_substring() {
        let f = FilterState::default().with_zip_code("946");
        assert!(f.matches(&tract("CA", "alameda", "94601", false, false)));
        assert!(!f.matches(&tract("CA", "san-francisco", "94102", false, false)));
    }

    #[test]
    fn non_numeric_zip_matches_nothing() {
        let f = FilterState::default().with_zip_code("abc");
        assert!(!f.matches(&tract("CA", "alameda", "94601", true, true)));
    }

    #[test]
    fn demographic_toggles_are_conjunctive() {
        let li_only = tract("CA", "alameda", "94601", true, false);
        let la_only = tract("CA", "alameda", "94601", false, true);
        let both = tract("CA", "alameda", "94601", true, true);

        let f = FilterState::default().with_low_income(true);
        assert!(f.matches(&li_only) && !f.matches(&la_only) && f.matches(&both));

        let f = FilterState::default().with_low_income(true).with_low_access(true);
        assert!(!f.matches(&li_only) && !f.matches(&la_only) && f.matches(&both));

        let f = FilterState::default().with_both(true);
        assert!(!f.matches(&li_only) && !f.matches(&la_only) && f.matches(&both));
    }

    #[test]
    fn state_and_county_are_exact() {
        let f = FilterState::default().with_state("CA").with_county("alameda");
        assert!(f.matches(&tract("CA", "alameda", "94601", false, false)));
        assert!(!f.matches(&tract("CA", "alameda-east", "94601", false, false)));
        assert!(!f.matches(&tract("C", "alameda", "94601", false, false)));
    }
}
