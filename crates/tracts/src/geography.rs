//! States and counties offered by the sidebar's geographic filters.

pub struct StateInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// `(slug, display name)` pairs.
    pub counties: &'static [(&'static str, &'static str)],
}

pub const STATES: &[StateInfo] = &[
    StateInfo {
        code: "CA",
        name: "California",
        counties: &[
            ("alameda", "Alameda County"),
            ("san-francisco", "San Francisco County"),
            ("los-angeles", "Los Angeles County"),
        ],
    },
    StateInfo {
        code: "TX",
        name: "Texas",
        counties: &[
            ("harris", "Harris County"),
            ("dallas", "Dallas County"),
            ("travis", "Travis County"),
        ],
    },
    StateInfo {
        code: "NY",
        name: "New York",
        counties: &[
            ("new-york", "New York County"),
            ("kings", "Kings County"),
            ("queens", "Queens County"),
        ],
    },
    StateInfo {
        code: "FL",
        name: "Florida",
        counties: &[
            ("miami-dade", "Miami-Dade County"),
            ("broward", "Broward County"),
            ("orange", "Orange County"),
        ],
    },
];

pub fn state(code: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.code == code)
}

/// Counties selectable once `state_code` is chosen; empty for no/unknown state.
pub fn counties_for(state_code: &str) -> &'static [(&'static str, &'static str)] {
    state(state_code).map_or(&[], |s| s.counties)
}

pub fn county_name(state_code: &str, county: &str) -> Option<&'static str> {
    counties_for(state_code)
        .iter()
        .find(|(slug, _)| *slug == county)
        .map(|(_, name)| *name)
}
