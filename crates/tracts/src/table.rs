//! Client-side search, filter and sort over the NYC tract list.

use std::cmp::Ordering;

use bevy::prelude::*;

use crate::nyc::{Borough, NycTract};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoroughFilter {
    #[default]
    All,
    Only(Borough),
}

impl BoroughFilter {
    pub fn matches(self, borough: Borough) -> bool {
        match self {
            Self::All => true,
            Self::Only(b) => b == borough,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Boroughs",
            Self::Only(b) => b.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DesertFilter {
    #[default]
    All,
    Desert,
    NotDesert,
}

impl DesertFilter {
    pub const ALL: [DesertFilter; 3] = [Self::All, Self::Desert, Self::NotDesert];

    pub fn matches(self, is_desert: bool) -> bool {
        match self {
            Self::All => true,
            Self::Desert => is_desert,
            Self::NotDesert => !is_desert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Areas",
            Self::Desert => "Food Deserts Only",
            Self::NotDesert => "Non-Deserts Only",
        }
    }
}

/// Sortable table columns, in header order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Borough,
    CensusTract,
    LowIncomePercent,
    LowAccessPercent,
    Population,
    DistanceToGrocery,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        Self::Borough,
        Self::CensusTract,
        Self::LowIncomePercent,
        Self::LowAccessPercent,
        Self::Population,
        Self::DistanceToGrocery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Borough => "Borough",
            Self::CensusTract => "Census Tract",
            Self::LowIncomePercent => "% Low-Income",
            Self::LowAccessPercent => "% Low Access",
            Self::Population => "Population",
            Self::DistanceToGrocery => "Distance (mi)",
        }
    }

    /// Text columns compare case-insensitively, numeric columns by value.
    fn compare(self, a: &NycTract, b: &NycTract) -> Ordering {
        match self {
            Self::Borough => cmp_text(a.borough.label(), b.borough.label()),
            Self::CensusTract => cmp_text(&a.census_tract, &b.census_tract),
            Self::LowIncomePercent => a.low_income_percent.total_cmp(&b.low_income_percent),
            Self::LowAccessPercent => a.low_access_percent.total_cmp(&b.low_access_percent),
            Self::Population => a.population.cmp(&b.population),
            Self::DistanceToGrocery => a.distance_to_grocery.total_cmp(&b.distance_to_grocery),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "⏶",
            Self::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl TableSort {
    /// Header click: flip direction on the active column, otherwise switch
    /// to `field` ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Current table controls. Replaced wholesale by the table UI.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub borough: BoroughFilter,
    pub desert: DesertFilter,
    pub sort: TableSort,
}

impl TableQuery {
    fn matches_search(&self, tract: &NycTract) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || tract.borough.label().to_lowercase().contains(&needle)
            || tract.census_tract.to_lowercase().contains(&needle)
            || tract.id.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, tract: &NycTract) -> bool {
        self.matches_search(tract)
            && self.borough.matches(tract.borough)
            && self.desert.matches(tract.is_desert)
    }

    /// Matching rows in sort order. Ties keep their input order in either
    /// direction.
    pub fn run<'a>(&self, tracts: &'a [NycTract]) -> Vec<&'a NycTract> {
        let mut rows: Vec<&NycTract> = tracts.iter().filter(|t| self.matches(t)).collect();
        let TableSort { field, direction } = self.sort;
        rows.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        rows
    }
}

/// Aggregates shown above the table for the filtered rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub rows: usize,
    pub deserts: usize,
    pub population: u64,
    pub desert_population: u64,
}

impl TableSummary {
    pub fn of(rows: &[&NycTract]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, t| {
            acc.rows += 1;
            acc.population += u64::from(t.population);
            if t.is_desert {
                acc.deserts += 1;
                acc.desert_population += u64::from(t.population);
            }
            acc
        })
    }
}
