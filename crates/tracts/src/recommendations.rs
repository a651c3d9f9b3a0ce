//! Rule-based intervention recommendations for a single tract.
//!
//! Rules are evaluated in a fixed order; the result is then stable-sorted by
//! priority so that rule order breaks ties within a tier. Only food-desert
//! tracts receive recommendations.

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::tract::Tract;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Card icon category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyIcon {
    Truck,
    Bus,
    Sprout,
    Store,
    Building,
    Heart,
    Utensils,
    Users,
}

impl StrategyIcon {
    /// Single glyph the default egui font can render.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Truck => "🚚",
            Self::Bus => "🚌",
            Self::Sprout => "🌱",
            Self::Store => "🏪",
            Self::Building => "🏢",
            Self::Heart => "❤",
            Self::Utensils => "🍴",
            Self::Users => "👥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    MobileFarmersMarket,
    SubsidizedTransit,
    CommunityGardens,
    GroceryIncentives,
    CornerStoreConversion,
    FoodAssistance,
    NutritionEducation,
    DeliveryCooperative,
}

/// A recommended program. Derived from a tract on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterventionStrategy {
    pub kind: StrategyKind,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StrategyIcon,
    pub priority: Priority,
    pub estimated_cost: &'static str,
    pub timeframe: &'static str,
}

impl StrategyKind {
    /// Rule evaluation order.
    pub const ALL: [StrategyKind; 8] = [
        Self::MobileFarmersMarket,
        Self::SubsidizedTransit,
        Self::CommunityGardens,
        Self::GroceryIncentives,
        Self::CornerStoreConversion,
        Self::FoodAssistance,
        Self::NutritionEducation,
        Self::DeliveryCooperative,
    ];

    /// Whether this strategy's rule fires for `tract`.
    pub fn applies_to(self, t: &Tract) -> bool {
        match self {
            Self::MobileFarmersMarket => t.vehicle_access < 80.0,
            Self::SubsidizedTransit => t.vehicle_access < 70.0 && t.distance_to_grocery > 1.5,
            Self::CommunityGardens => t.population_density > 3000.0,
            Self::GroceryIncentives => t.distance_to_grocery > 2.0,
            Self::CornerStoreConversion => {
                t.population_density > 4000.0 && t.poverty_rate > 20.0
            }
            Self::FoodAssistance => t.poverty_rate > 25.0,
            Self::NutritionEducation => t.education_bachelor < 25.0,
            Self::DeliveryCooperative => t.vehicle_access < 60.0,
        }
    }

    pub fn strategy(self) -> InterventionStrategy {
        match self {
            Self::MobileFarmersMarket => InterventionStrategy {
                kind: self,
                id: "mobile-farmers-market",
                title: "Mobile Farmers Market",
                description: "Weekly mobile market bringing fresh produce directly to the community, \
                    especially beneficial for areas with limited vehicle access.",
                icon: StrategyIcon::Truck,
                priority: Priority::High,
                estimated_cost: "$50K-100K annually",
                timeframe: "3-6 months to launch",
            },
            Self::SubsidizedTransit => InterventionStrategy {
                kind: self,
                id: "subsidized-transit",
                title: "Subsidized Transit Routes",
                description: "Dedicated bus routes or shuttle services connecting residents to major \
                    grocery stores and farmers markets.",
                icon: StrategyIcon::Bus,
                priority: Priority::High,
                estimated_cost: "$200K-500K annually",
                timeframe: "6-12 months to implement",
            },
            Self::CommunityGardens => InterventionStrategy {
                kind: self,
                id: "community-gardens",
                title: "Community Gardens",
                description: "Establish neighborhood gardens where residents can grow their own fresh \
                    produce and build community connections.",
                icon: StrategyIcon::Sprout,
                priority: Priority::Medium,
                estimated_cost: "$10K-30K initial setup",
                timeframe: "2-4 months to establish",
            },
            Self::GroceryIncentives => InterventionStrategy {
                kind: self,
                id: "grocery-incentives",
                title: "New Grocery Store Incentives",
                description: "Tax incentives and grants to attract full-service grocery stores to \
                    underserved areas.",
                icon: StrategyIcon::Store,
                priority: Priority::High,
                estimated_cost: "$1M-5M in incentives",
                timeframe: "1-3 years to complete",
            },
            Self::CornerStoreConversion => InterventionStrategy {
                kind: self,
                id: "corner-store-conversion",
                title: "Corner Store Conversion",
                description: "Convert existing corner stores to offer fresh produce, healthy foods, \
                    and accept SNAP benefits.",
                icon: StrategyIcon::Building,
                priority: Priority::Medium,
                estimated_cost: "$25K-75K per store",
                timeframe: "3-9 months per store",
            },
            Self::FoodAssistance => InterventionStrategy {
                kind: self,
                id: "food-assistance",
                title: "Enhanced Food Assistance",
                description: "Expand SNAP benefits, WIC programs, and food pantry services with fresh \
                    produce options.",
                icon: StrategyIcon::Heart,
                priority: Priority::High,
                estimated_cost: "$100K-300K annually",
                timeframe: "1-3 months to expand",
            },
            Self::NutritionEducation => InterventionStrategy {
                kind: self,
                id: "nutrition-education",
                title: "Nutrition Education Programs",
                description: "Community workshops on healthy eating, cooking classes, and nutrition \
                    education for families.",
                icon: StrategyIcon::Utensils,
                priority: Priority::Medium,
                estimated_cost: "$30K-80K annually",
                timeframe: "1-2 months to launch",
            },
            Self::DeliveryCooperative => InterventionStrategy {
                kind: self,
                id: "delivery-cooperative",
                title: "Community Food Delivery",
                description: "Resident-led cooperative for bulk grocery purchasing and delivery to \
                    reduce individual transportation needs.",
                icon: StrategyIcon::Users,
                priority: Priority::Medium,
                estimated_cost: "$15K-40K startup",
                timeframe: "2-4 months to organize",
            },
        }
    }
}

/// Strategies for `tract`, highest priority first. Empty for non-deserts.
pub fn recommend(tract: &Tract) -> Vec<InterventionStrategy> {
    if !tract.is_desert {
        return Vec::new();
    }
    let mut strategies: Vec<InterventionStrategy> = StrategyKind::ALL
        .iter()
        .filter(|kind| kind.applies_to(tract))
        .map(|kind| kind.strategy())
        .collect();
    // sort_by_key is stable: rule order survives within a tier
    strategies.sort_by_key(|s| s.priority);
    strategies
}

/// Strategy ids the user has hidden. Not tied to any tract.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dismissals {
    ids: BTreeSet<String>,
}

impl Dismissals {
    pub fn dismiss(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(id.to_string());
        Self { ids }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

pub fn visible(strategies: &[InterventionStrategy], dismissals: &Dismissals) -> Vec<InterventionStrategy> {
    strategies
        .iter()
        .filter(|s| !dismissals.is_dismissed(s.id))
        .copied()
        .collect()
}

/// What the intervention panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    /// No tract, or the tract is not a food desert.
    Hidden,
    Cards(Vec<InterventionStrategy>),
    /// A desert tract for which no rule fired.
    NoneIdentified,
    /// Every card is hidden; the panel offers a reset.
    AllDismissed,
}

pub fn card_view(tract: Option<&Tract>, dismissals: &Dismissals) -> CardView {
    let Some(tract) = tract.filter(|t| t.is_desert) else {
        return CardView::Hidden;
    };
    let shown = visible(&recommend(tract), dismissals);
    if !shown.is_empty() {
        CardView::Cards(shown)
    } else if dismissals.is_empty() {
        CardView::NoneIdentified
    } else {
        CardView::AllDismissed
    }
}
