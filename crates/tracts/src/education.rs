//! Static content for the "Understanding Food Deserts" guide.

use bevy::prelude::*;

use crate::recommendations::StrategyIcon;

/// Whether the guide window is shown over the current page.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EducationGuide {
    pub open: bool,
}

pub struct Criterion {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const DEFINITION: &str = "Food deserts are areas where residents have limited access to \
    affordable, nutritious, and culturally appropriate food. The USDA defines food deserts as \
    census tracts that meet both criteria:";

pub const CRITERIA: [Criterion; 2] = [
    Criterion {
        title: "Low Income",
        detail: "Poverty rate ≥20% or median family income ≤80% of state/metro median",
    },
    Criterion {
        title: "Low Access",
        detail: "≥33% of population lives >1 mile from supermarket (>10 miles in rural areas)",
    },
];

pub struct ImpactArea {
    pub title: &'static str,
    pub points: [&'static str; 4],
}

pub const IMPACTS: [ImpactArea; 3] = [
    ImpactArea {
        title: "Health Impact",
        points: [
            "Higher rates of obesity and diabetes",
            "Increased cardiovascular disease",
            "Poor nutrition and food insecurity",
            "Lower life expectancy",
        ],
    },
    ImpactArea {
        title: "Economic Impact",
        points: [
            "Higher healthcare costs",
            "Reduced property values",
            "Limited local economic development",
            "Increased transportation costs",
        ],
    },
    ImpactArea {
        title: "Social Impact",
        points: [
            "Perpetuates health disparities",
            "Affects educational outcomes",
            "Reduces community cohesion",
            "Limits social mobility",
        ],
    },
];

/// `(group, why)` pairs for "Who Is Most Affected?".
pub const AFFECTED_GROUPS: [(&str, &str); 4] = [
    ("Children", "Especially vulnerable to poor nutrition impacts"),
    ("Elderly", "Limited mobility and transportation options"),
    ("Low-Income", "Cannot afford transportation to distant stores"),
    ("Minorities", "Disproportionately affected by food deserts"),
];

pub struct StrategySummary {
    pub title: &'static str,
    pub icon: StrategyIcon,
    pub summary: &'static str,
    /// National success rate, percent.
    pub success: u8,
}

pub const STRATEGIES: [StrategySummary; 8] = [
    StrategySummary {
        title: "Mobile Markets",
        icon: StrategyIcon::Truck,
        summary: "Bring fresh produce directly to underserved communities through mobile \
            farmers markets and food trucks.",
        success: 78,
    },
    StrategySummary {
        title: "Transit Solutions",
        icon: StrategyIcon::Bus,
        summary: "Improve public transportation routes to grocery stores and provide \
            subsidized transit options.",
        success: 65,
    },
    StrategySummary {
        title: "Grocery Incentives",
        icon: StrategyIcon::Store,
        summary: "Provide tax incentives and grants to attract full-service grocery stores \
            to underserved areas.",
        success: 71,
    },
    StrategySummary {
        title: "Community Gardens",
        icon: StrategyIcon::Sprout,
        summary: "Establish neighborhood gardens where residents can grow their own fresh \
            produce and build community.",
        success: 82,
    },
    StrategySummary {
        title: "Corner Store Conversion",
        icon: StrategyIcon::Building,
        summary: "Convert existing corner stores to offer fresh produce and healthy food \
            options with SNAP acceptance.",
        success: 69,
    },
    StrategySummary {
        title: "Food Assistance",
        icon: StrategyIcon::Heart,
        summary: "Expand SNAP benefits, WIC programs, and food pantry services with fresh \
            produce options.",
        success: 85,
    },
    StrategySummary {
        title: "Nutrition Education",
        icon: StrategyIcon::Utensils,
        summary: "Provide community workshops on healthy eating, cooking classes, and \
            nutrition education for families.",
        success: 74,
    },
    StrategySummary {
        title: "Delivery Co-ops",
        icon: StrategyIcon::Users,
        summary: "Resident-led cooperatives for bulk grocery purchasing and delivery to \
            reduce transportation needs.",
        success: 67,
    },
];

/// "How Interventions Create Change" principles.
pub const PRINCIPLES: [(&str, &str); 3] = [
    (
        "Targeted Approach",
        "Interventions are tailored to specific community needs, demographics, and existing \
         infrastructure for maximum effectiveness.",
    ),
    (
        "Measurable Impact",
        "Success is tracked through improved food access metrics, health outcomes, and \
         community economic indicators.",
    ),
    (
        "Community-Led",
        "Most successful interventions involve local residents in planning, implementation, \
         and ongoing management.",
    ),
];

/// `(figure, caption)` pairs for the statistics grid.
pub const KEY_STATISTICS: [(&str, &str); 4] = [
    ("23.5M", "Americans live in food deserts"),
    ("13.5K", "Census tracts classified as food deserts"),
    ("2.3M", "Children affected by food deserts"),
    ("$1.5B", "Annual healthcare costs from poor food access"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::StrategyKind;

    #[test]
    fn guide_lists_one_summary_per_strategy() {
        assert_eq!(STRATEGIES.len(), StrategyKind::ALL.len());
        assert!(STRATEGIES.iter().all(|s| s.success > 0 && s.success <= 100));
    }

    #[test]
    fn guide_icons_match_recommendation_icons() {
        let mut guide: Vec<StrategyIcon> = STRATEGIES.iter().map(|s| s.icon).collect();
        let mut engine: Vec<StrategyIcon> =
            StrategyKind::ALL.iter().map(|k| k.strategy().icon).collect();
        guide.sort_by_key(|i| i.glyph());
        engine.sort_by_key(|i| i.glyph());
        assert_eq!(guide, engine);
    }
}
