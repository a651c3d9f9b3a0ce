use bevy::prelude::*;

use crate::filter::FilterState;
use crate::tract::{Tract, TractFeature};

/// An sRGB color as authored in the layer tables (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` at compile time; invalid digits are a build error.
    pub const fn hex(s: &str) -> Self {
        let b = s.as_bytes();
        assert!(b.len() == 7 && b[0] == b'#', "expected #rrggbb");
        Rgb(
            hex_byte(b[1], b[2]),
            hex_byte(b[3], b[4]),
            hex_byte(b[5], b[6]),
        )
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Components in 0..=1 for renderers that take floats.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_byte(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

/// Fallback fill for a scale/attribute mismatch.
pub const UNSTYLED: Rgb = Rgb::hex("#cccccc");

/// Tract attribute a layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TractAttribute {
    IsDesert,
    PovertyRate,
    UnemploymentRate,
    EducationBachelor,
    VehicleAccess,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Flag(bool),
    Number(f64),
}

impl TractAttribute {
    pub fn value(self, tract: &Tract) -> AttributeValue {
        match self {
            Self::IsDesert => AttributeValue::Flag(tract.is_desert),
            Self::PovertyRate => AttributeValue::Number(tract.poverty_rate),
            Self::UnemploymentRate => AttributeValue::Number(tract.unemployment_rate),
            Self::EducationBachelor => AttributeValue::Number(tract.education_bachelor),
            Self::VehicleAccess => AttributeValue::Number(tract.vehicle_access),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScale {
    Boolean {
        on: Rgb,
        off: Rgb,
    },
    /// Four colors split by three ascending thresholds.
    Threshold {
        thresholds: [f64; 3],
        colors: [Rgb; 4],
    },
}

/// Index of the bucket `value` falls in. Boundaries belong to the upper
/// bucket: with `[10, 20, 30]`, 10 maps to bucket 1.
pub fn bucket(value: f64, thresholds: &[f64; 3]) -> usize {
    thresholds
        .iter()
        .position(|&t| value < t)
        .unwrap_or(thresholds.len())
}

impl ColorScale {
    pub fn color_for(&self, value: AttributeValue) -> Rgb {
        match (self, value) {
            (Self::Boolean { on, off }, AttributeValue::Flag(flag)) => {
                if flag {
                    *on
                } else {
                    *off
                }
            }
            (Self::Threshold { thresholds, colors }, AttributeValue::Number(v)) => {
                colors[bucket(v, thresholds)]
            }
            _ => UNSTYLED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Rgb,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerConfig {
    pub name: &'static str,
    pub attribute: TractAttribute,
    pub scale: ColorScale,
    /// Labels for the boolean legend: `(on, off)`.
    pub flag_labels: (&'static str, &'static str),
}

impl LayerConfig {
    pub fn fill_color(&self, tract: &Tract) -> Rgb {
        self.scale.color_for(self.attribute.value(tract))
    }

    /// Legend rows, top to bottom.
    pub fn legend(&self) -> Vec<LegendEntry> {
        match self.scale {
            ColorScale::Boolean { on, off } => vec![
                LegendEntry {
                    color: on,
                    label: self.flag_labels.0.to_string(),
                },
                LegendEntry {
                    color: off,
                    label: self.flag_labels.1.to_string(),
                },
            ],
            ColorScale::Threshold { thresholds, colors } => {
                let [t0, t1, t2] = thresholds;
                vec![
                    LegendEntry {
                        color: colors[0],
                        label: format!("< {t0}%"),
                    },
                    LegendEntry {
                        color: colors[1],
                        label: format!("{t0}-{t1}%"),
                    },
                    LegendEntry {
                        color: colors[2],
                        label: format!("{t1}-{t2}%"),
                    },
                    LegendEntry {
                        color: colors[3],
                        label: format!("> {t2}%"),
                    },
                ]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerKind {
    #[default]
    FoodDesert,
    Poverty,
    Unemployment,
    Education,
    VehicleAccess,
}

impl LayerKind {
    /// Selector order; also the Tab cycling order.
    pub const ALL: [LayerKind; 5] = [
        Self::FoodDesert,
        Self::Poverty,
        Self::Unemployment,
        Self::Education,
        Self::VehicleAccess,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn config(self) -> &'static LayerConfig {
        match self {
            Self::FoodDesert => &FOOD_DESERT,
            Self::Poverty => &POVERTY,
            Self::Unemployment => &UNEMPLOYMENT,
            Self::Education => &EDUCATION,
            Self::VehicleAccess => &VEHICLE_ACCESS,
        }
    }

    pub fn label(self) -> &'static str {
        self.config().name
    }
}

static FOOD_DESERT: LayerConfig = LayerConfig {
    name: "Food Desert Areas",
    attribute: TractAttribute::IsDesert,
    scale: ColorScale::Boolean {
        on: Rgb::hex("#ff4d4f"),
        off: Rgb::hex("#91caff"),
    },
    flag_labels: ("Food Desert", "Not Food Desert"),
};

static POVERTY: LayerConfig = LayerConfig {
    name: "Poverty Rate",
    attribute: TractAttribute::PovertyRate,
    scale: ColorScale::Threshold {
        thresholds: [10.0, 20.0, 30.0],
        colors: [
            Rgb::hex("#f0f9ff"),
            Rgb::hex("#0ea5e9"),
            Rgb::hex("#1e40af"),
            Rgb::hex("#1e3a8a"),
        ],
    },
    flag_labels: ("", ""),
};

static UNEMPLOYMENT: LayerConfig = LayerConfig {
    name: "Unemployment Rate",
    attribute: TractAttribute::UnemploymentRate,
    scale: ColorScale::Threshold {
        thresholds: [5.0, 10.0, 15.0],
        colors: [
            Rgb::hex("#fef3c7"),
            Rgb::hex("#f59e0b"),
            Rgb::hex("#d97706"),
            Rgb::hex("#92400e"),
        ],
    },
    flag_labels: ("", ""),
};

static EDUCATION: LayerConfig = LayerConfig {
    name: "Bachelor's Degree Rate",
    attribute: TractAttribute::EducationBachelor,
    scale: ColorScale::Threshold {
        thresholds: [20.0, 35.0, 50.0],
        colors: [
            Rgb::hex("#fce7f3"),
            Rgb::hex("#ec4899"),
            Rgb::hex("#be185d"),
            Rgb::hex("#831843"),
        ],
    },
    flag_labels: ("", ""),
};

static VEHICLE_ACCESS: LayerConfig = LayerConfig {
    name: "Vehicle Access Rate",
    attribute: TractAttribute::VehicleAccess,
    scale: ColorScale::Threshold {
        thresholds: [70.0, 80.0, 90.0],
        colors: [
            Rgb::hex("#dcfce7"),
            Rgb::hex("#22c55e"),
            Rgb::hex("#16a34a"),
            Rgb::hex("#15803d"),
        ],
    },
    flag_labels: ("", ""),
};

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerSelection {
    pub kind: LayerKind,
}

/// A tract that passed the filter, with its fill under the active layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTract {
    pub id: String,
    pub fill: Rgb,
}

/// Full rendered set for a layer + filter. Always recomputed from scratch.
pub fn render_set(
    features: &[TractFeature],
    filter: &FilterState,
    layer: LayerKind,
) -> Vec<StyledTract> {
    let config = layer.config();
    filter
        .apply(features)
        .into_iter()
        .map(|f| StyledTract {
            id: f.properties.id.clone(),
            fill: config.fill_color(&f.properties),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tract::sample_tract;

    const C: [Rgb; 4] = [Rgb(0, 0, 0), Rgb(1, 1, 1), Rgb(2, 2, 2), Rgb(3, 3, 3)];

    fn scale() -> ColorScale {
        ColorScale::Threshold {
            thresholds: [10.0, 20.0, 30.0],
            colors: C,
        }
    }

    #[test]
    fn bucketing_is_monotonic_with_strict_less_than() {
        let s = scale();
        assert_eq!(s.color_for(AttributeValue::Number(5.0)), C[0]);
        assert_eq!(s.color_for(AttributeValue::Number(15.0)), C[1]);
        assert_eq!(s.color_for(AttributeValue::Number(25.0)), C[2]);
        assert_eq!(s.color_for(AttributeValue::Number(35.0)), C[3]);
        assert_eq!(s.color_for(AttributeValue::Number(10.0)), C[1]);
        assert_eq!(s.color_for(AttributeValue::Number(30.0)), C[3]);
    }

    #[test]
    fn bucket_index_never_decreases() {
        let t = [10.0, 20.0, 30.0];
        let mut last = 0;
        for v in 0..50 {
            let b = bucket(v as f64, &t);
            assert!(b >= last);
            last = b;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn boolean_layer_uses_desert_flag() {
        let config = LayerKind::FoodDesert.config();
        let mut tract = sample_tract();
        assert_eq!(config.fill_color(&tract), Rgb::hex("#ff4d4f"));
        tract.is_desert = false;
        assert_eq!(config.fill_color(&tract), Rgb::hex("#91caff"));
    }

    #[test]
    fn mismatched_value_falls_back_to_unstyled() {
        assert_eq!(scale().color_for(AttributeValue::Flag(true)), UNSTYLED);
    }

    #[test]
    fn hex_round_trips_through_parser() {
        let c = Rgb::hex("#1E40af");
        assert_eq!(c, Rgb(0x1e, 0x40, 0xaf));
        assert_eq!(c.to_hex(), "#1e40af");
    }

    #[test]
    fn threshold_legend_labels() {
        let labels: Vec<String> = LayerKind::Poverty
            .config()
            .legend()
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, ["< 10%", "10-20%", "20-30%", "> 30%"]);
    }

    #[test]
    fn boolean_legend_has_two_rows() {
        let legend = LayerKind::FoodDesert.config().legend();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label, "Food Desert");
    }

    #[test]
    fn layer_cycle_wraps_both_ways() {
        for &k in &LayerKind::ALL {
            assert_eq!(k.next().prev(), k);
        }
        assert_eq!(LayerKind::VehicleAccess.next(), LayerKind::FoodDesert);
        assert_eq!(LayerKind::FoodDesert.prev(), LayerKind::VehicleAccess);
    }

    #[test]
    fn each_layer_reads_its_own_attribute() {
        let tract = sample_tract();
        // sample: poverty 30, unemployment 12, education 10, vehicle 50
        assert_eq!(
            LayerKind::Poverty.config().fill_color(&tract),
            Rgb::hex("#1e3a8a")
        );
        assert_eq!(
            LayerKind::Unemployment.config().fill_color(&tract),
            Rgb::hex("#d97706")
        );
        assert_eq!(
            LayerKind::Education.config().fill_color(&tract),
            Rgb::hex("#fce7f3")
        );
        assert_eq!(
            LayerKind::VehicleAccess.config().fill_color(&tract),
            Rgb::hex("#dcfce7")
        );
    }
}
