// File: crates/pricing-core/src/series.rs
// Summary: Series descriptors (district, city, object and their delta variants) and
// their prepared, UI-state-carrying form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Identifier of a price series. The serialized names double as data point keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    District,
    City,
    ObjectId,
    AddDistrict,
    AddCity,
    AddObjectId,
}

impl PricingType {
    pub const ALL: [PricingType; 6] = [
        PricingType::District,
        PricingType::City,
        PricingType::ObjectId,
        PricingType::AddDistrict,
        PricingType::AddCity,
        PricingType::AddObjectId,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingType::District => "district",
            PricingType::City => "city",
            PricingType::ObjectId => "object_id",
            PricingType::AddDistrict => "add_district",
            PricingType::AddCity => "add_city",
            PricingType::AddObjectId => "add_object_id",
        }
    }

    /// Delta series (`add_*`) compare against a base series and are usually dashed.
    pub const fn is_delta(&self) -> bool {
        matches!(self, PricingType::AddDistrict | PricingType::AddCity | PricingType::AddObjectId)
    }
}

impl fmt::Display for PricingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPricingType(pub String);

impl fmt::Display for UnknownPricingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown series type {:?}", self.0)
    }
}

impl std::error::Error for UnknownPricingType {}

impl FromStr for PricingType {
    type Err = UnknownPricingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PricingType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPricingType(s.to_string()))
    }
}

/// Static description of one series, supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub type_name: PricingType,
    /// Series without a visual name are drawn but left out of legend and tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_name: Option<String>,
    pub color: String,
    #[serde(default)]
    pub stroke: bool,
    #[serde(default)]
    pub dashed: bool,
}

impl SeriesDescriptor {
    pub fn new(type_name: PricingType, color: impl Into<String>) -> Self {
        Self { type_name, visual_name: None, color: color.into(), stroke: false, dashed: false }
    }

    pub fn named(mut self, visual_name: impl Into<String>) -> Self {
        self.visual_name = Some(visual_name.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::parse_or_black(&self.color)
    }
}

/// Descriptor plus the two UI-only fields owned by the legend state.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedSeries {
    pub descriptor: SeriesDescriptor,
    /// Hover feedback, 0..=1.
    pub opacity: f32,
    /// User-toggled visibility.
    pub active: bool,
}

impl PreparedSeries {
    pub fn new(descriptor: SeriesDescriptor) -> Self {
        Self { descriptor, opacity: 1.0, active: true }
    }

    pub fn type_name(&self) -> PricingType {
        self.descriptor.type_name
    }

    pub fn is_dimmed(&self) -> bool {
        self.opacity != 1.0
    }
}

/// Prepare descriptors for display: every series visible at full opacity.
/// A repeated identifier keeps its first descriptor.
pub fn prepare_types(types: &[SeriesDescriptor]) -> Vec<PreparedSeries> {
    let mut out: Vec<PreparedSeries> = Vec::with_capacity(types.len());
    for t in types {
        if out.iter().any(|p| p.type_name() == t.type_name) {
            log::warn!("dropping duplicate series descriptor for {}", t.type_name);
            continue;
        }
        out.push(PreparedSeries::new(t.clone()));
    }
    out
}
