// File: crates/pricing-core/src/data.rs
// Summary: Dated price records, per-series extraction with gaps, and JSON/CSV loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::PricingType;

/// One dated record. Every series value is optional; a missing value is a gap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Milliseconds since the Unix epoch.
    pub date: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_district: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_city: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_object_id: Option<f64>,
}

impl DataPoint {
    pub fn new(date: f64) -> Self {
        Self { date, ..Self::default() }
    }

    pub fn with(mut self, t: PricingType, value: f64) -> Self {
        *self.slot_mut(t) = Some(value);
        self
    }

    fn slot(&self, t: PricingType) -> &Option<f64> {
        match t {
            PricingType::District => &self.district,
            PricingType::City => &self.city,
            PricingType::ObjectId => &self.object_id,
            PricingType::AddDistrict => &self.add_district,
            PricingType::AddCity => &self.add_city,
            PricingType::AddObjectId => &self.add_object_id,
        }
    }

    fn slot_mut(&mut self, t: PricingType) -> &mut Option<f64> {
        match t {
            PricingType::District => &mut self.district,
            PricingType::City => &mut self.city,
            PricingType::ObjectId => &mut self.object_id,
            PricingType::AddDistrict => &mut self.add_district,
            PricingType::AddCity => &mut self.add_city,
            PricingType::AddObjectId => &mut self.add_object_id,
        }
    }

    /// Value for `t`; non-finite values count as absent.
    pub fn value(&self, t: PricingType) -> Option<f64> {
        self.slot(t).filter(|v| v.is_finite())
    }
}

/// Split one series into runs of consecutive defined values.
///
/// With `connect_gaps` the defined values form a single run; otherwise every
/// absent value ends the current run. Runs are `(date, value)` pairs in input order.
pub fn segments(points: &[DataPoint], t: PricingType, connect_gaps: bool) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut run: Vec<(f64, f64)> = Vec::new();
    for p in points {
        match p.value(t) {
            Some(v) if p.date.is_finite() => run.push((p.date, v)),
            _ if connect_gaps => {}
            _ => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

/// `(min, max)` of all finite dates, or `None` for an empty set.
pub fn date_extent(points: &[DataPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|p| p.date)
        .filter(|d| d.is_finite())
        .fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
}

/// `(min, max)` over the given series, or `None` when none has a value.
pub fn value_extent(points: &[DataPoint], types: &[PricingType]) -> Option<(f64, f64)> {
    let mut ext: Option<(f64, f64)> = None;
    for p in points {
        for &t in types {
            if let Some(v) = p.value(t) {
                ext = Some(match ext {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        }
    }
    ext
}

pub fn from_json_str(s: &str) -> Result<Vec<DataPoint>> {
    Ok(serde_json::from_str(s)?)
}

/// Read a CSV with a header row; columns are matched by name and empty cells are gaps.
pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for rec in rdr.deserialize::<DataPoint>() {
        out.push(rec?);
    }
    Ok(out)
}

/// Load data points from a `.json` or `.csv` file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let points = match ext.as_str() {
        "json" => from_json_str(&std::fs::read_to_string(path)?)?,
        "csv" => from_csv_reader(std::fs::File::open(path)?)?,
        other => return Err(ChartError::UnsupportedFormat(other.to_string())),
    };
    log::info!("loaded {} data points from {}", points.len(), path.display());
    Ok(points)
}
