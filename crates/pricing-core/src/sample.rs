// File: crates/pricing-core/src/sample.rs
// Summary: Sample inputs for demos: embedded fixture, seeded random walk, default series set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{self, DataPoint};
use crate::error::Result;
use crate::series::{PricingType, SeriesDescriptor};

const FIXTURE_JSON: &str = include_str!("../assets/dynamic_pricing.json");

const WEEK_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;
/// 2021-01-04T00:00:00Z
const RANDOM_START_MS: f64 = 1_609_718_400_000.0;

/// District, city and object series as shown on a listing page.
pub fn default_types() -> Vec<SeriesDescriptor> {
    vec![
        SeriesDescriptor::new(PricingType::District, "rgb(254, 171, 76)").named("By district"),
        SeriesDescriptor::new(PricingType::City, "rgb(41, 143, 202)").named("In the city"),
        SeriesDescriptor::new(PricingType::ObjectId, "rgb(97, 189, 79)").named("This object"),
    ]
}

/// [`default_types`] plus dashed delta series for each base series.
pub fn types_with_deltas() -> Vec<SeriesDescriptor> {
    let mut types = default_types();
    types.extend([
        SeriesDescriptor::new(PricingType::AddDistrict, "rgb(254, 171, 76)").dashed(),
        SeriesDescriptor::new(PricingType::AddCity, "rgb(41, 143, 202)").dashed(),
        SeriesDescriptor::new(PricingType::AddObjectId, "rgb(97, 189, 79)").dashed(),
    ]);
    types
}

/// Weekly records embedded in the crate; the object series has gaps.
pub fn fixture() -> Result<Vec<DataPoint>> {
    data::from_json_str(FIXTURE_JSON)
}

/// `count` weekly records of a random walk for the three base series.
///
/// Deterministic for a given `seed`. Roughly one object value in ten is left
/// out to exercise gaps.
pub fn random(count: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut district = rng.gen_range(120_000.0..160_000.0_f64);
    let mut city = district * rng.gen_range(0.8..0.95);
    let mut object = district * rng.gen_range(1.0..1.2);

    (0..count)
        .map(|i| {
            district = (district + rng.gen_range(-2_500.0..3_000.0)).max(1_000.0);
            city = (city + rng.gen_range(-2_000.0..2_400.0)).max(1_000.0);
            object = (object + rng.gen_range(-3_500.0..4_000.0)).max(1_000.0);

            let mut p = DataPoint::new(RANDOM_START_MS + WEEK_MS * i as f64)
                .with(PricingType::District, district.round())
                .with(PricingType::City, city.round());
            if !rng.gen_bool(0.1) {
                p = p.with(PricingType::ObjectId, object.round());
            }
            p
        })
        .collect()
}
