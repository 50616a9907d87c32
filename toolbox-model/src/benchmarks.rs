//! Centralized model constants: the benchmark growth table and the
//! projection axis.
//!
//! The benchmark table is a fixed calibration, not a user input. The
//! per-segment user growth sliders live in the analysis layer; changing a
//! value here affects BOTH the one-step scenario revenue and every Disney
//! trend built on top of it.

use serde::{Deserialize, Serialize};

use crate::entities::{Scenario, Segment};

/// First year of the projection axis.
pub const BASE_YEAR: i32 = 2025;

/// Number of years projected (2025..2029 inclusive).
pub const PROJECTION_YEARS: usize = 5;

/// Dollars per million, for converting fixed costs ($M) to base dollars
/// before CVP and money results back to $M after.
pub const DOLLARS_PER_MILLION: f64 = 1e6;

/// A growth-rate triple, one fraction per scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthTriple {
    pub best: f64,
    pub baseline: f64,
    pub worst: f64,
}

impl GrowthTriple {
    /// The rate for a given scenario.
    pub fn rate(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::BestCase => self.best,
            Scenario::Baseline => self.baseline,
            Scenario::WorstCase => self.worst,
        }
    }
}

/// Benchmark growth assumptions per segment.
///
/// The fixed industry calibrations used for one-step scenario revenue,
/// independent from the user-adjustable projection growth rates.
pub const fn benchmark_growth(segment: Segment) -> GrowthTriple {
    match segment {
        Segment::StreamingMedia => GrowthTriple { best: 0.25, baseline: 0.15, worst: 0.05 },
        Segment::ParksExperiences => GrowthTriple { best: 0.10, baseline: 0.07, worst: 0.03 },
        Segment::ConsumerProducts => GrowthTriple { best: 0.05, baseline: 0.03, worst: 0.01 },
        Segment::BoxOffice => GrowthTriple { best: 0.07, baseline: 0.05, worst: 0.03 },
    }
}

/// The projection year axis, `[2025, 2026, 2027, 2028, 2029]`.
pub fn projection_years() -> [i32; PROJECTION_YEARS] {
    let mut years = [0i32; PROJECTION_YEARS];
    for (i, year) in years.iter_mut().enumerate() {
        *year = BASE_YEAR + i as i32;
    }
    years
}
