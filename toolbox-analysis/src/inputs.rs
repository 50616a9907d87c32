//! JSON input loader.
//!
//! Parses a planner inputs file into a normalized `PlannerInputs`: every
//! segment and competitor present exactly once, in declaration order, with
//! unspecified entities and fields at their built-in defaults. Expected
//! shape:
//!
//! ```json
//! {
//!   "segments": [
//!     { "segment": "Streaming Media", "current_revenue": 1.8 }
//!   ],
//!   "competitors": [
//!     { "competitor": "Netflix", "revenue": 250.0, "growth_rate": 0.06 }
//!   ]
//! }
//! ```

use std::io::Read;

use toolbox_model::entities::{Competitor, Segment};

use crate::error::{PlannerError, PlannerResult};
use crate::types::{CompetitorPlan, PlannerInputs, SegmentPlan};

/// Load planner inputs from a JSON reader.
///
/// Unknown entity names and misspelled fields are rejected; missing
/// entities fall back to their defaults. If a file names the same entity
/// twice, the first entry wins and the rest are logged and dropped.
pub fn load_inputs<R: Read>(reader: R) -> PlannerResult<PlannerInputs> {
    let raw: PlannerInputs = serde_json::from_reader(reader)?;
    Ok(normalize(raw))
}

/// Load planner inputs from a JSON file path.
pub fn load_inputs_file(path: &str) -> PlannerResult<PlannerInputs> {
    let file = std::fs::File::open(path).map_err(|source| PlannerError::Io {
        path: path.to_string(),
        source,
    })?;
    load_inputs(file)
}

/// Fill in missing entities with defaults and fix the ordering.
fn normalize(raw: PlannerInputs) -> PlannerInputs {
    let segments = Segment::ALL
        .iter()
        .map(|&segment| {
            let mut matches = raw.segments.iter().filter(|p| p.segment == segment);
            let plan = matches
                .next()
                .cloned()
                .unwrap_or_else(|| SegmentPlan::new(segment));
            let dropped = matches.count();
            if dropped > 0 {
                log::warn!(
                    "inputs file lists {} {} times; keeping the first entry",
                    segment,
                    dropped + 1
                );
            }
            plan
        })
        .collect();

    let competitors = Competitor::ALL
        .iter()
        .map(|&competitor| {
            let mut matches = raw.competitors.iter().filter(|p| p.competitor == competitor);
            let plan = matches
                .next()
                .cloned()
                .unwrap_or_else(|| CompetitorPlan::new(competitor));
            let dropped = matches.count();
            if dropped > 0 {
                log::warn!(
                    "inputs file lists {} {} times; keeping the first entry",
                    competitor,
                    dropped + 1
                );
            }
            plan
        })
        .collect();

    PlannerInputs {
        segments,
        competitors,
    }
}
