//! The fixed entity sets of the planning model.
//!
//! Segments, competitors, and scenarios are closed enumerations: the model
//! never creates or removes them at runtime. Serde names match the human
//! display names so input files and reports read naturally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four Disney business segments under analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "Streaming Media")]
    StreamingMedia,
    #[serde(rename = "Parks & Experiences")]
    ParksExperiences,
    #[serde(rename = "Consumer Products")]
    ConsumerProducts,
    #[serde(rename = "Box Office")]
    BoxOffice,
}

impl Segment {
    /// All segment variants for iteration.
    pub const ALL: [Segment; 4] = [
        Segment::StreamingMedia,
        Segment::ParksExperiences,
        Segment::ConsumerProducts,
        Segment::BoxOffice,
    ];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::StreamingMedia => "Streaming Media",
            Segment::ParksExperiences => "Parks & Experiences",
            Segment::ConsumerProducts => "Consumer Products",
            Segment::BoxOffice => "Box Office",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The four competitors benchmarked against Disney.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competitor {
    Netflix,
    Universal,
    Paramount,
    #[serde(rename = "Warner Bros.")]
    WarnerBros,
}

impl Competitor {
    /// All competitor variants for iteration.
    pub const ALL: [Competitor; 4] = [
        Competitor::Netflix,
        Competitor::Universal,
        Competitor::Paramount,
        Competitor::WarnerBros,
    ];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Competitor::Netflix => "Netflix",
            Competitor::Universal => "Universal",
            Competitor::Paramount => "Paramount",
            Competitor::WarnerBros => "Warner Bros.",
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The three growth scenarios applied uniformly across all segments.
///
/// Ordered from most to least optimistic; the benchmark table keeps
/// best >= baseline >= worst for every segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    #[serde(rename = "Best-case")]
    BestCase,
    #[serde(rename = "Baseline")]
    Baseline,
    #[serde(rename = "Worst-case")]
    WorstCase,
}

impl Scenario {
    /// All scenario variants for iteration.
    pub const ALL: [Scenario; 3] = [Scenario::BestCase, Scenario::Baseline, Scenario::WorstCase];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Scenario::BestCase => "Best-case",
            Scenario::Baseline => "Baseline",
            Scenario::WorstCase => "Worst-case",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_sets_have_expected_sizes() {
        assert_eq!(Segment::ALL.len(), 4);
        assert_eq!(Competitor::ALL.len(), 4);
        assert_eq!(Scenario::ALL.len(), 3);
    }

    #[test]
    fn display_names_are_the_human_labels() {
        assert_eq!(Segment::ParksExperiences.to_string(), "Parks & Experiences");
        assert_eq!(Competitor::WarnerBros.to_string(), "Warner Bros.");
        assert_eq!(Scenario::BestCase.to_string(), "Best-case");
    }

    #[test]
    fn serde_names_match_display_names() {
        for segment in Segment::ALL {
            let json = serde_json::to_string(&segment).unwrap();
            assert_eq!(json, format!("\"{}\"", segment.display_name()));
        }
        for competitor in Competitor::ALL {
            let json = serde_json::to_string(&competitor).unwrap();
            assert_eq!(json, format!("\"{}\"", competitor.display_name()));
        }
        for scenario in Scenario::ALL {
            let json = serde_json::to_string(&scenario).unwrap();
            assert_eq!(json, format!("\"{}\"", scenario.display_name()));
        }
    }

    #[test]
    fn unknown_name_fails_to_deserialize() {
        let result: Result<Segment, _> = serde_json::from_str("\"Streaming Medai\"");
        assert!(result.is_err(), "typo'd segment name should be rejected");
    }
}
