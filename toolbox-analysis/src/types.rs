//! Typed planning inputs with their built-in defaults.
//!
//! An inputs file only needs to name the entities and fields it overrides;
//! every other field falls back to the defaults below. Range guidance on
//! the growth fields (0-100%, worst-case capped at 0-10%) is cosmetic: the
//! core accepts any numeric value and leaves range enforcement to the
//! collecting layer.

use serde::{Deserialize, Serialize};

use toolbox_model::benchmarks::GrowthTriple;
use toolbox_model::entities::{Competitor, Segment};

/// Default segment revenue forecast, in $B.
pub const DEFAULT_SEGMENT_REVENUE: f64 = 1.0;
/// Default segment fixed costs, in $M.
pub const DEFAULT_FIXED_COSTS: f64 = 500.0;
/// Default variable cost per unit, in $.
pub const DEFAULT_VARIABLE_COST: f64 = 50.0;
/// Default sales price per unit, in $.
pub const DEFAULT_SALES_PRICE: f64 = 100.0;
/// Default projected sales volume, in units.
pub const DEFAULT_SALES_VOLUME: f64 = 100_000.0;
/// Default user-adjustable projection growth rates (5% / 3% / 1%).
pub const DEFAULT_PROJECTION_GROWTH: GrowthTriple = GrowthTriple {
    best: 0.05,
    baseline: 0.03,
    worst: 0.01,
};
/// Default competitor annual revenue forecast, in $B.
pub const DEFAULT_COMPETITOR_REVENUE: f64 = 100.0;
/// Default competitor flat annual growth rate (4%).
pub const DEFAULT_COMPETITOR_GROWTH: f64 = 0.04;

/// Planning inputs for one Disney segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentPlan {
    pub segment: Segment,
    /// Revenue forecast, $B.
    #[serde(default = "default_segment_revenue")]
    pub current_revenue: f64,
    /// Fixed costs, $M.
    #[serde(default = "default_fixed_costs")]
    pub fixed_costs: f64,
    /// Variable cost per unit, $.
    #[serde(default = "default_variable_cost")]
    pub variable_cost_per_unit: f64,
    /// Sales price per unit, $.
    #[serde(default = "default_sales_price")]
    pub sales_price_per_unit: f64,
    /// Projected sales volume, units.
    #[serde(default = "default_sales_volume")]
    pub projected_sales_volume: f64,
    /// User-adjustable growth rates for the 5-year projection. Independent
    /// from the fixed benchmark triple; when overridden in a file all
    /// three rates must be given.
    #[serde(default = "default_projection_growth")]
    pub growth_rates: GrowthTriple,
}

impl SegmentPlan {
    /// A plan for `segment` with every field at its built-in default.
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            current_revenue: DEFAULT_SEGMENT_REVENUE,
            fixed_costs: DEFAULT_FIXED_COSTS,
            variable_cost_per_unit: DEFAULT_VARIABLE_COST,
            sales_price_per_unit: DEFAULT_SALES_PRICE,
            projected_sales_volume: DEFAULT_SALES_VOLUME,
            growth_rates: DEFAULT_PROJECTION_GROWTH,
        }
    }
}

/// Planning inputs for one competitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitorPlan {
    pub competitor: Competitor,
    /// Annual revenue forecast, $B.
    #[serde(default = "default_competitor_revenue")]
    pub revenue: f64,
    /// Flat annual growth rate, as a fraction.
    #[serde(default = "default_competitor_growth")]
    pub growth_rate: f64,
}

impl CompetitorPlan {
    /// A plan for `competitor` with every field at its built-in default.
    pub fn new(competitor: Competitor) -> Self {
        Self {
            competitor,
            revenue: DEFAULT_COMPETITOR_REVENUE,
            growth_rate: DEFAULT_COMPETITOR_GROWTH,
        }
    }
}

/// The full input set for one analysis pass: one plan per segment and one
/// per competitor.
///
/// The loader guarantees a normalized shape (every entity present exactly
/// once, in declaration order); inputs are discarded and rebuilt on every
/// interaction cycle, never mutated by the computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerInputs {
    #[serde(default)]
    pub segments: Vec<SegmentPlan>,
    #[serde(default)]
    pub competitors: Vec<CompetitorPlan>,
}

impl PlannerInputs {
    /// The plan for a specific segment, if present.
    pub fn segment(&self, segment: Segment) -> Option<&SegmentPlan> {
        self.segments.iter().find(|p| p.segment == segment)
    }

    /// The plan for a specific competitor, if present.
    pub fn competitor(&self, competitor: Competitor) -> Option<&CompetitorPlan> {
        self.competitors.iter().find(|p| p.competitor == competitor)
    }
}

impl Default for PlannerInputs {
    fn default() -> Self {
        Self {
            segments: Segment::ALL.iter().map(|&s| SegmentPlan::new(s)).collect(),
            competitors: Competitor::ALL
                .iter()
                .map(|&c| CompetitorPlan::new(c))
                .collect(),
        }
    }
}

fn default_segment_revenue() -> f64 {
    DEFAULT_SEGMENT_REVENUE
}

fn default_fixed_costs() -> f64 {
    DEFAULT_FIXED_COSTS
}

fn default_variable_cost() -> f64 {
    DEFAULT_VARIABLE_COST
}

fn default_sales_price() -> f64 {
    DEFAULT_SALES_PRICE
}

fn default_sales_volume() -> f64 {
    DEFAULT_SALES_VOLUME
}

fn default_projection_growth() -> GrowthTriple {
    DEFAULT_PROJECTION_GROWTH
}

fn default_competitor_revenue() -> f64 {
    DEFAULT_COMPETITOR_REVENUE
}

fn default_competitor_growth() -> f64 {
    DEFAULT_COMPETITOR_GROWTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_cover_every_entity() {
        let inputs = PlannerInputs::default();
        assert_eq!(inputs.segments.len(), 4);
        assert_eq!(inputs.competitors.len(), 4);
        for segment in Segment::ALL {
            assert!(inputs.segment(segment).is_some());
        }
        for competitor in Competitor::ALL {
            assert!(inputs.competitor(competitor).is_some());
        }
    }

    #[test]
    fn default_plan_carries_the_form_defaults() {
        let plan = SegmentPlan::new(Segment::StreamingMedia);
        assert_eq!(plan.current_revenue, 1.0);
        assert_eq!(plan.fixed_costs, 500.0);
        assert_eq!(plan.variable_cost_per_unit, 50.0);
        assert_eq!(plan.sales_price_per_unit, 100.0);
        assert_eq!(plan.projected_sales_volume, 100_000.0);
        assert_eq!(plan.growth_rates.best, 0.05);
        assert_eq!(plan.growth_rates.baseline, 0.03);
        assert_eq!(plan.growth_rates.worst, 0.01);

        let competitor = CompetitorPlan::new(Competitor::Netflix);
        assert_eq!(competitor.revenue, 100.0);
        assert_eq!(competitor.growth_rate, 0.04);
    }

    #[test]
    fn partial_segment_entry_inherits_defaults() {
        let json = r#"{ "segment": "Box Office", "current_revenue": 2.5 }"#;
        let plan: SegmentPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.segment, Segment::BoxOffice);
        assert_eq!(plan.current_revenue, 2.5);
        assert_eq!(plan.fixed_costs, DEFAULT_FIXED_COSTS);
        assert_eq!(plan.growth_rates, DEFAULT_PROJECTION_GROWTH);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let json = r#"{ "segment": "Box Office", "curent_revenue": 2.5 }"#;
        let result: Result<SegmentPlan, _> = serde_json::from_str(json);
        assert!(result.is_err(), "typo'd field name should be rejected");
    }
}
