//! The one-pass analysis orchestrator.
//!
//! `run_analysis` recomputes every derived value from a `PlannerInputs`
//! snapshot: per-segment CVP metrics, benchmark one-step scenario revenue,
//! the Disney aggregate 5-year trends, and the competitor trends. There is
//! no incremental recomputation and no cached state; each interaction gets
//! a full, independent pass.
//!
//! Fixed costs arrive in $M and are converted to base dollars before the
//! CVP call; revenue, total cost, and profit are converted back to $M
//! afterwards. Contribution margin (per unit) and breakeven volume (units)
//! are unit-stable and pass through unconverted.

use serde::Serialize;

use toolbox_model::benchmarks::{benchmark_growth, projection_years, DOLLARS_PER_MILLION};
use toolbox_model::cvp::compute_cvp;
use toolbox_model::entities::{Competitor, Scenario, Segment};
use toolbox_model::projection::{aggregate_trend, linear_trend, scenario_revenue};

use crate::types::PlannerInputs;

/// CVP metrics for one segment, money fields in $M.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentCvp {
    pub segment: Segment,
    /// Price minus variable cost, $ per unit.
    pub contribution_margin: f64,
    /// Units to cover fixed costs; `f64::INFINITY` when unreachable
    /// (serde_json renders the non-finite sentinel as `null`).
    pub breakeven_volume: f64,
    /// Projected revenue, $M.
    pub revenue_millions: f64,
    /// Total costs, $M.
    pub total_cost_millions: f64,
    /// Profit, $M.
    pub profit_millions: f64,
}

/// One-step benchmark scenario revenue for one segment, $B.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioRevenue {
    pub segment: Segment,
    pub best_case: f64,
    pub baseline: f64,
    pub worst_case: f64,
}

impl ScenarioRevenue {
    /// The revenue under a given scenario.
    pub fn get(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::BestCase => self.best_case,
            Scenario::Baseline => self.baseline,
            Scenario::WorstCase => self.worst_case,
        }
    }
}

/// The Disney aggregate 5-year trend for one scenario, $B per year.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioTrend {
    pub scenario: Scenario,
    pub values: Vec<f64>,
}

/// A competitor's 5-year trend, $B per year.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompetitorTrend {
    pub competitor: Competitor,
    pub values: Vec<f64>,
}

/// Everything one analysis pass derives, in chart-consumable shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The projection year axis all trend series align to.
    pub years: Vec<i32>,
    pub cvp: Vec<SegmentCvp>,
    pub scenario_revenue: Vec<ScenarioRevenue>,
    pub disney_trends: Vec<ScenarioTrend>,
    pub competitor_trends: Vec<CompetitorTrend>,
}

impl AnalysisReport {
    /// CVP metrics for a specific segment.
    pub fn cvp_for(&self, segment: Segment) -> Option<&SegmentCvp> {
        self.cvp.iter().find(|c| c.segment == segment)
    }

    /// One-step scenario revenue for a specific segment.
    pub fn scenario_revenue_for(&self, segment: Segment) -> Option<&ScenarioRevenue> {
        self.scenario_revenue.iter().find(|r| r.segment == segment)
    }

    /// The Disney aggregate trend for a specific scenario.
    pub fn disney_trend_for(&self, scenario: Scenario) -> Option<&ScenarioTrend> {
        self.disney_trends.iter().find(|t| t.scenario == scenario)
    }

    /// The trend for a specific competitor.
    pub fn competitor_trend_for(&self, competitor: Competitor) -> Option<&CompetitorTrend> {
        self.competitor_trends.iter().find(|t| t.competitor == competitor)
    }
}

/// Run one full analysis pass over the inputs.
pub fn run_analysis(inputs: &PlannerInputs) -> AnalysisReport {
    log::debug!(
        "running analysis over {} segments and {} competitors",
        inputs.segments.len(),
        inputs.competitors.len()
    );

    let cvp = inputs
        .segments
        .iter()
        .map(|plan| {
            let result = compute_cvp(
                plan.fixed_costs * DOLLARS_PER_MILLION,
                plan.variable_cost_per_unit,
                plan.sales_price_per_unit,
                plan.projected_sales_volume,
            );
            SegmentCvp {
                segment: plan.segment,
                contribution_margin: result.contribution_margin,
                breakeven_volume: result.breakeven_volume,
                revenue_millions: result.revenue / DOLLARS_PER_MILLION,
                total_cost_millions: result.total_cost / DOLLARS_PER_MILLION,
                profit_millions: result.profit / DOLLARS_PER_MILLION,
            }
        })
        .collect();

    let scenario_revenues: Vec<ScenarioRevenue> = inputs
        .segments
        .iter()
        .map(|plan| {
            let benchmark = benchmark_growth(plan.segment);
            ScenarioRevenue {
                segment: plan.segment,
                best_case: scenario_revenue(plan.current_revenue, &benchmark, Scenario::BestCase),
                baseline: scenario_revenue(plan.current_revenue, &benchmark, Scenario::Baseline),
                worst_case: scenario_revenue(plan.current_revenue, &benchmark, Scenario::WorstCase),
            }
        })
        .collect();

    // Each segment contributes its benchmark-adjusted starting revenue and
    // its own user growth rate; the Disney trend is the elementwise sum.
    let disney_trends = Scenario::ALL
        .iter()
        .map(|&scenario| {
            let parts = inputs.segments.iter().zip(&scenario_revenues).map(|(plan, rev)| {
                (rev.get(scenario), plan.growth_rates.rate(scenario))
            });
            ScenarioTrend {
                scenario,
                values: aggregate_trend(parts).to_vec(),
            }
        })
        .collect();

    let competitor_trends = inputs
        .competitors
        .iter()
        .map(|plan| CompetitorTrend {
            competitor: plan.competitor,
            values: linear_trend(plan.revenue, plan.growth_rate).to_vec(),
        })
        .collect();

    AnalysisReport {
        years: projection_years().to_vec(),
        cvp,
        scenario_revenue: scenario_revenues,
        disney_trends,
        competitor_trends,
    }
}
