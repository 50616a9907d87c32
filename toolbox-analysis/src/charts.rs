//! Chart-shaped views of an analysis report.
//!
//! These are plain named sequences with no chart-library types, so any
//! front end can render them: a multi-series time trend, a grouped
//! scenario comparison, and a cost breakdown that sums to a whole.

use serde::Serialize;

use toolbox_model::entities::Scenario;

use crate::analysis::AnalysisReport;

/// One named series of values aligned to an external axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Disney scenario trends and competitor trends over the year axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendChart {
    pub years: Vec<i32>,
    pub series: Vec<ChartSeries>,
}

/// One-step scenario revenue grouped by segment, clustered by scenario.
///
/// `values[cluster][group]` pairs `clusters` (scenarios) with `groups`
/// (segments).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupedBarChart {
    pub groups: Vec<String>,
    pub clusters: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Per-segment total cost as a proportion of the whole.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreakdownChart {
    pub labels: Vec<String>,
    /// Total cost per segment, $M.
    pub values: Vec<f64>,
    /// Fractional shares summing to 1.0 (all zero when the total is zero).
    pub shares: Vec<f64>,
}

/// The revenue-trend line chart: Disney scenarios then competitors.
pub fn trend_chart(report: &AnalysisReport) -> TrendChart {
    let mut series: Vec<ChartSeries> = report
        .disney_trends
        .iter()
        .map(|t| ChartSeries {
            label: format!("Disney {}", t.scenario),
            values: t.values.clone(),
        })
        .collect();
    series.extend(report.competitor_trends.iter().map(|t| ChartSeries {
        label: format!("{} Trend", t.competitor),
        values: t.values.clone(),
    }));

    TrendChart {
        years: report.years.clone(),
        series,
    }
}

/// The grouped bar chart of one-step scenario revenue by segment.
pub fn scenario_bar_chart(report: &AnalysisReport) -> GroupedBarChart {
    let groups = report
        .scenario_revenue
        .iter()
        .map(|r| r.segment.display_name().to_string())
        .collect();
    let clusters = Scenario::ALL
        .iter()
        .map(|s| s.display_name().to_string())
        .collect();
    let values = Scenario::ALL
        .iter()
        .map(|&scenario| {
            report
                .scenario_revenue
                .iter()
                .map(|r| r.get(scenario))
                .collect()
        })
        .collect();

    GroupedBarChart {
        groups,
        clusters,
        values,
    }
}

/// The cost-distribution breakdown across segments.
pub fn cost_breakdown_chart(report: &AnalysisReport) -> BreakdownChart {
    let labels = report
        .cvp
        .iter()
        .map(|c| c.segment.display_name().to_string())
        .collect();
    let values: Vec<f64> = report.cvp.iter().map(|c| c.total_cost_millions).collect();
    let total: f64 = values.iter().sum();
    let shares = if total == 0.0 {
        vec![0.0; values.len()]
    } else {
        values.iter().map(|v| v / total).collect()
    };

    BreakdownChart {
        labels,
        values,
        shares,
    }
}
