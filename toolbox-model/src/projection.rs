//! Scenario revenue and multi-year trend projection.
//!
//! Two layers: a one-step scenario adjustment (`current * (1 + growth)`)
//! against the benchmark table, and a 5-year trend that scales that
//! starting point linearly in the year index.
//!
//! Trend growth is LINEAR (`1 + i*r`), not compounded (`(1+r)^i`): the
//! year-over-year first differences of a series are constant. Switching
//! to compound growth changes every projected figure downstream.

use ndarray::Array1;

use crate::benchmarks::{GrowthTriple, PROJECTION_YEARS};
use crate::entities::Scenario;

/// One-step scenario revenue: `current * (1 + growth[scenario])`.
///
/// This is a next-period adjustment, not a compounding projection; the
/// triple is normally the segment's benchmark calibration.
pub fn scenario_revenue(current_revenue: f64, growth: &GrowthTriple, scenario: Scenario) -> f64 {
    current_revenue * (1.0 + growth.rate(scenario))
}

/// A 5-element trend series: `start * (1 + i * rate)` for each year index.
///
/// Index 0 always equals `start` exactly (the `1 + 0*rate` term collapses
/// to 1).
pub fn linear_trend(start: f64, rate: f64) -> Array1<f64> {
    Array1::from_iter((0..PROJECTION_YEARS).map(|i| start * (1.0 + i as f64 * rate)))
}

/// Elementwise sum of linear trends, one `(start, rate)` pair per part.
///
/// Used for the Disney aggregate: each segment contributes its own
/// scenario revenue and its own user growth rate, and the years align.
pub fn aggregate_trend<I>(parts: I) -> Array1<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut total = Array1::<f64>::zeros(PROJECTION_YEARS);
    for (start, rate) in parts {
        total += &linear_trend(start, rate);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::benchmark_growth;
    use crate::entities::Segment;

    #[test]
    fn streaming_media_one_step_revenue() {
        let triple = benchmark_growth(Segment::StreamingMedia);
        assert_eq!(scenario_revenue(1.0, &triple, Scenario::BestCase), 1.25);
        assert_eq!(scenario_revenue(1.0, &triple, Scenario::Baseline), 1.15);
        assert_eq!(scenario_revenue(1.0, &triple, Scenario::WorstCase), 1.05);
    }

    #[test]
    fn scenario_revenue_is_ordered_for_nonnegative_revenue() {
        for segment in Segment::ALL {
            let triple = benchmark_growth(segment);
            let best = scenario_revenue(2.5, &triple, Scenario::BestCase);
            let baseline = scenario_revenue(2.5, &triple, Scenario::Baseline);
            let worst = scenario_revenue(2.5, &triple, Scenario::WorstCase);
            assert!(
                best >= baseline && baseline >= worst,
                "scenario revenue for {} must follow the benchmark ordering",
                segment
            );
        }
    }

    #[test]
    fn trend_has_five_years_and_starts_at_start() {
        let trend = linear_trend(1.15, 0.03);
        assert_eq!(trend.len(), PROJECTION_YEARS);
        assert_eq!(trend[0], 1.15);
    }

    #[test]
    fn flat_four_percent_trend_endpoint() {
        // 100.0 $B at 4% flat growth, year index 4 -> 116.0.
        let trend = linear_trend(100.0, 0.04);
        assert!((trend[4] - 116.0).abs() < 1e-12, "got {}", trend[4]);
    }

    #[test]
    fn trend_growth_is_linear_not_compound() {
        let trend = linear_trend(3.0, 0.07);
        let first_diff = trend[1] - trend[0];
        for i in 1..PROJECTION_YEARS - 1 {
            let diff = trend[i + 1] - trend[i];
            assert!(
                (diff - first_diff).abs() < 1e-12,
                "first differences must be constant; compound growth would grow them"
            );
        }
        // Under compound growth the year-4 value would be 3.0 * 1.07^4,
        // which differs from the linear value.
        assert!((trend[4] - 3.0 * (1.0 + 4.0 * 0.07)).abs() < 1e-12);
        assert!((trend[4] - 3.0 * 1.07f64.powi(4)).abs() > 1e-3);
    }

    #[test]
    fn aggregate_is_elementwise_sum() {
        let parts = vec![(1.0, 0.05), (2.0, 0.10)];
        let total = aggregate_trend(parts);
        let a = linear_trend(1.0, 0.05);
        let b = linear_trend(2.0, 0.10);
        for i in 0..PROJECTION_YEARS {
            assert!((total[i] - (a[i] + b[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn aggregate_of_no_parts_is_zero() {
        let total = aggregate_trend(std::iter::empty());
        assert!(total.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn negative_rate_declines_linearly() {
        let trend = linear_trend(10.0, -0.1);
        assert_eq!(trend[0], 10.0);
        assert!((trend[4] - 6.0).abs() < 1e-12);
    }
}
