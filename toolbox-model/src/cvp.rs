//! Cost-volume-profit arithmetic.
//!
//! All functions here are pure and unit-agnostic: the caller must supply
//! fixed costs, per-unit costs, and prices in the same base currency unit
//! for the money outputs to be meaningful. Inputs are numerically
//! unconstrained; negative prices or volumes produce mathematically
//! consistent (possibly negative) results, and range enforcement belongs
//! to whatever layer collects the inputs.

use serde::Serialize;

/// The derived CVP metrics for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CvpResult {
    /// Price minus variable cost, per unit.
    pub contribution_margin: f64,
    /// Units needed to cover fixed costs. `f64::INFINITY` when the
    /// contribution margin is non-positive: no volume recovers fixed
    /// costs at that price.
    pub breakeven_volume: f64,
    /// Price times volume, in the caller's base unit.
    pub revenue: f64,
    /// Fixed costs plus total variable cost, in the caller's base unit.
    pub total_cost: f64,
    /// Revenue minus total cost, in the caller's base unit.
    pub profit: f64,
}

impl CvpResult {
    /// True when the breakeven sentinel fired (margin <= 0).
    pub fn breakeven_unreachable(&self) -> bool {
        self.breakeven_volume.is_infinite()
    }
}

/// Compute contribution margin, breakeven volume, revenue, total cost, and
/// profit from one segment's cost/price/volume inputs.
///
/// Breakeven edge case: a non-positive contribution margin means the
/// segment can never recover its fixed costs, so the breakeven volume is
/// reported as `f64::INFINITY` rather than dividing by zero or a negative
/// margin.
pub fn compute_cvp(
    fixed_costs: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
    volume: f64,
) -> CvpResult {
    let contribution_margin = price_per_unit - variable_cost_per_unit;
    let breakeven_volume = if contribution_margin > 0.0 {
        fixed_costs / contribution_margin
    } else {
        f64::INFINITY
    };
    let revenue = price_per_unit * volume;
    let total_cost = fixed_costs + variable_cost_per_unit * volume;
    let profit = revenue - total_cost;

    CvpResult {
        contribution_margin,
        breakeven_volume,
        revenue,
        total_cost,
        profit,
    }
}
