pub mod analysis;
pub mod charts;
pub mod error;
pub mod inputs;
pub mod types;

pub use analysis::{run_analysis, AnalysisReport};
pub use charts::{cost_breakdown_chart, scenario_bar_chart, trend_chart};
pub use error::{PlannerError, PlannerResult};
pub use inputs::{load_inputs, load_inputs_file};
pub use types::{CompetitorPlan, PlannerInputs, SegmentPlan};
