use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use toolbox_analysis::analysis::{run_analysis, AnalysisReport};
use toolbox_analysis::charts::{
    cost_breakdown_chart, scenario_bar_chart, trend_chart, BreakdownChart, GroupedBarChart,
    TrendChart,
};
use toolbox_analysis::inputs::load_inputs_file;
use toolbox_analysis::types::PlannerInputs;

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportJson<'a> {
    generated_at: String,
    load_ms: u128,
    analysis_ms: u128,
    #[serde(flatten)]
    report: &'a AnalysisReport,
    charts: ChartsJson,
}

#[derive(Serialize)]
struct ChartsJson {
    trend: TrendChart,
    scenario_bars: GroupedBarChart,
    cost_breakdown: BreakdownChart,
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Format a number with comma thousands separators and fixed decimals.
fn format_commas(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount);
    let (head, tail) = match formatted.find('.') {
        Some(i) => (&formatted[..i], &formatted[i..]),
        None => (formatted.as_str(), ""),
    };
    let (sign, digits) = match head.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", head),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, grouped, tail)
}

/// Breakeven volume for display; the sentinel renders as text.
fn format_breakeven(volume: f64) -> String {
    if volume.is_infinite() {
        "unreachable".to_string()
    } else {
        format_commas(volume, 0)
    }
}

fn print_human(report: &AnalysisReport, load_ms: u128, analysis_ms: u128) {
    let bar = "\u{2550}".repeat(62);
    println!();
    println!("  \u{2554}{}\u{2557}", bar);
    println!("  \u{2551}       STRATEGY TOOLBOX \u{2014} Scenario & CVP Planning Report      \u{2551}");
    println!("  \u{255a}{}\u{255d}", bar);
    println!();
    println!(
        "  {} segments \u{00b7} {} competitors \u{00b7} {}-year horizon ({}\u{2013}{})",
        report.cvp.len(),
        report.competitor_trends.len(),
        report.years.len(),
        report.years.first().copied().unwrap_or_default(),
        report.years.last().copied().unwrap_or_default(),
    );
    println!();

    println!("  Cost-Volume-Profit by segment ($M unless noted)");
    println!("  {:\u{2500}<76}", "");
    println!(
        "  {:20} {:>10} {:>14} {:>9} {:>9} {:>9}",
        "Segment", "CM $/unit", "Breakeven", "Revenue", "Costs", "Profit"
    );
    for cvp in &report.cvp {
        println!(
            "  {:20} {:>10} {:>14} {:>9} {:>9} {:>9}",
            cvp.segment.to_string(),
            format_commas(cvp.contribution_margin, 2),
            format_breakeven(cvp.breakeven_volume),
            format_commas(cvp.revenue_millions, 1),
            format_commas(cvp.total_cost_millions, 1),
            format_commas(cvp.profit_millions, 1),
        );
    }
    println!();

    println!("  Scenario revenue by segment ($B, one-step)");
    println!("  {:\u{2500}<62}", "");
    println!(
        "  {:20} {:>12} {:>12} {:>12}",
        "Segment", "Best-case", "Baseline", "Worst-case"
    );
    for revenue in &report.scenario_revenue {
        println!(
            "  {:20} {:>12} {:>12} {:>12}",
            revenue.segment.to_string(),
            format_commas(revenue.best_case, 2),
            format_commas(revenue.baseline, 2),
            format_commas(revenue.worst_case, 2),
        );
    }
    println!();

    println!("  Revenue trends ($B per year)");
    println!("  {:\u{2500}<76}", "");
    print!("  {:20}", "Series");
    for year in &report.years {
        print!(" {:>10}", year);
    }
    println!();
    for trend in &report.disney_trends {
        print!("  {:20}", format!("Disney {}", trend.scenario));
        for value in &trend.values {
            print!(" {:>10}", format_commas(*value, 2));
        }
        println!();
    }
    for trend in &report.competitor_trends {
        print!("  {:20}", trend.competitor.to_string());
        for value in &trend.values {
            print!(" {:>10}", format_commas(*value, 2));
        }
        println!();
    }
    println!();

    let breakdown = cost_breakdown_chart(report);
    println!("  Cost distribution by segment");
    println!("  {:\u{2500}<48}", "");
    for ((label, value), share) in breakdown
        .labels
        .iter()
        .zip(&breakdown.values)
        .zip(&breakdown.shares)
    {
        println!(
            "  {:20} {:>12} $M  {:>5.1}%",
            label,
            format_commas(*value, 1),
            share * 100.0
        );
    }
    println!();

    println!(
        "  \u{23f1}  Inputs loaded in {}ms \u{00b7} Analysis ran in {}ms \u{00b7} Total {}ms",
        load_ms,
        analysis_ms,
        load_ms + analysis_ms
    );
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn print_usage() {
    eprintln!("Usage: toolbox-server [inputs.json] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  inputs.json   Planner inputs file; omit to use the built-in defaults");
    eprintln!("  --json        Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  toolbox-server");
    eprintln!("  toolbox-server fixtures/sample_inputs.json");
    eprintln!("  toolbox-server fixtures/sample_inputs.json --json");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut inputs_path: Option<String> = None;
    let mut json_output = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
            path => {
                if inputs_path.is_some() {
                    eprintln!("Error: more than one inputs file given");
                    print_usage();
                    process::exit(1);
                }
                inputs_path = Some(path.to_string());
            }
        }
    }

    // Load inputs, or fall back to the built-in defaults.
    let load_start = Instant::now();
    let inputs = match &inputs_path {
        Some(path) => match load_inputs_file(path) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Error loading inputs: {}", e);
                process::exit(1);
            }
        },
        None => PlannerInputs::default(),
    };
    let load_ms = load_start.elapsed().as_millis();

    let analysis_start = Instant::now();
    let report = run_analysis(&inputs);
    let analysis_ms = analysis_start.elapsed().as_millis();

    if json_output {
        let json = ReportJson {
            generated_at: Utc::now().to_rfc3339(),
            load_ms,
            analysis_ms,
            report: &report,
            charts: ChartsJson {
                trend: trend_chart(&report),
                scenario_bars: scenario_bar_chart(&report),
                cost_breakdown: cost_breakdown_chart(&report),
            },
        };
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&report, load_ms, analysis_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_commas(10_000_000.0, 0), "10,000,000");
        assert_eq!(format_commas(505.0, 1), "505.0");
        assert_eq!(format_commas(-495.0, 1), "-495.0");
        assert_eq!(format_commas(1.25, 2), "1.25");
    }

    #[test]
    fn infinite_breakeven_renders_as_text() {
        assert_eq!(format_breakeven(f64::INFINITY), "unreachable");
        assert_eq!(format_breakeven(10_000_000.0), "10,000,000");
    }
}
