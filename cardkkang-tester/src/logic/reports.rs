use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use super::{DistributionSummary, ScenarioResult};

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [ScenarioResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    distribution: Option<&'a DistributionSummary>,
}

fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    cardkkang_game::numbers::ratio(passed, results.len()) * 100.0
}

fn pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    distribution: Option<&DistributionSummary>,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "Total scenarios: {total_tests}")?;
    writeln!(out, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(out, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            out,
            "{} {} (seed {})",
            status,
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if let (Some(fastest), Some(slowest)) = (
        results.iter().min_by_key(|r| r.average_duration),
        results.iter().max_by_key(|r| r.average_duration),
    ) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
        writeln!(out)?;
    }

    if let Some(summary) = distribution {
        writeln!(out, "{}", "🎴 Rarity Distribution".bright_magenta().bold())?;
        writeln!(out, "{}", "======================".magenta())?;
        writeln!(
            out,
            "Packs: {} × {} cards over {} seed(s), floor {}",
            summary.packs, summary.pack_size, summary.seeds, summary.floor
        )?;
        writeln!(
            out,
            "Floor upgrades: {} ({})",
            summary.floor_upgrades,
            pct(summary.floor_upgrade_rate())
        )?;
        writeln!(out, "Mean luck: {:.1}", summary.mean_luck)?;
        for tier in &summary.tiers {
            writeln!(
                out,
                "  {:>2} {:<11} {:>8}  observed {:>7}  expected {:>7}",
                tier.code.as_str(),
                tier.name,
                tier.count,
                pct(tier.observed),
                pct(tier.expected)
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    distribution: Option<&DistributionSummary>,
) -> Result<()> {
    let report = JsonReport {
        results,
        distribution,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    distribution: Option<&DistributionSummary>,
) -> Result<()> {
    writeln!(out, "# Cardkkang Logic Test Results\n")?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total_tests}")?;
    writeln!(out, "- **Passed**: {passed_tests}")?;
    writeln!(out, "- **Failed**: {failed_tests}")?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(
            out,
            "### {} {} (seed {})\n",
            status, result.scenario_name, result.seed
        )?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }

    if let Some(summary) = distribution {
        writeln!(out, "## Rarity Distribution\n")?;
        writeln!(
            out,
            "{} packs of {} cards, floor {}, {} floor upgrades ({}), mean luck {:.1}\n",
            summary.packs,
            summary.pack_size,
            summary.floor,
            summary.floor_upgrades,
            pct(summary.floor_upgrade_rate()),
            summary.mean_luck
        )?;
        writeln!(out, "| Rarity | Name | Count | Observed | Expected |")?;
        writeln!(out, "|---|---|---:|---:|---:|")?;
        for tier in &summary.tiers {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                tier.code,
                tier.name,
                tier.count,
                pct(tier.observed),
                pct(tier.expected)
            )?;
        }
    }
    Ok(())
}

/// One row per scenario and seed.
pub fn generate_csv_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(
        out,
        "scenario,seed,passed,iterations,successful,avg_ms,failures"
    )?;
    for result in results {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            csv_field(&result.scenario_name),
            result.seed,
            result.passed,
            result.iterations_run,
            result.successful_iterations,
            result.average_duration.as_millis(),
            result.failures.len()
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
