//! `slotgrid run` — build a grid from a plan and run allocation rounds.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use slotgrid_core::{AllocationPlan, Grid};
use tracing::info;

/// Outcome of a multi-round run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub grid: Grid,
    pub rounds: Vec<RoundReport>,
    pub tally: Vec<EntryTally>,
}

#[derive(Debug, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub fill: i64,
    /// Winning entry index per slot.
    pub winners: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct EntryTally {
    pub entry: usize,
    pub id: Option<String>,
    pub weight: u32,
    pub wins: usize,
}

pub fn run(plan_path: &str, rounds: u32, fill: Option<i64>, format: &str) -> Result<()> {
    let plan = AllocationPlan::from_file(Path::new(plan_path))
        .with_context(|| format!("loading plan {plan_path}"))?;

    info!(
        entries = plan.entries.len(),
        slots = plan.grid.slots,
        rounds,
        "running allocation"
    );

    let report = execute(&plan, rounds, fill.unwrap_or(plan.grid.fill))?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", format_report(&report));
        }
    }

    Ok(())
}

/// Run `rounds` allocation rounds on a fresh grid built from `plan`.
pub fn execute(plan: &AllocationPlan, rounds: u32, fill: i64) -> Result<RunReport> {
    let mut grid = plan.build_grid();
    let mut tally: Vec<EntryTally> = grid
        .entries()
        .iter()
        .enumerate()
        .map(|(entry, e)| EntryTally {
            entry,
            id: e.id.clone(),
            weight: e.weight,
            wins: 0,
        })
        .collect();

    let mut reports = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        let winners = grid
            .process(fill)
            .with_context(|| format!("round {round} failed"))?;
        for w in &winners {
            if let Some(t) = tally.get_mut(*w) {
                t.wins += 1;
            }
        }
        reports.push(RoundReport { round, fill, winners });
    }

    Ok(RunReport {
        grid,
        rounds: reports,
        tally,
    })
}

/// Human-readable report: the rendered grid followed by per-entry wins.
pub fn format_report(report: &RunReport) -> String {
    let mut out = report.grid.render();
    out.push_str("\n\n");

    let lines: Vec<String> = report
        .tally
        .iter()
        .map(|t| {
            let id = t.id.as_deref().unwrap_or("-");
            format!(
                "#{:<3} {:<16} weight {:<4} wins {}",
                t.entry, id, t.weight, t.wins
            )
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out
}
