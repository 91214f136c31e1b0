use std::path::Path;

use anyhow::{bail, Context, Result};
use slotgrid_core::AllocationPlan;

pub fn check(plan_path: &str) -> Result<()> {
    let plan = AllocationPlan::from_file(Path::new(plan_path))
        .with_context(|| format!("loading plan {plan_path}"))?;

    println!("{}", summarize(&plan));

    let blocked = plan.unsatisfiable_slots();
    if !blocked.is_empty() {
        bail!("{} slot(s) have no eligible entry: {blocked:?}", blocked.len());
    }
    Ok(())
}

/// One-line shape summary plus any columns every entry is disabled for.
pub fn summarize(plan: &AllocationPlan) -> String {
    let blocked = plan.unsatisfiable_slots();
    if blocked.is_empty() {
        format!(
            "✓ {} entries × {} slots (fill {})",
            plan.entries.len(),
            plan.grid.slots,
            plan.grid.fill
        )
    } else {
        format!(
            "✗ {} entries × {} slots, unsatisfiable slots: {blocked:?}",
            plan.entries.len(),
            plan.grid.slots
        )
    }
}
