use std::path::Path;

use anyhow::{bail, Context, Result};
use slotgrid_core::AllocationPlan;

pub fn init(path: &str, entries: usize, slots: usize) -> Result<()> {
    let output = Path::new(path).join("slotgrid.toml");
    if output.exists() {
        bail!("{} already exists", output.display());
    }

    let plan = AllocationPlan::scaffold(entries, slots);
    std::fs::write(&output, plan.to_toml_string()?)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("✓ Generated {}", output.display());

    Ok(())
}
