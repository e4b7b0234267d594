//! `rolecast run` command
//!
//! Builds one product and walks the requested roles on it.

use anyhow::Result;

use crate::cli::RunArgs;
use rolecast::ops;
use rolecast::FactoryRegistry;

pub fn execute(args: RunArgs, registry: &FactoryRegistry) -> Result<()> {
    let nav = ops::navigate_with(registry, args.product, &args.roles, |step| {
        if step.effects.is_empty() {
            println!("  {}", step.role.label());
        }
        for effect in &step.effects {
            println!("  {}: {}", step.role.label(), effect);
        }
    })?;

    println!(
        "{} (product {}): {} fill(s), {} charge(s)",
        nav.model, nav.product, nav.fills, nav.charges
    );

    Ok(())
}
