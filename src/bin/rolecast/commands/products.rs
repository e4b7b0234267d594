//! `rolecast products` command

use anyhow::Result;

use crate::cli::ProductsArgs;
use rolecast::ops;
use rolecast::FactoryRegistry;

pub fn execute(args: ProductsArgs, registry: &FactoryRegistry) -> Result<()> {
    let summaries = ops::inspect(registry);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No products registered.");
        return Ok(());
    }

    println!("Products:");
    println!();

    for summary in summaries {
        let roles: Vec<_> = summary.roles.iter().map(|id| id.label()).collect();
        println!("  {} - {}", summary.id, summary.kind);
        println!("    Roles:  {}", roles.join(", "));
        println!();
    }

    Ok(())
}
