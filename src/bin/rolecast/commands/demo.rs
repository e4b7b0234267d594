//! `rolecast demo` command

use anyhow::Result;

use rolecast::ops;
use rolecast::FactoryRegistry;

pub fn execute(registry: &FactoryRegistry) -> Result<()> {
    for effect in ops::demo(registry)? {
        println!("{}", effect);
    }
    Ok(())
}
