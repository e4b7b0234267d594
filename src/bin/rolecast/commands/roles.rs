//! `rolecast roles` command

use anyhow::Result;

use rolecast::RoleId;

pub fn execute() -> Result<()> {
    println!("Roles:");
    println!();

    for id in RoleId::DEFINED {
        let description = match id {
            RoleId::ROOT => "base identity, answered by every object",
            RoleId::DIESEL => "fuel",
            RoleId::HYBRID => "dual product id, not a role of any object",
            RoleId::HYBRIDIC => "fuel + charge as one union role",
            RoleId::ELECTRIC => "charge",
            _ => "",
        };
        println!("  {:<3} {:<10} {}", id.get(), id.name().unwrap_or_default(), description);
    }

    Ok(())
}
