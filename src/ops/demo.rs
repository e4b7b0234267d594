//! The demonstration sequence: every product used through its roles.

use crate::core::error::Result;
use crate::core::role::{Effect, RoleHandle};
use crate::core::role_id::RoleId;
use crate::factory::registry::FactoryRegistry;

/// Run the demonstration against an installed registry.
///
/// Returns the effects in the order they happened.
pub fn demo(registry: &FactoryRegistry) -> Result<Vec<Effect>> {
    let mut effects = Vec::new();

    let diesel = registry.create(RoleId::DIESEL)?;
    effects.extend(diesel.get_extension(RoleId::DIESEL)?.exercise());

    let electric = registry.create(RoleId::ELECTRIC)?;
    effects.extend(electric.get_extension(RoleId::ELECTRIC)?.exercise());

    // Dual product: switch from the diesel facet straight to the electric one.
    let hybrid = registry.create(RoleId::HYBRID)?;
    let as_diesel = hybrid.get_extension(RoleId::DIESEL)?;
    effects.extend(as_diesel.exercise());
    effects.extend(as_diesel.get_extension(RoleId::ELECTRIC)?.exercise());

    // Union product: one role carries both operations.
    let hybridic = registry.create(RoleId::HYBRIDIC)?;
    effects.extend(hybridic.get_extension(RoleId::HYBRIDIC)?.exercise());

    // Role switching from root, reusing whichever handle came back last.
    let car = registry.create(RoleId::HYBRID)?;
    let mut handle = RoleHandle::Root(car.as_ref());
    for id in [
        RoleId::DIESEL,
        RoleId::ELECTRIC,
        RoleId::DIESEL,
        RoleId::ELECTRIC,
    ] {
        handle = handle.get_extension(id)?;
        effects.extend(handle.exercise());
    }

    Ok(effects)
}
