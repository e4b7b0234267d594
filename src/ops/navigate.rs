//! Find a product, build it, and walk a path of roles on it.

use crate::core::error::Result;
use crate::core::role::{Effect, RoleHandle};
use crate::core::role_id::RoleId;
use crate::factory::registry::FactoryRegistry;

/// One role switch and the effects produced by exercising that role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub role: RoleId,
    pub effects: Vec<Effect>,
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Product id the object was built from
    pub product: RoleId,

    /// Model of the built object
    pub model: &'static str,

    /// Steps taken, in order
    pub steps: Vec<Step>,

    /// Fills recorded on the object
    pub fills: u32,

    /// Charges recorded on the object
    pub charges: u32,
}

impl Navigation {
    /// All effects across every step.
    pub fn effects(&self) -> impl Iterator<Item = Effect> + '_ {
        self.steps.iter().flat_map(|step| step.effects.iter().copied())
    }
}

/// Build product `product` and switch through `path`, starting at root.
///
/// Each step calls `get_extension` on the handle returned by the previous
/// step, so the whole walk happens on one object.
pub fn navigate(registry: &FactoryRegistry, product: RoleId, path: &[RoleId]) -> Result<Navigation> {
    navigate_with(registry, product, path, |_| {})
}

/// Like [`navigate`], reporting each step as soon as it completes.
pub fn navigate_with<F>(
    registry: &FactoryRegistry,
    product: RoleId,
    path: &[RoleId],
    mut on_step: F,
) -> Result<Navigation>
where
    F: FnMut(&Step),
{
    let car = registry.create(product)?;
    tracing::debug!("Built {} from product id {}", car.model(), product);

    let mut handle = RoleHandle::Root(car.as_ref());
    let mut steps = Vec::with_capacity(path.len());

    for &id in path {
        handle = handle.get_extension(id)?;
        let step = Step {
            role: id,
            effects: handle.exercise(),
        };
        on_step(&step);
        steps.push(step);
    }

    Ok(Navigation {
        product,
        model: car.model(),
        steps,
        fills: car.meter().fills(),
        charges: car.meter().charges(),
    })
}
