//! Installer - populates a registry before any lookup happens.

use serde::{Deserialize, Serialize};

use crate::core::role_id::RoleId;
use crate::factory::product::ProductKind;
use crate::factory::registry::FactoryRegistry;

/// Binds a product id to the kind of product built under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub id: RoleId,
    pub product: ProductKind,
}

impl Binding {
    pub fn new(id: RoleId, product: ProductKind) -> Self {
        Binding { id, product }
    }
}

/// The standard bindings: each product under its own default id.
pub fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::new(RoleId::DIESEL, ProductKind::Diesel),
        Binding::new(RoleId::ELECTRIC, ProductKind::Electric),
        Binding::new(RoleId::HYBRID, ProductKind::Hybrid),
        Binding::new(RoleId::HYBRIDIC, ProductKind::Hybridic),
    ]
}

/// Register the standard factories.
pub fn install(registry: &FactoryRegistry) {
    install_bindings(registry, &default_bindings());
}

/// Register one factory per binding, in order. Later bindings for the same
/// id replace earlier ones.
pub fn install_bindings(registry: &FactoryRegistry, bindings: &[Binding]) {
    for binding in bindings {
        registry.register(binding.id, binding.product.factory());
    }
    tracing::debug!("Installed {} product binding(s)", bindings.len());
}
