//! Summaries of what a registry can build.

use serde::Serialize;

use crate::core::role_id::RoleId;
use crate::factory::product::ProductKind;
use crate::factory::registry::FactoryRegistry;

/// Summary of one registered product for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    /// Product id
    pub id: RoleId,

    /// Kind of product built under the id
    pub kind: ProductKind,

    /// Model name reported by a built instance
    pub model: &'static str,

    /// Roles a built instance accepts, root first
    pub roles: Vec<RoleId>,
}

/// Summarize every registered product, in id order.
///
/// Builds one throwaway instance per product to ask it for its roles.
pub fn inspect(registry: &FactoryRegistry) -> Vec<ProductSummary> {
    registry
        .ids()
        .into_iter()
        .filter_map(|id| {
            let factory = registry.find(id).ok()?;
            let car = factory.create();
            Some(ProductSummary {
                id,
                kind: factory.kind(),
                model: car.model(),
                roles: car.roles(),
            })
        })
        .collect()
}
