//! Factory registry - maps product ids to creation logic.
//!
//! Callers can hold an explicit [`FactoryRegistry`] or use the process-wide
//! instance from [`FactoryRegistry::global`], which is built on first
//! access. The registry never populates itself; an installer must register
//! factories before the first lookup.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::core::error::LookupError;
use crate::core::role::Car;
use crate::core::role_id::RoleId;
use crate::factory::product::Factory;

static GLOBAL: LazyLock<FactoryRegistry> = LazyLock::new(FactoryRegistry::new);

/// Registry of product factories keyed by product id.
///
/// Entries are inserted or overwritten, never removed.
pub struct FactoryRegistry {
    factories: RwLock<HashMap<RoleId, Arc<dyn Factory>>>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FactoryRegistry {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry, constructed on first call.
    pub fn global() -> &'static FactoryRegistry {
        &GLOBAL
    }

    /// Register a factory under `id`, replacing any previous one.
    ///
    /// Last write wins. Returns the factory that was replaced.
    pub fn register(&self, id: RoleId, factory: Arc<dyn Factory>) -> Option<Arc<dyn Factory>> {
        let kind = factory.kind();
        let previous = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, factory);

        match &previous {
            Some(old) => tracing::debug!(
                "Replaced {} factory with {} under product id {}",
                old.kind(),
                kind,
                id
            ),
            None => tracing::debug!("Registered {} factory under product id {}", kind, id),
        }

        previous
    }

    /// Find the factory registered under `id`.
    pub fn find(&self, id: RoleId) -> Result<Arc<dyn Factory>, LookupError> {
        let factories = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match factories.get(&id) {
            Some(factory) => Ok(Arc::clone(factory)),
            None => {
                tracing::debug!("No factory for product id {}", id);
                Err(LookupError::new(id))
            }
        }
    }

    /// Find the factory for `id` and build a product with it.
    pub fn create(&self, id: RoleId) -> Result<Box<dyn Car>, LookupError> {
        Ok(self.find(id)?.create())
    }

    /// Check if a product id is registered.
    pub fn contains(&self, id: RoleId) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    /// Registered product ids, sorted.
    pub fn ids(&self) -> Vec<RoleId> {
        let mut ids: Vec<_> = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort();
        ids
    }

    /// Get the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::product::{DieselFactory, ElectricFactory, ProductKind};

    #[test]
    fn test_registry_starts_empty() {
        let registry = FactoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.ids().is_empty());
    }

    #[test]
    fn test_register_then_find_returns_same_factory() {
        let registry = FactoryRegistry::new();
        let factory: Arc<dyn Factory> = Arc::new(DieselFactory);
        registry.register(RoleId::DIESEL, Arc::clone(&factory));

        let found = registry.find(RoleId::DIESEL).unwrap();
        assert!(Arc::ptr_eq(&found, &factory));
        assert!(registry.contains(RoleId::DIESEL));
    }

    #[test]
    fn test_find_unregistered_fails() {
        let registry = FactoryRegistry::new();
        registry.register(RoleId::DIESEL, Arc::new(DieselFactory));

        let err = registry.find(RoleId::new(99)).err().unwrap();
        assert_eq!(err, LookupError::new(RoleId::new(99)));
        assert!(registry.create(RoleId::ELECTRIC).is_err());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = FactoryRegistry::new();
        assert!(registry.register(RoleId::new(7), Arc::new(DieselFactory)).is_none());

        let replaced = registry
            .register(RoleId::new(7), Arc::new(ElectricFactory))
            .unwrap();
        assert_eq!(replaced.kind(), ProductKind::Diesel);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.find(RoleId::new(7)).unwrap().kind(),
            ProductKind::Electric
        );
    }

    #[test]
    fn test_create_through_registry() {
        let registry = FactoryRegistry::new();
        registry.register(RoleId::ELECTRIC, Arc::new(ElectricFactory));

        let car = registry.create(RoleId::ELECTRIC).unwrap();
        assert_eq!(car.model(), "electric");
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = FactoryRegistry::new();
        registry.register(RoleId::ELECTRIC, Arc::new(ElectricFactory));
        registry.register(RoleId::DIESEL, Arc::new(DieselFactory));
        assert_eq!(registry.ids(), vec![RoleId::DIESEL, RoleId::ELECTRIC]);
    }

    #[test]
    fn test_global_is_a_single_instance() {
        let first = FactoryRegistry::global();
        let second = FactoryRegistry::global();
        assert!(std::ptr::eq(first, second));
    }
}
