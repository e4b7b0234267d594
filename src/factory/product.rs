//! Product factories - one per concrete variant.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::role::Car;
use crate::core::role_id::RoleId;
use crate::core::variants::{DieselCar, ElectricCar, HybridCar, HybridicCar};

/// Kind of product a factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Diesel-only car
    Diesel,
    /// Electric-only car
    Electric,
    /// Diesel and electric as separate facets
    Hybrid,
    /// Single union role covering both capabilities
    Hybridic,
}

impl ProductKind {
    pub const ALL: [ProductKind; 4] = [
        ProductKind::Diesel,
        ProductKind::Electric,
        ProductKind::Hybrid,
        ProductKind::Hybridic,
    ];

    /// Get the product name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Diesel => "diesel",
            ProductKind::Electric => "electric",
            ProductKind::Hybrid => "hybrid",
            ProductKind::Hybridic => "hybridic",
        }
    }

    /// Product id this kind is installed under by default.
    pub fn default_id(&self) -> RoleId {
        match self {
            ProductKind::Diesel => RoleId::DIESEL,
            ProductKind::Electric => RoleId::ELECTRIC,
            ProductKind::Hybrid => RoleId::HYBRID,
            ProductKind::Hybridic => RoleId::HYBRIDIC,
        }
    }

    /// Build the factory for this kind.
    pub fn factory(&self) -> Arc<dyn Factory> {
        match self {
            ProductKind::Diesel => Arc::new(DieselFactory),
            ProductKind::Electric => Arc::new(ElectricFactory),
            ProductKind::Hybrid => Arc::new(HybridFactory),
            ProductKind::Hybridic => Arc::new(HybridicFactory),
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = ProductKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diesel" => Ok(ProductKind::Diesel),
            "electric" => Ok(ProductKind::Electric),
            "hybrid" => Ok(ProductKind::Hybrid),
            "hybridic" => Ok(ProductKind::Hybridic),
            _ => Err(ProductKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid product kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product '{0}', valid values: diesel, electric, hybrid, hybridic")]
pub struct ProductKindParseError(pub String);

/// Creation logic for one kind of product.
///
/// Factories are stateless. The caller owns what `create` returns and
/// navigates it through [`Car::get_extension`].
pub trait Factory: Send + Sync {
    /// Kind of product this factory builds.
    fn kind(&self) -> ProductKind;

    /// Construct a fresh product. Never fails.
    fn create(&self) -> Box<dyn Car>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DieselFactory;

impl Factory for DieselFactory {
    fn kind(&self) -> ProductKind {
        ProductKind::Diesel
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(DieselCar::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ElectricFactory;

impl Factory for ElectricFactory {
    fn kind(&self) -> ProductKind {
        ProductKind::Electric
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(ElectricCar::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HybridFactory;

impl Factory for HybridFactory {
    fn kind(&self) -> ProductKind {
        ProductKind::Hybrid
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(HybridCar::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HybridicFactory;

impl Factory for HybridicFactory {
    fn kind(&self) -> ProductKind {
        ProductKind::Hybridic
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(HybridicCar::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_kind_parse() {
        assert_eq!("diesel".parse::<ProductKind>().unwrap(), ProductKind::Diesel);
        assert_eq!("HYBRIDIC".parse::<ProductKind>().unwrap(), ProductKind::Hybridic);
        assert!("steam".parse::<ProductKind>().is_err());
    }

    #[test]
    fn test_factories_build_their_kind() {
        for kind in ProductKind::ALL {
            let factory = kind.factory();
            assert_eq!(factory.kind(), kind);
            assert_eq!(factory.create().model(), kind.as_str());
        }
    }

    #[test]
    fn test_create_returns_fresh_instances() {
        let factory = HybridFactory;
        let first = factory.create();
        let second = factory.create();

        first
            .get_extension(RoleId::DIESEL)
            .unwrap()
            .as_diesel()
            .unwrap()
            .fuel();
        assert_eq!(first.meter().fills(), 1);
        assert_eq!(second.meter().fills(), 0);
    }

    #[test]
    fn test_default_ids() {
        assert_eq!(ProductKind::Diesel.default_id(), RoleId::DIESEL);
        assert_eq!(ProductKind::Electric.default_id(), RoleId::ELECTRIC);
        assert_eq!(ProductKind::Hybrid.default_id(), RoleId::HYBRID);
        assert_eq!(ProductKind::Hybridic.default_id(), RoleId::HYBRIDIC);
    }
}
