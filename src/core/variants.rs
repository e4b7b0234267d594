//! Concrete variants, each honouring a fixed subset of roles.
//!
//! | Variant       | Roles beyond root        |
//! |---------------|--------------------------|
//! | `DieselCar`   | diesel                   |
//! | `ElectricCar` | electric                 |
//! | `HybridCar`   | diesel, electric         |
//! | `HybridicCar` | hybridic (union) only    |

use crate::core::error::UnknownRoleError;
use crate::core::facet::{self, Accessor, Facets};
use crate::core::role::{Car, Diesel, Effect, Electric, Hybrid, Meter, RoleHandle};
use crate::core::role_id::RoleId;

/// Single-capability car: diesel only.
#[derive(Debug, Default)]
pub struct DieselCar {
    meter: Meter,
}

impl DieselCar {
    pub fn new() -> Self {
        DieselCar::default()
    }
}

impl Facets for DieselCar {
    const FACETS: &'static [(RoleId, Accessor<Self>)] = &[(RoleId::DIESEL, facet::diesel)];
}

impl Car for DieselCar {
    fn model(&self) -> &'static str {
        "diesel"
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }

    fn get_extension(&self, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError> {
        facet::resolve(self, id)
    }

    fn roles(&self) -> Vec<RoleId> {
        facet::supported::<Self>()
    }
}

impl Diesel for DieselCar {
    fn fuel(&self) -> Effect {
        self.meter.record(Effect::Fueled)
    }
}

/// Single-capability car: electric only.
#[derive(Debug, Default)]
pub struct ElectricCar {
    meter: Meter,
}

impl ElectricCar {
    pub fn new() -> Self {
        ElectricCar::default()
    }
}

impl Facets for ElectricCar {
    const FACETS: &'static [(RoleId, Accessor<Self>)] = &[(RoleId::ELECTRIC, facet::electric)];
}

impl Car for ElectricCar {
    fn model(&self) -> &'static str {
        "electric"
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }

    fn get_extension(&self, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError> {
        facet::resolve(self, id)
    }

    fn roles(&self) -> Vec<RoleId> {
        facet::supported::<Self>()
    }
}

impl Electric for ElectricCar {
    fn charge(&self) -> Effect {
        self.meter.record(Effect::Charged)
    }
}

/// Dual car: diesel and electric as two independently requestable facets.
#[derive(Debug, Default)]
pub struct HybridCar {
    meter: Meter,
}

impl HybridCar {
    pub fn new() -> Self {
        HybridCar::default()
    }
}

impl Facets for HybridCar {
    const FACETS: &'static [(RoleId, Accessor<Self>)] = &[
        (RoleId::DIESEL, facet::diesel),
        (RoleId::ELECTRIC, facet::electric),
    ];
}

impl Car for HybridCar {
    fn model(&self) -> &'static str {
        "hybrid"
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }

    fn get_extension(&self, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError> {
        facet::resolve(self, id)
    }

    fn roles(&self) -> Vec<RoleId> {
        facet::supported::<Self>()
    }
}

impl Diesel for HybridCar {
    fn fuel(&self) -> Effect {
        self.meter.record(Effect::Fueled)
    }
}

impl Electric for HybridCar {
    fn charge(&self) -> Effect {
        self.meter.record(Effect::Charged)
    }
}

/// Union car: exposes only the combined role, never its parts on their own.
#[derive(Debug, Default)]
pub struct HybridicCar {
    meter: Meter,
}

impl HybridicCar {
    pub fn new() -> Self {
        HybridicCar::default()
    }
}

impl Facets for HybridicCar {
    const FACETS: &'static [(RoleId, Accessor<Self>)] = &[(RoleId::HYBRIDIC, facet::hybrid)];
}

impl Car for HybridicCar {
    fn model(&self) -> &'static str {
        "hybridic"
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }

    fn get_extension(&self, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError> {
        facet::resolve(self, id)
    }

    fn roles(&self) -> Vec<RoleId> {
        facet::supported::<Self>()
    }
}

impl Hybrid for HybridicCar {
    fn fuel(&self) -> Effect {
        self.meter.record(Effect::Fueled)
    }

    fn charge(&self) -> Effect {
        self.meter.record(Effect::Charged)
    }
}
