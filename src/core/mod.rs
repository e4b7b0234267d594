//! Core types: role identifiers, capability contracts, and the concrete
//! variants that implement them.

pub mod error;
pub mod facet;
pub mod role;
pub mod role_id;
pub mod variants;

pub use error::{Error, LookupError, UnknownRoleError};
pub use facet::{Accessor, Facets};
pub use role::{Car, Diesel, Effect, Electric, Hybrid, Meter, RoleHandle};
pub use role_id::{RoleId, RoleIdParseError};
pub use variants::{DieselCar, ElectricCar, HybridCar, HybridicCar};
