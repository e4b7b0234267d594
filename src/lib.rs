//! rolecast - runtime role navigation for capability-bearing objects
//!
//! Objects expose a variable set of roles rather than a fixed type, and
//! callers switch between roles on the same object by id. Products are
//! built through factories looked up in a registry by product id, so
//! callers never name a concrete type.

pub mod core;
pub mod factory;
pub mod ops;
pub mod util;

pub use crate::core::{
    error::{Error, LookupError, UnknownRoleError},
    role::{Car, Diesel, Effect, Electric, Hybrid, Meter, RoleHandle},
    role_id::RoleId,
};

pub use factory::{Factory, FactoryRegistry, ProductKind};
