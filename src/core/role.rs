//! Capability contracts and the typed handle returned by role navigation.
//!
//! `Car` is the root contract every object implements. `Diesel` and
//! `Electric` are single capabilities; `Hybrid` is a union contract that
//! demands both operation sets on its own, rather than inheriting from the
//! other two.

use std::cell::Cell;
use std::fmt;

use crate::core::error::UnknownRoleError;
use crate::core::role_id::RoleId;

/// Observable outcome of a capability operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fueled,
    Charged,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Fueled => write!(f, "Filled up with Diesel"),
            Effect::Charged => write!(f, "Charged with Electricity"),
        }
    }
}

/// Per-instance probe counting the effects applied to one object.
///
/// Every handle onto the same object reads the same meter.
#[derive(Debug, Default)]
pub struct Meter {
    fills: Cell<u32>,
    charges: Cell<u32>,
}

impl Meter {
    pub fn new() -> Self {
        Meter::default()
    }

    /// Record an effect and hand it back.
    pub fn record(&self, effect: Effect) -> Effect {
        match effect {
            Effect::Fueled => self.fills.set(self.fills.get() + 1),
            Effect::Charged => self.charges.set(self.charges.get() + 1),
        }
        tracing::info!("{}", effect);
        effect
    }

    pub fn fills(&self) -> u32 {
        self.fills.get()
    }

    pub fn charges(&self) -> u32 {
        self.charges.get()
    }

    /// Total number of effects recorded.
    pub fn total(&self) -> u32 {
        self.fills() + self.charges()
    }
}

/// Root contract. Every role-bearing object implements it.
pub trait Car {
    /// Short model name of the concrete variant.
    fn model(&self) -> &'static str;

    /// The object's effect probe.
    fn meter(&self) -> &Meter;

    /// Switch to the requested role on this same object.
    ///
    /// Succeeds for the root role and every role the object implements;
    /// fails with [`UnknownRoleError`] for anything else. Never mutates
    /// the object.
    fn get_extension(&self, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError>;

    /// Supported role ids, root first.
    fn roles(&self) -> Vec<RoleId>;

    /// Check if a role is supported.
    fn supports(&self, id: RoleId) -> bool {
        self.roles().contains(&id)
    }
}

/// Diesel capability.
pub trait Diesel: Car {
    fn fuel(&self) -> Effect;
}

/// Electric capability.
pub trait Electric: Car {
    fn charge(&self) -> Effect;
}

/// Union capability: one role that requires both operation sets.
pub trait Hybrid: Car {
    fn fuel(&self) -> Effect;
    fn charge(&self) -> Effect;
}

/// Non-owning view onto an object, typed for one role.
///
/// Handles borrow from the product returned by a factory. Switching roles
/// through [`RoleHandle::get_extension`] yields another view of the same
/// object; nothing is constructed.
#[derive(Clone, Copy)]
pub enum RoleHandle<'a> {
    Root(&'a dyn Car),
    Diesel(&'a dyn Diesel),
    Electric(&'a dyn Electric),
    Hybrid(&'a dyn Hybrid),
}

impl<'a> RoleHandle<'a> {
    /// The role this handle is typed for.
    pub fn role(&self) -> RoleId {
        match self {
            RoleHandle::Root(_) => RoleId::ROOT,
            RoleHandle::Diesel(_) => RoleId::DIESEL,
            RoleHandle::Electric(_) => RoleId::ELECTRIC,
            RoleHandle::Hybrid(_) => RoleId::HYBRIDIC,
        }
    }

    /// Navigate to another role of the underlying object.
    pub fn get_extension(self, id: RoleId) -> Result<RoleHandle<'a>, UnknownRoleError> {
        match self {
            RoleHandle::Root(car) => car.get_extension(id),
            RoleHandle::Diesel(car) => car.get_extension(id),
            RoleHandle::Electric(car) => car.get_extension(id),
            RoleHandle::Hybrid(car) => car.get_extension(id),
        }
    }

    pub fn model(&self) -> &'static str {
        match self {
            RoleHandle::Root(car) => car.model(),
            RoleHandle::Diesel(car) => car.model(),
            RoleHandle::Electric(car) => car.model(),
            RoleHandle::Hybrid(car) => car.model(),
        }
    }

    pub fn meter(&self) -> &'a Meter {
        match *self {
            RoleHandle::Root(car) => car.meter(),
            RoleHandle::Diesel(car) => car.meter(),
            RoleHandle::Electric(car) => car.meter(),
            RoleHandle::Hybrid(car) => car.meter(),
        }
    }

    pub fn as_diesel(&self) -> Option<&'a dyn Diesel> {
        match *self {
            RoleHandle::Diesel(car) => Some(car),
            _ => None,
        }
    }

    pub fn as_electric(&self) -> Option<&'a dyn Electric> {
        match *self {
            RoleHandle::Electric(car) => Some(car),
            _ => None,
        }
    }

    pub fn as_hybrid(&self) -> Option<&'a dyn Hybrid> {
        match *self {
            RoleHandle::Hybrid(car) => Some(car),
            _ => None,
        }
    }

    /// Invoke every operation of this role, in declaration order.
    ///
    /// The root role has no operations of its own.
    pub fn exercise(&self) -> Vec<Effect> {
        match *self {
            RoleHandle::Root(_) => Vec::new(),
            RoleHandle::Diesel(car) => vec![car.fuel()],
            RoleHandle::Electric(car) => vec![car.charge()],
            RoleHandle::Hybrid(car) => vec![car.fuel(), car.charge()],
        }
    }

    /// Address of the underlying object, without vtable metadata.
    pub fn addr(&self) -> *const () {
        match *self {
            RoleHandle::Root(car) => std::ptr::from_ref(car).cast::<()>(),
            RoleHandle::Diesel(car) => std::ptr::from_ref(car).cast::<()>(),
            RoleHandle::Electric(car) => std::ptr::from_ref(car).cast::<()>(),
            RoleHandle::Hybrid(car) => std::ptr::from_ref(car).cast::<()>(),
        }
    }

    /// Whether both handles view the same object, whatever their roles.
    pub fn same_object(&self, other: &RoleHandle<'_>) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl<'a> From<&'a dyn Car> for RoleHandle<'a> {
    fn from(car: &'a dyn Car) -> Self {
        RoleHandle::Root(car)
    }
}

impl fmt::Debug for RoleHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleHandle")
            .field("role", &self.role())
            .field("model", &self.model())
            .field("addr", &self.addr())
            .finish()
    }
}
