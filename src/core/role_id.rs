//! Role identifiers - the closed set of capability names.
//!
//! The same identifier space is reused to name products in the factory
//! registry, so a product id and a role id may share a number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier naming a role (capability contract) or a product kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u32);

impl RoleId {
    /// Universal root role. Every object answers it with its own identity.
    pub const ROOT: RoleId = RoleId(0);
    /// Diesel capability (`fuel`).
    pub const DIESEL: RoleId = RoleId(1);
    /// Dual product: diesel and electric as separate facets.
    pub const HYBRID: RoleId = RoleId(2);
    /// Union capability requiring both `fuel` and `charge`.
    pub const HYBRIDIC: RoleId = RoleId(3);
    /// Electric capability (`charge`).
    pub const ELECTRIC: RoleId = RoleId(4);

    /// All defined identifiers, in numeric order.
    pub const DEFINED: [RoleId; 5] = [
        RoleId::ROOT,
        RoleId::DIESEL,
        RoleId::HYBRID,
        RoleId::HYBRIDIC,
        RoleId::ELECTRIC,
    ];

    /// Wrap a raw identifier. Values outside the defined set are allowed;
    /// objects and registries simply will not know them.
    pub const fn new(raw: u32) -> Self {
        RoleId(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Symbolic name for a defined identifier.
    pub fn name(self) -> Option<&'static str> {
        match self {
            RoleId::ROOT => Some("root"),
            RoleId::DIESEL => Some("diesel"),
            RoleId::HYBRID => Some("hybrid"),
            RoleId::HYBRIDIC => Some("hybridic"),
            RoleId::ELECTRIC => Some("electric"),
            _ => None,
        }
    }

    /// Whether this identifier belongs to the defined set.
    pub fn is_defined(self) -> bool {
        self.name().is_some()
    }

    /// Human-readable label, e.g. `electric (4)` or `99`.
    pub fn label(self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", name, self.0),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoleId {
    fn from(raw: u32) -> Self {
        RoleId(raw)
    }
}

impl FromStr for RoleId {
    type Err = RoleIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<u32>() {
            return Ok(RoleId(raw));
        }
        RoleId::DEFINED
            .into_iter()
            .find(|id| id.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
            .ok_or_else(|| RoleIdParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid role identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role id '{0}', expected a number or one of: root, diesel, hybrid, hybridic, electric")]
pub struct RoleIdParseError(pub String);
