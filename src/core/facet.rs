//! Capability tables - role resolution as a lookup, not a cast chain.
//!
//! Each concrete variant declares a constant table mapping role ids to
//! typed accessors. The root role is answered implicitly for every type,
//! so a variant cannot forget it.

use crate::core::error::UnknownRoleError;
use crate::core::role::{Car, Diesel, Electric, Hybrid, RoleHandle};
use crate::core::role_id::RoleId;

/// Produces a typed view of `T` for one role.
pub type Accessor<T> = for<'a> fn(&'a T) -> RoleHandle<'a>;

/// A type whose supported roles are fixed by a constant table.
pub trait Facets: Car + Sized + 'static {
    /// Roles beyond root, each with the accessor producing its view.
    const FACETS: &'static [(RoleId, Accessor<Self>)];
}

/// Resolve `id` against the facet table of `target`.
pub fn resolve<T: Facets>(target: &T, id: RoleId) -> Result<RoleHandle<'_>, UnknownRoleError> {
    if id == RoleId::ROOT {
        return Ok(RoleHandle::Root(target));
    }

    match T::FACETS.iter().find(|(role, _)| *role == id) {
        Some((_, accessor)) => {
            tracing::debug!("{} resolved role {}", target.model(), id.label());
            Ok(accessor(target))
        }
        None => {
            tracing::debug!("{} rejected role {}", target.model(), id.label());
            Err(UnknownRoleError::new(id))
        }
    }
}

/// Root followed by every role in the facet table.
pub fn supported<T: Facets>() -> Vec<RoleId> {
    std::iter::once(RoleId::ROOT)
        .chain(T::FACETS.iter().map(|(role, _)| *role))
        .collect()
}

/// Accessor for the diesel role.
pub fn diesel<T: Diesel>(target: &T) -> RoleHandle<'_> {
    RoleHandle::Diesel(target)
}

/// Accessor for the electric role.
pub fn electric<T: Electric>(target: &T) -> RoleHandle<'_> {
    RoleHandle::Electric(target)
}

/// Accessor for the union role.
pub fn hybrid<T: Hybrid>(target: &T) -> RoleHandle<'_> {
    RoleHandle::Hybrid(target)
}
