//! Error types for role navigation and factory lookup.
//!
//! Both errors mean "requested key is not present", at different layers:
//! a product id missing from the registry, or a role id missing from a
//! specific object. Construction is infallible.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::role_id::RoleId;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// The requested role is not a facet of the object it was asked of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("no extension with id {id} found")]
#[diagnostic(
    code(rolecast::role::unknown),
    help("Request a role the object supports, or the root role")
)]
pub struct UnknownRoleError {
    pub id: RoleId,
}

impl UnknownRoleError {
    pub const fn new(id: RoleId) -> Self {
        UnknownRoleError { id }
    }
}

/// No factory has been registered under the requested product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("no factory registered for product id {id}")]
#[diagnostic(
    code(rolecast::registry::not_found),
    help("Register a factory for this id before looking it up")
)]
pub struct LookupError {
    pub id: RoleId,
}

impl LookupError {
    pub const fn new(id: RoleId) -> Self {
        LookupError { id }
    }
}

/// Any failure of a find -> create -> navigate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),
}

impl Error {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lookup(err) => {
                let mut diag = Diagnostic::error(err.to_string());
                if let Some(name) = err.id.name() {
                    diag = diag.with_context(format!(
                        "`{}` is a known identifier but nothing was installed under it",
                        name
                    ));
                }
                diag.with_suggestion(suggestions::LIST_PRODUCTS)
            }
            Error::UnknownRole(err) => {
                let diag = Diagnostic::error(err.to_string());
                let diag = match err.id.name() {
                    Some(name) => diag.with_context(format!(
                        "role `{}` is not a facet of this object",
                        name
                    )),
                    None => diag.with_context(format!("{} is not a defined role id", err.id)),
                };
                diag.with_suggestion(suggestions::LIST_PRODUCTS)
                    .with_suggestion(suggestions::LIST_ROLES)
            }
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
