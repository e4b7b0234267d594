//! Product construction: factories, the registry, and the installer.
//!
//! ```text
//!   caller ──find(id)──▶ FactoryRegistry ──▶ Arc<dyn Factory>
//!                                                  │ create()
//!                                                  ▼
//!                                            Box<dyn Car> ──get_extension──▶ RoleHandle
//! ```

pub mod installer;
pub mod product;
pub mod registry;

pub use installer::{default_bindings, install, install_bindings, Binding};
pub use product::{
    DieselFactory, ElectricFactory, Factory, HybridFactory, HybridicFactory, ProductKind,
    ProductKindParseError,
};
pub use registry::FactoryRegistry;
