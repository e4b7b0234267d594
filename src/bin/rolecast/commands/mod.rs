//! Command implementations

pub mod completions;
pub mod demo;
pub mod products;
pub mod roles;
pub mod run;
