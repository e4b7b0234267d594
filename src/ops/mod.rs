//! High-level operations driven by the CLI.

pub mod demo;
pub mod inspect;
pub mod navigate;

pub use demo::demo;
pub use inspect::{inspect, ProductSummary};
pub use navigate::{navigate, navigate_with, Navigation, Step};
