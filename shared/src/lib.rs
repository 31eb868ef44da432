//! Shared types and rules for the AgriLeaf advisory service
//!
//! This crate holds everything that does not need I/O: the disease and
//! weather models, the reference catalogs, the weather risk rules, and the
//! localization layer. It is used by the backend and, via WASM, by the
//! browser frontend.

pub mod assessment;
pub mod localization;
pub mod models;
pub mod types;
pub mod validation;

pub use assessment::*;
pub use localization::*;
pub use models::*;
pub use types::*;
pub use validation::*;
