//! Business logic services for the AgriLeaf advisory server

pub mod advisory;
pub mod diagnosis;

pub use advisory::AdvisoryService;
pub use diagnosis::DiagnosisService;
