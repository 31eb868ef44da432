//! Domain models for the AgriLeaf advisory service

mod care;
mod classification;
mod disease;
mod risk;
mod treatment;
mod weather;

pub use care::*;
pub use classification::*;
pub use disease::*;
pub use risk::*;
pub use treatment::*;
pub use weather::*;
