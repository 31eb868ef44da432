//! External API integrations

pub mod classifier;
pub mod weather;

pub use classifier::{ClassifierClient, LeafClassifier};
pub use weather::{WeatherClient, WeatherProvider};
