//! Data output and serialization.

pub mod plan;
pub mod yaml;

pub use plan::{OutputFormat, RoutePlan};
pub use yaml::to_yaml;
