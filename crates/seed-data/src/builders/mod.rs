//! Fluent construction of complete fixture sets.

mod fixture;

pub use fixture::{FixtureBuilder, FixtureMetrics, FixtureSet};
