//! Fixture-data generation for StreamVault.
//!
//! This crate provides tools for generating sample users, movies, series,
//! taxonomies, viewing histories, subscriptions and playlists to populate a
//! development or integration-test database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let fixtures = FixtureBuilder::default_fixtures()
//!     .build(&pool, &mut rng)
//!     .await?;
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;

// Re-export the shared domain vocabulary from the catalog crate
pub use catalog::models::{AccountStatus, MediaKind, category_slug};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{FixtureBuilder, FixtureMetrics, FixtureSet};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        CategoryGenerator, LanguageGenerator, MediaGenerator, PlaylistGenerator,
        SubscriptionGenerator, UserGenerator, WatchHistoryGenerator,
    };
    pub use crate::{AccountStatus, MediaKind};
}
