//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] stages every insert for a run on one transaction and makes
//! them durable with a single commit.

mod seeder;

pub use seeder::{SeedError, Seeder};
