//! Configuration types for fixture generation.

use serde::{Deserialize, Serialize};

/// Configuration for a full seeding run.
///
/// Count fields are inclusive `(min, max)` ranges sampled once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: (usize, usize),
    /// Number of movies to generate.
    pub movie_count: (usize, usize),
    /// Number of series to generate.
    pub serie_count: (usize, usize),
    /// Watch-history records per user.
    pub watches_per_user: (usize, usize),
    /// Entries per playlist.
    pub entries_per_playlist: (usize, usize),
    /// Probability that a given category or language attaches to a given
    /// media item. Trials are independent per pair; a media item may end up
    /// with no categories or languages at all.
    pub attach_probability: f64,
    /// Batch size for progress reporting during inserts.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: (10, 20),
            movie_count: (10, 20),
            serie_count: (10, 20),
            watches_per_user: (1, 5),
            entries_per_playlist: (1, 5),
            attach_probability: 0.5,
            batch_size: 50,
        }
    }
}
