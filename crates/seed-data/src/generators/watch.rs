//! Watch-history generation.

use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

/// Generated watch-history record ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedWatchHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_id: Uuid,
    pub last_watched_at: OffsetDateTime,
    pub number_of_views: i32,
}

/// Configuration for watch-history generation.
#[derive(Debug, Clone)]
pub struct WatchGenConfig {
    /// Watch-history records per user (inclusive range).
    pub watches_per_user: (usize, usize),
    /// View count per record (inclusive range).
    pub views: (i32, i32),
}

impl Default for WatchGenConfig {
    fn default() -> Self {
        Self {
            watches_per_user: (1, 5),
            views: (1, 10),
        }
    }
}

/// Generates per-user viewing records over uniformly random media.
pub struct WatchHistoryGenerator {
    config: WatchGenConfig,
}

impl WatchHistoryGenerator {
    /// Creates a new watch-history generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: WatchGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: WatchGenConfig) -> Self {
        Self { config }
    }

    /// Generates watch-history records for every user.
    ///
    /// Each user gets a sampled number of records, each pointing at a
    /// uniformly random media item. An empty media list yields no records.
    pub fn generate_for_users(
        &self,
        user_ids: &[Uuid],
        media_ids: &[Uuid],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedWatchHistory> {
        if media_ids.is_empty() {
            return Vec::new();
        }

        let (lo, hi) = self.config.watches_per_user;
        let (views_lo, views_hi) = self.config.views;

        let mut records = Vec::new();
        for &user_id in user_ids {
            for _ in 0..rng.gen_range(lo..=hi) {
                records.push(GeneratedWatchHistory {
                    id: Uuid::new_v4(),
                    user_id,
                    media_id: media_ids[rng.gen_range(0..media_ids.len())],
                    last_watched_at: base_time,
                    number_of_views: rng.gen_range(views_lo..=views_hi),
                });
            }
        }
        records
    }
}

impl Default for WatchHistoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
