//! Fluent builder for constructing fixture sets.

use std::ops::RangeInclusive;
use std::time::Instant;

use rand::Rng;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use catalog::models::MediaKind;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::generators::{
    category::{CategoryGenConfig, CategoryGenerator, GeneratedCategory, GeneratedMediaCategory},
    language::{GeneratedLanguage, GeneratedMediaLanguage, LanguageGenConfig, LanguageGenerator},
    media::{GeneratedMedia, MediaGenConfig, MediaGenerator},
    playlist::{GeneratedPlaylist, GeneratedPlaylistMedia, PlaylistGenConfig, PlaylistGenerator},
    subscription::{GeneratedSubscriptionHistory, SubscriptionGenerator},
    user::{GeneratedUser, UserGenConfig, UserGenerator},
    watch::{GeneratedWatchHistory, WatchGenConfig, WatchHistoryGenerator},
};

/// Result of building (and optionally seeding) a fixture set.
#[derive(Debug)]
pub struct FixtureSet {
    pub users: Vec<GeneratedUser>,
    pub medias: Vec<GeneratedMedia>,
    pub categories: Vec<GeneratedCategory>,
    pub media_categories: Vec<GeneratedMediaCategory>,
    pub languages: Vec<GeneratedLanguage>,
    pub media_languages: Vec<GeneratedMediaLanguage>,
    pub watch_history: Vec<GeneratedWatchHistory>,
    pub subscription_history: Vec<GeneratedSubscriptionHistory>,
    pub playlists: Vec<GeneratedPlaylist>,
    pub playlist_media: Vec<GeneratedPlaylistMedia>,
    /// Metrics from fixture generation (populated if metrics tracking enabled).
    pub metrics: Option<FixtureMetrics>,
}

/// Performance metrics from fixture generation.
#[derive(Debug, Clone)]
pub struct FixtureMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent seeding the database (milliseconds, 0 if build_data used).
    pub seeding_time_ms: u64,
    /// Number of users generated.
    pub user_count: usize,
    /// Number of media items generated (movies plus series).
    pub media_count: usize,
    /// Total association and history records generated.
    pub record_count: usize,
}

/// Builder for creating complete fixture sets.
///
/// # Example
///
/// ```rust,ignore
/// let result = FixtureBuilder::default_fixtures()
///     .with_attach_probability(0.5)
///     .with_metrics(true)
///     .build(&pool, &mut rng)
///     .await?;
/// ```
pub struct FixtureBuilder {
    // User configuration
    user_count: RangeInclusive<usize>,
    user_config: UserGenConfig,

    // Media configuration
    movie_count: RangeInclusive<usize>,
    serie_count: RangeInclusive<usize>,
    cast_size: RangeInclusive<usize>,
    staff_size: RangeInclusive<usize>,

    // Taxonomy configuration
    attach_probability: f64,

    // History and playlist configuration
    watches_per_user: RangeInclusive<usize>,
    entries_per_playlist: RangeInclusive<usize>,

    // Misc
    base_time: Option<OffsetDateTime>,
    track_metrics: bool,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBuilder {
    /// Creates a new fixture builder with default settings.
    pub fn new() -> Self {
        Self {
            user_count: 10..=20,
            user_config: UserGenConfig::default(),
            movie_count: 10..=20,
            serie_count: 10..=20,
            cast_size: 0..=0,
            staff_size: 0..=0,
            attach_probability: 0.5,
            watches_per_user: 1..=5,
            entries_per_playlist: 1..=5,
            base_time: None,
            track_metrics: false,
        }
    }

    /// Creates a builder from a [`SeedConfig`].
    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new()
            .with_user_count(config.user_count.0..=config.user_count.1)
            .with_movie_count(config.movie_count.0..=config.movie_count.1)
            .with_serie_count(config.serie_count.0..=config.serie_count.1)
            .with_watches_per_user(config.watches_per_user.0..=config.watches_per_user.1)
            .with_entries_per_playlist(
                config.entries_per_playlist.0..=config.entries_per_playlist.1,
            )
            .with_attach_probability(config.attach_probability)
    }

    /// Sets the range of users to generate.
    pub fn with_user_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.user_count = range;
        self
    }

    /// Sets the user generation configuration.
    pub fn with_user_config(mut self, config: UserGenConfig) -> Self {
        self.user_config = config;
        self
    }

    /// Sets the range of movies to generate.
    pub fn with_movie_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.movie_count = range;
        self
    }

    /// Sets the range of series to generate.
    pub fn with_serie_count(mut self, range: RangeInclusive<usize>) -> Self {
        self.serie_count = range;
        self
    }

    /// Sets the casting list size per media.
    pub fn with_cast_size(mut self, range: RangeInclusive<usize>) -> Self {
        self.cast_size = range;
        self
    }

    /// Sets the staff list size per media.
    pub fn with_staff_size(mut self, range: RangeInclusive<usize>) -> Self {
        self.staff_size = range;
        self
    }

    /// Sets the per-pair category/language attachment probability.
    pub fn with_attach_probability(mut self, probability: f64) -> Self {
        self.attach_probability = probability;
        self
    }

    /// Sets the range of watch-history records per user.
    pub fn with_watches_per_user(mut self, range: RangeInclusive<usize>) -> Self {
        self.watches_per_user = range;
        self
    }

    /// Sets the range of entries per playlist.
    pub fn with_entries_per_playlist(mut self, range: RangeInclusive<usize>) -> Self {
        self.entries_per_playlist = range;
        self
    }

    /// Pins the timestamp used for release dates, histories and subscriptions.
    /// Defaults to the wall clock at build time.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Enables metrics tracking for performance analysis.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the fixture set (generates data but doesn't touch a database).
    pub fn build_data(&self, rng: &mut impl Rng) -> FixtureSet {
        let start_time = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };
        let base_time = self.base_time.unwrap_or_else(OffsetDateTime::now_utc);

        // Generate users
        let user_gen = UserGenerator::with_config(self.user_config.clone());
        let users = user_gen.generate_batch(rng.gen_range(self.user_count.clone()));
        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        // Generate movies and series
        let media_gen = MediaGenerator::with_config(MediaGenConfig {
            cast_size: pair(&self.cast_size),
            staff_size: pair(&self.staff_size),
        });
        let movie_count = rng.gen_range(self.movie_count.clone());
        let serie_count = rng.gen_range(self.serie_count.clone());
        let mut medias =
            media_gen.generate_batch(MediaKind::Movie, movie_count, base_time.date(), rng);
        medias.extend(media_gen.generate_batch(
            MediaKind::Serie,
            serie_count,
            base_time.date(),
            rng,
        ));
        let media_ids: Vec<Uuid> = medias.iter().map(|m| m.id).collect();

        // Generate taxonomies and attach them to media
        let category_gen = CategoryGenerator::with_config(CategoryGenConfig {
            attach_probability: self.attach_probability,
        });
        let categories = category_gen.generate_all();
        let media_categories = category_gen.attach_to_medias(&categories, &media_ids, rng);

        let language_gen = LanguageGenerator::with_config(LanguageGenConfig {
            attach_probability: self.attach_probability,
        });
        let languages = language_gen.generate_all();
        let media_languages = language_gen.attach_to_medias(&languages, &media_ids, rng);

        // Generate per-user histories
        let watch_gen = WatchHistoryGenerator::with_config(WatchGenConfig {
            watches_per_user: pair(&self.watches_per_user),
            ..Default::default()
        });
        let watch_history = watch_gen.generate_for_users(&user_ids, &media_ids, base_time, rng);

        let subscription_history =
            SubscriptionGenerator::new().generate_for_users(&user_ids, base_time);

        // Generate playlists
        let playlist_gen = PlaylistGenerator::with_config(PlaylistGenConfig {
            entries_per_playlist: pair(&self.entries_per_playlist),
        });
        let (playlists, playlist_media) =
            playlist_gen.generate_for_users(&users, &media_ids, base_time, rng);

        // Collect metrics if tracking enabled
        let metrics = start_time.map(|start| {
            let record_count = media_categories.len()
                + media_languages.len()
                + watch_history.len()
                + subscription_history.len()
                + playlist_media.len();
            FixtureMetrics {
                generation_time_ms: start.elapsed().as_millis() as u64,
                seeding_time_ms: 0, // Set by build() if database seeding occurs
                user_count: users.len(),
                media_count: medias.len(),
                record_count,
            }
        });

        FixtureSet {
            users,
            medias,
            categories,
            media_categories,
            languages,
            media_languages,
            watch_history,
            subscription_history,
            playlists,
            playlist_media,
            metrics,
        }
    }

    /// Builds and seeds the fixture set into the database.
    pub async fn build(
        self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<FixtureSet, SeedError> {
        let track_metrics = self.track_metrics;
        let mut result = self.build_data(rng);

        let seed_start = if track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        let seeder = Seeder::new(pool.clone());
        seeder.seed_fixtures(&result).await?;

        // Update seeding time in metrics
        if let (Some(start), Some(metrics)) = (seed_start, result.metrics.as_mut()) {
            metrics.seeding_time_ms = start.elapsed().as_millis() as u64;
        }

        Ok(result)
    }
}

/// Preset fixture shapes for common needs.
impl FixtureBuilder {
    /// The standard fixture load: 10-20 users, 10-20 movies and 10-20 series
    /// with randomly attached taxonomies, per-user watch history,
    /// subscriptions and playlists.
    pub fn default_fixtures() -> Self {
        Self::new()
    }

    /// Smallest coherent dataset: two users and three media items.
    pub fn minimal() -> Self {
        Self::new()
            .with_user_count(2..=2)
            .with_movie_count(2..=2)
            .with_serie_count(1..=1)
    }

    /// Larger demo catalog with populated casting and staff lists.
    pub fn demo_catalog() -> Self {
        Self::new()
            .with_user_count(40..=60)
            .with_movie_count(30..=50)
            .with_serie_count(30..=50)
            .with_cast_size(2..=5)
            .with_staff_size(1..=3)
            .with_metrics(true)
    }
}

fn pair(range: &RangeInclusive<usize>) -> (usize, usize) {
    (*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_data() {
        let mut rng = rand::thread_rng();

        let result = FixtureBuilder::new().build_data(&mut rng);

        assert!((10..=20).contains(&result.users.len()));
        assert_eq!(result.categories.len(), 5);
        assert_eq!(result.languages.len(), 3);
        assert_eq!(result.subscription_history.len(), result.users.len());
        assert_eq!(result.playlists.len(), result.users.len());
    }

    #[test]
    fn test_preset_minimal() {
        let builder = FixtureBuilder::minimal();
        assert_eq!(builder.user_count, 2..=2);
        assert_eq!(builder.movie_count, 2..=2);
        assert_eq!(builder.serie_count, 1..=1);
    }

    #[test]
    fn test_preset_demo_catalog() {
        let builder = FixtureBuilder::demo_catalog();
        assert_eq!(builder.cast_size, 2..=5);
        assert!(builder.track_metrics);
    }

    #[test]
    fn test_from_config_round_trip() {
        let config = SeedConfig {
            user_count: (3, 4),
            attach_probability: 0.25,
            ..Default::default()
        };
        let builder = FixtureBuilder::from_config(&config);

        assert_eq!(builder.user_count, 3..=4);
        assert_eq!(builder.attach_probability, 0.25);
    }

    #[test]
    fn test_metrics_tracking() {
        let mut rng = rand::thread_rng();

        let without = FixtureBuilder::minimal().build_data(&mut rng);
        assert!(without.metrics.is_none());

        let with = FixtureBuilder::minimal().with_metrics(true).build_data(&mut rng);
        let metrics = with.metrics.unwrap();
        assert_eq!(metrics.user_count, 2);
        assert_eq!(metrics.media_count, 3);
        assert!(metrics.record_count > 0);
        // Seeding time should be 0 for build_data (no database)
        assert_eq!(metrics.seeding_time_ms, 0);
    }

    #[test]
    fn test_reproducible_with_fixed_seed() {
        let build = || {
            let mut rng = StdRng::seed_from_u64(9001);
            FixtureBuilder::new().build_data(&mut rng)
        };
        let first = build();
        let second = build();

        assert_eq!(first.users.len(), second.users.len());
        assert_eq!(first.medias.len(), second.medias.len());
        assert_eq!(first.media_categories.len(), second.media_categories.len());
        assert_eq!(first.watch_history.len(), second.watch_history.len());

        let titles = |set: &FixtureSet| -> Vec<String> {
            set.medias.iter().map(|m| m.title.clone()).collect()
        };
        assert_eq!(titles(&first), titles(&second));
    }
}
