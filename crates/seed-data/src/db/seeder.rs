//! Database seeding utilities.

use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::info;

use crate::builders::FixtureSet;
use crate::generators::{
    GeneratedCategory, GeneratedLanguage, GeneratedMedia, GeneratedMediaCategory,
    GeneratedMediaLanguage, GeneratedPlaylist, GeneratedPlaylistMedia,
    GeneratedSubscriptionHistory, GeneratedUser, GeneratedWatchHistory,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder for inserting generated fixture data.
///
/// All inserts for a run are staged on a single transaction and made durable
/// by one commit at the end; a failed run leaves the database untouched.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 50,
        }
    }

    /// Sets the batch size for progress reporting.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Seeds a complete fixture set in dependency order with one commit.
    pub async fn seed_fixtures(&self, fixtures: &FixtureSet) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;

        self.seed_users(&mut tx, &fixtures.users).await?;
        self.seed_medias(&mut tx, &fixtures.medias).await?;
        self.seed_categories(&mut tx, &fixtures.categories, &fixtures.media_categories)
            .await?;
        self.seed_languages(&mut tx, &fixtures.languages, &fixtures.media_languages)
            .await?;
        self.seed_watch_history(&mut tx, &fixtures.watch_history)
            .await?;
        self.seed_subscription_history(&mut tx, &fixtures.subscription_history)
            .await?;
        self.seed_playlists(&mut tx, &fixtures.playlists, &fixtures.playlist_media)
            .await?;

        tx.commit().await?;
        info!("Fixture commit complete");
        Ok(())
    }

    /// Stages user inserts.
    async fn seed_users(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        users: &[GeneratedUser],
    ) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        for chunk in users.chunks(self.batch_size) {
            for user in chunk {
                sqlx::query(
                    r#"
                    INSERT INTO users (id, username, email, password_hash, account_status, created_at)
                    VALUES ($1, $2, $3, $4, $5, NOW())
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(user.id)
                .bind(&user.username)
                .bind(&user.email)
                .bind(&user.password_hash)
                .bind(user.account_status)
                .execute(&mut **tx)
                .await?;
            }
        }

        info!("Seeded {} users", users.len());
        Ok(())
    }

    /// Stages media inserts. Casting and staff land in text[] columns.
    async fn seed_medias(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        medias: &[GeneratedMedia],
    ) -> Result<(), SeedError> {
        info!("Seeding {} medias...", medias.len());

        for (i, media) in medias.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO media (id, kind, title, short_description, long_description,
                                   cover_image, release_date, casting, staff)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(media.id)
            .bind(media.kind)
            .bind(&media.title)
            .bind(&media.short_description)
            .bind(&media.long_description)
            .bind(&media.cover_image)
            .bind(media.release_date)
            .bind(&media.casting)
            .bind(&media.staff)
            .execute(&mut **tx)
            .await?;

            if (i + 1) % self.batch_size == 0 {
                info!("  Seeded {}/{} medias", i + 1, medias.len());
            }
        }

        info!("Seeded {} medias", medias.len());
        Ok(())
    }

    /// Stages category inserts and their media associations.
    async fn seed_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: &[GeneratedCategory],
        links: &[GeneratedMediaCategory],
    ) -> Result<(), SeedError> {
        info!(
            "Seeding {} categories with {} media links...",
            categories.len(),
            links.len()
        );

        for category in categories {
            sqlx::query(
                r#"
                INSERT INTO categories (id, label, name)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(category.id)
            .bind(&category.label)
            .bind(&category.name)
            .execute(&mut **tx)
            .await?;
        }

        for link in links {
            sqlx::query(
                r#"
                INSERT INTO media_categories (media_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT (media_id, category_id) DO NOTHING
                "#,
            )
            .bind(link.media_id)
            .bind(link.category_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Stages language inserts and their media associations.
    async fn seed_languages(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        languages: &[GeneratedLanguage],
        links: &[GeneratedMediaLanguage],
    ) -> Result<(), SeedError> {
        info!(
            "Seeding {} languages with {} media links...",
            languages.len(),
            links.len()
        );

        for language in languages {
            sqlx::query(
                r#"
                INSERT INTO languages (id, code, name)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(language.id)
            .bind(&language.code)
            .bind(&language.name)
            .execute(&mut **tx)
            .await?;
        }

        for link in links {
            sqlx::query(
                r#"
                INSERT INTO media_languages (media_id, language_id)
                VALUES ($1, $2)
                ON CONFLICT (media_id, language_id) DO NOTHING
                "#,
            )
            .bind(link.media_id)
            .bind(link.language_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Stages watch-history inserts.
    async fn seed_watch_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        records: &[GeneratedWatchHistory],
    ) -> Result<(), SeedError> {
        info!("Seeding {} watch-history records...", records.len());

        for chunk in records.chunks(self.batch_size) {
            for record in chunk {
                sqlx::query(
                    r#"
                    INSERT INTO watch_history (id, user_id, media_id, last_watched_at, number_of_views)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(record.id)
                .bind(record.user_id)
                .bind(record.media_id)
                .bind(record.last_watched_at)
                .bind(record.number_of_views)
                .execute(&mut **tx)
                .await?;
            }
        }

        info!("Seeded {} watch-history records", records.len());
        Ok(())
    }

    /// Stages subscription-history inserts.
    async fn seed_subscription_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        records: &[GeneratedSubscriptionHistory],
    ) -> Result<(), SeedError> {
        info!("Seeding {} subscription records...", records.len());

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO subscription_history (id, user_id, start_date, end_date)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(record.id)
            .bind(record.user_id)
            .bind(record.start_date)
            .bind(record.end_date)
            .execute(&mut **tx)
            .await?;
        }

        info!("Seeded {} subscription records", records.len());
        Ok(())
    }

    /// Stages playlist and playlist-entry inserts.
    async fn seed_playlists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        playlists: &[GeneratedPlaylist],
        entries: &[GeneratedPlaylistMedia],
    ) -> Result<(), SeedError> {
        info!(
            "Seeding {} playlists with {} entries...",
            playlists.len(),
            entries.len()
        );

        for playlist in playlists {
            sqlx::query(
                r#"
                INSERT INTO playlists (id, user_id, name, created_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(playlist.id)
            .bind(playlist.user_id)
            .bind(&playlist.name)
            .execute(&mut **tx)
            .await?;
        }

        for chunk in entries.chunks(self.batch_size) {
            for entry in chunk {
                sqlx::query(
                    r#"
                    INSERT INTO playlist_media (id, playlist_id, media_id, added_at)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(entry.id)
                .bind(entry.playlist_id)
                .bind(entry.media_id)
                .bind(entry.added_at)
                .execute(&mut **tx)
                .await?;
            }
        }

        info!("Seeded {} playlists", playlists.len());
        Ok(())
    }

    /// Clears all seeded fixture data.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        sqlx::query("DELETE FROM playlist_media")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM playlists")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM subscription_history")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM watch_history")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM media_languages")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM media_categories")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM languages")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM categories")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM media")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        info!("All data cleared");
        Ok(())
    }
}
