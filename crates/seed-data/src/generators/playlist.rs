//! Playlist and playlist-entry generation.

use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use super::user::GeneratedUser;

/// Generated playlist data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedPlaylist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
}

/// Generated playlist entry.
#[derive(Debug, Clone)]
pub struct GeneratedPlaylistMedia {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub media_id: Uuid,
    pub added_at: OffsetDateTime,
}

/// Configuration for playlist generation.
#[derive(Debug, Clone)]
pub struct PlaylistGenConfig {
    /// Entries per playlist (inclusive range).
    pub entries_per_playlist: (usize, usize),
}

impl Default for PlaylistGenConfig {
    fn default() -> Self {
        Self {
            entries_per_playlist: (1, 5),
        }
    }
}

/// Generates one playlist per user with uniformly random entries.
pub struct PlaylistGenerator {
    config: PlaylistGenConfig,
}

impl PlaylistGenerator {
    /// Creates a new playlist generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PlaylistGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PlaylistGenConfig) -> Self {
        Self { config }
    }

    /// Generates one playlist per user, named after its owner, plus a sampled
    /// number of entries over uniformly random media. The same media item may
    /// appear in a playlist more than once.
    pub fn generate_for_users(
        &self,
        users: &[GeneratedUser],
        media_ids: &[Uuid],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> (Vec<GeneratedPlaylist>, Vec<GeneratedPlaylistMedia>) {
        let (lo, hi) = self.config.entries_per_playlist;

        let mut playlists = Vec::new();
        let mut entries = Vec::new();

        for user in users {
            let playlist = GeneratedPlaylist {
                id: Uuid::new_v4(),
                user_id: user.id,
                name: format!("Playlist de {}", user.username),
            };

            if !media_ids.is_empty() {
                for _ in 0..rng.gen_range(lo..=hi) {
                    entries.push(GeneratedPlaylistMedia {
                        id: Uuid::new_v4(),
                        playlist_id: playlist.id,
                        media_id: media_ids[rng.gen_range(0..media_ids.len())],
                        added_at: base_time,
                    });
                }
            }

            playlists.push(playlist);
        }

        (playlists, entries)
    }
}

impl Default for PlaylistGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::user::UserGenerator;

    #[test]
    fn test_one_playlist_per_user_named_after_owner() {
        let playlist_gen = PlaylistGenerator::new();
        let mut rng = rand::thread_rng();

        let users = UserGenerator::new().generate_batch(8);
        let media_ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let (playlists, _) =
            playlist_gen.generate_for_users(&users, &media_ids, OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(playlists.len(), users.len());
        for (user, playlist) in users.iter().zip(&playlists) {
            assert_eq!(playlist.user_id, user.id);
            assert_eq!(playlist.name, format!("Playlist de {}", user.username));
        }
    }

    #[test]
    fn test_entry_counts_and_references() {
        let playlist_gen = PlaylistGenerator::new();
        let mut rng = rand::thread_rng();

        let users = UserGenerator::new().generate_batch(10);
        let media_ids: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
        let (playlists, entries) =
            playlist_gen.generate_for_users(&users, &media_ids, OffsetDateTime::now_utc(), &mut rng);

        for playlist in &playlists {
            let count = entries.iter().filter(|e| e.playlist_id == playlist.id).count();
            assert!((1..=5).contains(&count), "playlist has {count} entries");
        }
        for entry in &entries {
            assert!(media_ids.contains(&entry.media_id));
        }
    }

    #[test]
    fn test_playlists_without_media_have_no_entries() {
        let playlist_gen = PlaylistGenerator::new();
        let mut rng = rand::thread_rng();

        let users = UserGenerator::new().generate_batch(3);
        let (playlists, entries) =
            playlist_gen.generate_for_users(&users, &[], OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(playlists.len(), 3);
        assert!(entries.is_empty());
    }
}
