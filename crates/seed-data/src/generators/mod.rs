//! Entity generators for fixture data.
//!
//! This module provides generators for creating sample platform entities:
//! - [`UserGenerator`]: accounts with deterministic credentials
//! - [`MediaGenerator`]: movies and series
//! - [`CategoryGenerator`]: the fixed category set with random media attachment
//! - [`LanguageGenerator`]: the fixed language set with random media attachment
//! - [`WatchHistoryGenerator`]: per-user viewing records
//! - [`SubscriptionGenerator`]: one subscription span per user
//! - [`PlaylistGenerator`]: per-user playlists with random entries

pub mod category;
pub mod language;
pub mod media;
pub mod playlist;
pub mod subscription;
pub mod user;
pub mod watch;

pub use category::{CategoryGenerator, GeneratedCategory, GeneratedMediaCategory};
pub use language::{GeneratedLanguage, GeneratedMediaLanguage, LanguageGenerator};
pub use media::{GeneratedMedia, MediaGenerator};
pub use playlist::{GeneratedPlaylist, GeneratedPlaylistMedia, PlaylistGenerator};
pub use subscription::{GeneratedSubscriptionHistory, SubscriptionGenerator};
pub use user::{GeneratedUser, UserGenerator};
pub use watch::{GeneratedWatchHistory, WatchHistoryGenerator};
