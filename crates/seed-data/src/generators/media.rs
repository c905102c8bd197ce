//! Movie and serie generation.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use time::Date;
use uuid::Uuid;

use catalog::models::MediaKind;

/// Generated media data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedMedia {
    pub id: Uuid,
    pub kind: MediaKind,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub cover_image: String,
    pub release_date: Date,
    pub casting: Vec<String>,
    pub staff: Vec<String>,
}

/// Configuration for media generation.
#[derive(Debug, Clone)]
pub struct MediaGenConfig {
    /// Casting names per media (inclusive range). `(0, 0)` leaves the list
    /// empty, the default fixture shape.
    pub cast_size: (usize, usize),
    /// Staff names per media (inclusive range).
    pub staff_size: (usize, usize),
}

impl Default for MediaGenConfig {
    fn default() -> Self {
        Self {
            cast_size: (0, 0),
            staff_size: (0, 0),
        }
    }
}

/// Generates movies and series with placeholder text fields.
pub struct MediaGenerator {
    config: MediaGenConfig,
}

impl MediaGenerator {
    /// Creates a new media generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: MediaGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: MediaGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single media item of the given kind.
    pub fn generate(
        &self,
        kind: MediaKind,
        index: usize,
        release_date: Date,
        rng: &mut impl Rng,
    ) -> GeneratedMedia {
        let prefix = match kind {
            MediaKind::Movie => "movie",
            MediaKind::Serie => "serie",
        };
        let title = format!("{prefix}_{index}");
        let short_description = format!("short description for {title}");
        let long_description = format!("long description for {title}");

        GeneratedMedia {
            id: Uuid::new_v4(),
            kind,
            title,
            short_description,
            long_description,
            cover_image: format!("cover_image_{index}.png"),
            release_date,
            casting: self.generate_names(self.config.cast_size, rng),
            staff: self.generate_names(self.config.staff_size, rng),
        }
    }

    /// Generates multiple media items of the same kind.
    pub fn generate_batch(
        &self,
        kind: MediaKind,
        count: usize,
        release_date: Date,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMedia> {
        (0..count)
            .map(|i| self.generate(kind, i, release_date, rng))
            .collect()
    }

    /// Generates a list of person names within the configured size range.
    fn generate_names(&self, (lo, hi): (usize, usize), rng: &mut impl Rng) -> Vec<String> {
        let count = rng.gen_range(lo..=hi);
        (0..count).map(|_| Name().fake_with_rng(rng)).collect()
    }
}

impl Default for MediaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn release_date() -> Date {
        Date::from_calendar_date(2026, Month::August, 6).unwrap()
    }

    #[test]
    fn test_generate_movie() {
        let media_gen = MediaGenerator::new();
        let mut rng = rand::thread_rng();
        let media = media_gen.generate(MediaKind::Movie, 4, release_date(), &mut rng);

        assert_eq!(media.kind, MediaKind::Movie);
        assert_eq!(media.title, "movie_4");
        assert_eq!(media.short_description, "short description for movie_4");
        assert_eq!(media.cover_image, "cover_image_4.png");
        assert!(media.casting.is_empty());
        assert!(media.staff.is_empty());
    }

    #[test]
    fn test_generate_batch_titles_by_kind() {
        let media_gen = MediaGenerator::new();
        let mut rng = rand::thread_rng();
        let series = media_gen.generate_batch(MediaKind::Serie, 3, release_date(), &mut rng);

        assert_eq!(series.len(), 3);
        for (i, media) in series.iter().enumerate() {
            assert_eq!(media.title, format!("serie_{i}"));
        }
    }

    #[test]
    fn test_cast_and_staff_sizes() {
        let media_gen = MediaGenerator::with_config(MediaGenConfig {
            cast_size: (2, 5),
            staff_size: (1, 3),
        });
        let mut rng = rand::thread_rng();
        let media = media_gen.generate(MediaKind::Movie, 0, release_date(), &mut rng);

        assert!((2..=5).contains(&media.casting.len()));
        assert!((1..=3).contains(&media.staff.len()));
        assert!(media.casting.iter().all(|name| !name.is_empty()));
    }
}
