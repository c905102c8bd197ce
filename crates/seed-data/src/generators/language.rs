//! Language generation with random media attachment.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use uuid::Uuid;

/// Generated language data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedLanguage {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// Generated media-language association.
#[derive(Debug, Clone)]
pub struct GeneratedMediaLanguage {
    pub media_id: Uuid,
    pub language_id: Uuid,
}

/// The fixed language set every seeded catalog carries.
const LANGUAGES: &[(&str, &str)] = &[("fr", "Français"), ("en", "Anglais"), ("es", "Espagnol")];

/// Configuration for language attachment.
#[derive(Debug, Clone)]
pub struct LanguageGenConfig {
    /// Per-(language, media) attachment probability.
    pub attach_probability: f64,
}

impl Default for LanguageGenConfig {
    fn default() -> Self {
        Self {
            attach_probability: 0.5,
        }
    }
}

/// Generates the language set and its media associations.
pub struct LanguageGenerator {
    config: LanguageGenConfig,
}

impl LanguageGenerator {
    /// Creates a new language generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: LanguageGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: LanguageGenConfig) -> Self {
        Self { config }
    }

    /// Generates the fixed language set.
    pub fn generate_all(&self) -> Vec<GeneratedLanguage> {
        LANGUAGES
            .iter()
            .map(|(code, name)| GeneratedLanguage {
                id: Uuid::new_v4(),
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect()
    }

    /// Attaches languages to media items with an independent Bernoulli trial
    /// per pair, the same policy as category attachment.
    pub fn attach_to_medias(
        &self,
        languages: &[GeneratedLanguage],
        media_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMediaLanguage> {
        let coin = Bernoulli::new(self.config.attach_probability).unwrap();

        let mut links = Vec::new();
        for language in languages {
            for &media_id in media_ids {
                if coin.sample(rng) {
                    links.push(GeneratedMediaLanguage {
                        media_id,
                        language_id: language.id,
                    });
                }
            }
        }
        links
    }
}

impl Default for LanguageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_language_set() {
        let language_gen = LanguageGenerator::new();
        let languages = language_gen.generate_all();

        assert_eq!(languages.len(), 3);
        assert_eq!(languages[0].code, "fr");
        assert_eq!(languages[0].name, "Français");
        assert_eq!(languages[1].code, "en");
    }

    #[test]
    fn test_attachment_bounds() {
        let language_gen = LanguageGenerator::new();
        let mut rng = rand::thread_rng();

        let languages = language_gen.generate_all();
        let media_ids: Vec<Uuid> = (0..20).map(|_| Uuid::new_v4()).collect();
        let links = language_gen.attach_to_medias(&languages, &media_ids, &mut rng);

        // At p=0.5 the link count is bounded by the full cross product
        assert!(links.len() <= languages.len() * media_ids.len());
        for link in &links {
            assert!(media_ids.contains(&link.media_id));
        }
    }
}
