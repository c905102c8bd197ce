//! Category generation with random media attachment.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use uuid::Uuid;

use catalog::models::category_slug;

/// Generated category data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub id: Uuid,
    pub label: String,
    pub name: String,
}

/// Generated media-category association.
#[derive(Debug, Clone)]
pub struct GeneratedMediaCategory {
    pub media_id: Uuid,
    pub category_id: Uuid,
}

/// The fixed category set every seeded catalog carries.
const CATEGORY_LABELS: &[&str] = &["Action", "Aventure", "Comédie", "Drame", "Fantastique"];

/// Configuration for category attachment.
#[derive(Debug, Clone)]
pub struct CategoryGenConfig {
    /// Per-(category, media) attachment probability.
    pub attach_probability: f64,
}

impl Default for CategoryGenConfig {
    fn default() -> Self {
        Self {
            attach_probability: 0.5,
        }
    }
}

/// Generates the category set and its media associations.
pub struct CategoryGenerator {
    config: CategoryGenConfig,
}

impl CategoryGenerator {
    /// Creates a new category generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: CategoryGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: CategoryGenConfig) -> Self {
        Self { config }
    }

    /// Generates the fixed category set with derived normalized names.
    pub fn generate_all(&self) -> Vec<GeneratedCategory> {
        CATEGORY_LABELS
            .iter()
            .map(|label| GeneratedCategory {
                id: Uuid::new_v4(),
                label: (*label).to_string(),
                name: category_slug(label),
            })
            .collect()
    }

    /// Attaches categories to media items with an independent Bernoulli trial
    /// per pair. No exclusivity constraint: a media item may end up with any
    /// subset of the categories, including none.
    pub fn attach_to_medias(
        &self,
        categories: &[GeneratedCategory],
        media_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedMediaCategory> {
        let coin = Bernoulli::new(self.config.attach_probability).unwrap();

        let mut links = Vec::new();
        for category in categories {
            for &media_id in media_ids {
                if coin.sample(rng) {
                    links.push(GeneratedMediaCategory {
                        media_id,
                        category_id: category.id,
                    });
                }
            }
        }
        links
    }
}

impl Default for CategoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_category_set() {
        let category_gen = CategoryGenerator::new();
        let categories = category_gen.generate_all();

        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].label, "Action");
        assert_eq!(categories[0].name, "action");
        assert_eq!(categories[2].label, "Comédie");
        assert_eq!(categories[2].name, "comdie");
    }

    #[test]
    fn test_attach_all_pairs_at_probability_one() {
        let category_gen = CategoryGenerator::with_config(CategoryGenConfig {
            attach_probability: 1.0,
        });
        let mut rng = rand::thread_rng();

        let categories = category_gen.generate_all();
        let media_ids: Vec<Uuid> = (0..7).map(|_| Uuid::new_v4()).collect();
        let links = category_gen.attach_to_medias(&categories, &media_ids, &mut rng);

        assert_eq!(links.len(), categories.len() * media_ids.len());
    }

    #[test]
    fn test_attach_nothing_at_probability_zero() {
        let category_gen = CategoryGenerator::with_config(CategoryGenConfig {
            attach_probability: 0.0,
        });
        let mut rng = rand::thread_rng();

        let categories = category_gen.generate_all();
        let media_ids: Vec<Uuid> = (0..7).map(|_| Uuid::new_v4()).collect();
        let links = category_gen.attach_to_medias(&categories, &media_ids, &mut rng);

        assert!(links.is_empty());
    }

    #[test]
    fn test_links_reference_generated_entities() {
        let category_gen = CategoryGenerator::new();
        let mut rng = rand::thread_rng();

        let categories = category_gen.generate_all();
        let media_ids: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        let links = category_gen.attach_to_medias(&categories, &media_ids, &mut rng);

        let category_ids: std::collections::HashSet<_> =
            categories.iter().map(|c| c.id).collect();
        for link in &links {
            assert!(category_ids.contains(&link.category_id));
            assert!(media_ids.contains(&link.media_id));
        }
    }
}
