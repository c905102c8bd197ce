use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status", rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Banned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "media_kind", rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Serie,
}

/// Derives a category's normalized name from its display label: lowercased,
/// ASCII-alphanumeric characters only. Accented characters are dropped, not
/// transliterated.
pub fn category_slug(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases_and_strips() {
        assert_eq!(category_slug("Action"), "action");
        assert_eq!(category_slug("Science-Fiction"), "sciencefiction");
        assert_eq!(category_slug("Comédie"), "comdie");
    }

    #[test]
    fn test_slug_is_idempotent() {
        for label in ["Action", "Aventure", "Comédie", "Drame", "Fantastique"] {
            let once = category_slug(label);
            assert_eq!(category_slug(&once), once);
        }
    }
}
