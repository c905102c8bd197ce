//! User generation with deterministic credentials.

use uuid::Uuid;

use catalog::auth;
use catalog::models::AccountStatus;

/// Generated user data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub account_status: AccountStatus,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Placeholder password shared by every generated account.
    pub password: String,
    /// Domain for generated email addresses.
    pub email_domain: String,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            password: "motdepasse".to_string(),
            email_domain: "example.com".to_string(),
        }
    }
}

/// Generates platform accounts with index-derived usernames and emails.
pub struct UserGenerator {
    config: UserGenConfig,
    password_hash: String,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(UserGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        // Hash using the same algorithm the auth system uses. Done once:
        // every fixture account shares the placeholder password.
        let password_hash =
            auth::hash_password(&config.password).expect("Failed to hash password");
        Self {
            config,
            password_hash,
        }
    }

    /// Generates a single active user.
    pub fn generate(&self, index: usize) -> GeneratedUser {
        GeneratedUser {
            id: Uuid::new_v4(),
            username: format!("user_{index}"),
            email: format!("email_{index}@{}", self.config.email_domain),
            password_hash: self.password_hash.clone(),
            account_status: AccountStatus::Active,
        }
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize) -> Vec<GeneratedUser> {
        (0..count).map(|i| self.generate(i)).collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user() {
        let user_gen = UserGenerator::new();
        let user = user_gen.generate(3);

        assert_eq!(user.username, "user_3");
        assert_eq!(user.email, "email_3@example.com");
        assert_eq!(user.account_status, AccountStatus::Active);
    }

    #[test]
    fn test_generate_batch() {
        let user_gen = UserGenerator::new();
        let users = user_gen.generate_batch(10);

        assert_eq!(users.len(), 10);

        // All UUIDs should be unique
        let ids: std::collections::HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_password_hash_matches_placeholder() {
        let user_gen = UserGenerator::new();
        let user = user_gen.generate(0);

        assert!(auth::verify_password("motdepasse", &user.password_hash).unwrap());
    }
}
