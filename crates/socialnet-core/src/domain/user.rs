use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;
use crate::validation;

/// User entity - an account in the social network.
///
/// The id-list fields (`posts`, `friendships`, `groups`, `blocked_users`) are
/// non-owning relations: they reference independently owned aggregates by id
/// and are maintained by those aggregates, not embedded here. Both
/// construction paths leave them empty; an adapter that has loaded the
/// relation rows attaches them afterwards with [`User::with_relations`].
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    posts: Vec<Uuid>,
    friendships: Vec<Uuid>,
    groups: Vec<Uuid>,
    blocked_users: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    fn raw(
        id: Uuid,
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            posts: Vec::new(),
            friendships: Vec::new(),
            groups: Vec::new(),
            blocked_users: Vec::new(),
            created_at,
            updated_at,
        }
    }

    /// Create a new user with a generated id and validated fields.
    pub fn create(
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let user = Self::raw(Uuid::new_v4(), username, email, password_hash, now, now);

        let report = validation::validate_user(&user);
        if !report.is_valid() {
            return Err(DomainError::Validation(report.joined()));
        }

        Ok(user)
    }

    /// Reconstruct a user from stored data, skipping validation.
    ///
    /// The password hash is opaque here: it was validated as a raw password
    /// before hashing and is never format-checked again.
    pub fn rehydrate(
        id: Uuid,
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self::raw(id, username, email, password_hash, created_at, updated_at)
    }

    /// Attach the relation id-lists when rehydrating a fully loaded user.
    pub fn with_relations(
        mut self,
        posts: Vec<Uuid>,
        friendships: Vec<Uuid>,
        groups: Vec<Uuid>,
        blocked_users: Vec<Uuid>,
    ) -> Self {
        self.posts = posts;
        self.friendships = friendships;
        self.groups = groups;
        self.blocked_users = blocked_users;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn posts(&self) -> &[Uuid] {
        &self.posts
    }

    pub fn friendships(&self) -> &[Uuid] {
        &self.friendships
    }

    pub fn groups(&self) -> &[Uuid] {
        &self.groups
    }

    pub fn blocked_users(&self) -> &[Uuid] {
        &self.blocked_users
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_user() {
        let user = User::create(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$...".to_string(),
        )
        .unwrap();

        assert_eq!(user.username(), "alice");
        assert_eq!(user.created_at(), user.updated_at());
        assert!(user.posts().is_empty());
        assert!(user.blocked_users().is_empty());
    }

    #[test]
    fn test_create_joins_errors_with_semicolons() {
        let err = User::create(String::new(), "bad".to_string(), String::new()).unwrap_err();
        let DomainError::Validation(message) = err else {
            panic!("expected validation error");
        };
        assert!(message.contains("Username must not be empty"));
        assert!(message.contains("; "));
    }

    #[test]
    fn test_rehydrate_trusts_stored_data() {
        let now = Utc::now();
        let user = User::rehydrate(
            Uuid::new_v4(),
            String::new(),
            "not an email".to_string(),
            String::new(),
            now,
            now,
        );
        assert_eq!(user.username(), "");
    }

    #[test]
    fn test_with_relations_attaches_id_lists() {
        let now = Utc::now();
        let post_id = Uuid::new_v4();
        let user = User::rehydrate(
            Uuid::new_v4(),
            "bob".to_string(),
            "bob@example.com".to_string(),
            "hash".to_string(),
            now,
            now,
        )
        .with_relations(vec![post_id], vec![], vec![], vec![]);

        assert_eq!(user.posts(), &[post_id]);
    }
}
