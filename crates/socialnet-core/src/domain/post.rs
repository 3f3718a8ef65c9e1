use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;
use crate::validation;

/// Post entity - a piece of content published by a user, optionally inside a
/// group.
///
/// The author is fixed at creation; content is the only mutable field and only
/// changes through [`Post::edit_content`], which re-validates and refreshes
/// `updated_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    id: Uuid,
    author_id: Uuid,
    group_id: Option<Uuid>,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    fn raw(
        id: Uuid,
        author_id: Uuid,
        group_id: Option<Uuid>,
        content: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            group_id,
            content,
            created_at,
            updated_at,
        }
    }

    /// Create a new post with a generated id and `created_at == updated_at`.
    ///
    /// Runs the validator before returning; an invalid post is never exposed.
    pub fn create(
        author_id: Uuid,
        content: String,
        group_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let post = Self::raw(Uuid::new_v4(), author_id, group_id, content, now, now);

        let report = validation::validate_post(&post);
        if !report.is_valid() {
            return Err(DomainError::Validation(report.joined()));
        }

        Ok(post)
    }

    /// Reconstruct a post from stored data.
    ///
    /// Skips validation: storage is trusted to only ever have held records
    /// that passed validation when first written.
    pub fn rehydrate(
        id: Uuid,
        author_id: Uuid,
        group_id: Option<Uuid>,
        content: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self::raw(id, author_id, group_id, content, created_at, updated_at)
    }

    /// Replace the content, refresh `updated_at`, and re-validate.
    ///
    /// On a validation error the in-memory entity has already been mutated;
    /// the caller must discard it rather than persist it.
    pub fn edit_content(&mut self, content: String) -> Result<(), DomainError> {
        self.content = content;
        self.updated_at = Utc::now();

        let report = validation::validate_post(self);
        if !report.is_valid() {
            return Err(DomainError::Validation(report.joined()));
        }

        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn group_id(&self) -> Option<Uuid> {
        self.group_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
