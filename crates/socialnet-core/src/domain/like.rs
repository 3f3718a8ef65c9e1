use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;
use crate::validation;

/// Like entity - a user's reaction to exactly one post or comment.
#[derive(Debug, Clone, Serialize)]
pub struct Like {
    id: Uuid,
    user_id: Uuid,
    post_id: Option<Uuid>,
    comment_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Like {
    fn raw(
        id: Uuid,
        user_id: Uuid,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            post_id,
            comment_id,
            created_at,
            updated_at,
        }
    }

    /// Create a new like with a generated id; must target exactly one of a
    /// post or a comment.
    pub fn create(
        user_id: Uuid,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let like = Self::raw(Uuid::new_v4(), user_id, post_id, comment_id, now, now);

        let report = validation::validate_like(&like);
        if !report.is_valid() {
            return Err(DomainError::Validation(report.joined()));
        }

        Ok(like)
    }

    /// Reconstruct a like from stored data, skipping validation.
    pub fn rehydrate(
        id: Uuid,
        user_id: Uuid,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self::raw(id, user_id, post_id, comment_id, created_at, updated_at)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn post_id(&self) -> Option<Uuid> {
        self.post_id
    }

    pub fn comment_id(&self) -> Option<Uuid> {
        self.comment_id
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
    fn test_create_like_on_post() {
        let like = Like::create(Uuid::new_v4(), Some(Uuid::new_v4()), None).unwrap();
        assert!(like.post_id().is_some());
        assert!(like.comment_id().is_none());
    }

    #[test]
    fn test_create_like_without_target_fails() {
        assert!(matches!(
            Like::create(Uuid::new_v4(), None, None),
            Err(DomainError::Validation(_))
        ));
    }
}
