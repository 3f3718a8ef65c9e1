use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;
use crate::validation;

/// GroupBlock entity - one user blocking another within a group.
///
/// The blocker is the acting member; the block is scoped to `group_id` and
/// does not affect the pair outside that group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupBlock {
    id: Uuid,
    group_id: Uuid,
    blocker_id: Uuid,
    blocked_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GroupBlock {
    fn raw(
        id: Uuid,
        group_id: Uuid,
        blocker_id: Uuid,
        blocked_id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            group_id,
            blocker_id,
            blocked_id,
            created_at,
            updated_at,
        }
    }

    /// Create a new block with a generated id; a member cannot block
    /// themselves.
    pub fn create(
        group_id: Uuid,
        blocker_id: Uuid,
        blocked_id: Uuid,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let block = Self::raw(Uuid::new_v4(), group_id, blocker_id, blocked_id, now, now);

        let report = validation::validate_group_block(&block);
        if !report.is_valid() {
            return Err(DomainError::Validation(report.joined()));
        }

        Ok(block)
    }

    /// Reconstruct a block from stored data, skipping validation.
    pub fn rehydrate(
        id: Uuid,
        group_id: Uuid,
        blocker_id: Uuid,
        blocked_id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self::raw(id, group_id, blocker_id, blocked_id, created_at, updated_at)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn group_id(&self) -> Uuid {
        self.group_id
    }

    pub fn blocker_id(&self) -> Uuid {
        self.blocker_id
    }

    pub fn blocked_id(&self) -> Uuid {
        self.blocked_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
