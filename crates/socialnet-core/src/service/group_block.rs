//! Group-level blocking: creation and blocker-only removal.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::GroupBlock;
use crate::error::DomainError;
use crate::ports::GroupBlockRepository;

/// Service for blocks scoped to a group.
///
/// Double-blocking the same member in the same group is rejected by the
/// storage uniqueness constraint, not here.
pub struct GroupBlockService {
    blocks: Arc<dyn GroupBlockRepository>,
}

impl GroupBlockService {
    pub fn new(blocks: Arc<dyn GroupBlockRepository>) -> Self {
        Self { blocks }
    }

    /// Record a block. The blocker is the authenticated caller.
    pub async fn create_block(
        &self,
        group_id: Uuid,
        blocker_id: Uuid,
        blocked_id: Uuid,
    ) -> Result<GroupBlock, DomainError> {
        let block = GroupBlock::create(group_id, blocker_id, blocked_id)?;
        let saved = self.blocks.save(block).await?;

        tracing::info!(
            block_id = %saved.id(),
            group_id = %group_id,
            blocked_id = %blocked_id,
            "Group block created"
        );
        Ok(saved)
    }

    /// Lift a block, blocker only. Existence is checked before ownership, as
    /// with posts.
    pub async fn delete_block(
        &self,
        block_id: Uuid,
        requesting_user_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        let block = self
            .blocks
            .find_by_id(block_id)
            .await?
            .ok_or_else(|| DomainError::not_found("group block", block_id))?;

        if block.blocker_id() != requesting_user_id {
            return Err(DomainError::Forbidden("group block"));
        }

        self.blocks.delete(block_id).await?;
        tracing::info!(block_id = %block_id, "Group block deleted");
        Ok(block_id)
    }

    pub async fn get_blocks_for_group(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<GroupBlock>, DomainError> {
        Ok(self.blocks.find_by_group_id(group_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryBlocks {
        rows: Mutex<HashMap<Uuid, GroupBlock>>,
    }

    #[async_trait]
    impl BaseRepository<GroupBlock, Uuid> for MemoryBlocks {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<GroupBlock>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, block: GroupBlock) -> Result<GroupBlock, RepoError> {
            self.rows.lock().unwrap().insert(block.id(), block.clone());
            Ok(block)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            match self.rows.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            }
        }
    }

    #[async_trait]
    impl GroupBlockRepository for MemoryBlocks {
        async fn find_by_group_id(&self, group_id: Uuid) -> Result<Vec<GroupBlock>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|b| b.group_id() == group_id)
                .cloned()
                .collect())
        }
    }

    fn service() -> (GroupBlockService, Arc<MemoryBlocks>) {
        let repo = Arc::new(MemoryBlocks::default());
        (GroupBlockService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_and_list_blocks_for_group() {
        let (service, _repo) = service();
        let group = Uuid::new_v4();

        service
            .create_block(group, Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();
        service
            .create_block(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        let blocks = service.get_blocks_for_group(group).await.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].group_id(), group);
    }

    #[tokio::test]
    async fn test_self_block_is_rejected() {
        let (service, _repo) = service();
        let member = Uuid::new_v4();
        let result = service.create_block(Uuid::new_v4(), member, member).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_block_requires_blocker() {
        let (service, repo) = service();
        let blocker = Uuid::new_v4();
        let block = service
            .create_block(Uuid::new_v4(), blocker, Uuid::new_v4())
            .await
            .unwrap();

        let result = service.delete_block(block.id(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::Forbidden(_))));

        let deleted = service.delete_block(block.id(), blocker).await.unwrap();
        assert_eq!(deleted, block.id());
        assert!(repo.find_by_id(block.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_block_is_not_found() {
        let (service, _repo) = service();
        let result = service.delete_block(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
