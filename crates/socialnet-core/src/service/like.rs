//! Like lifecycle: creation and owner-only removal.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Like;
use crate::error::DomainError;
use crate::ports::LikeRepository;

/// Service for likes on posts and comments.
pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    /// Record a like for an already-authenticated user.
    pub async fn create_like(
        &self,
        user_id: Uuid,
        post_id: Option<Uuid>,
        comment_id: Option<Uuid>,
    ) -> Result<Like, DomainError> {
        let like = Like::create(user_id, post_id, comment_id)?;
        let saved = self.likes.save(like).await?;

        tracing::info!(like_id = %saved.id(), user_id = %user_id, "Like created");
        Ok(saved)
    }

    /// Remove a like, owner only. Existence is checked before ownership, as
    /// with posts.
    pub async fn delete_like(
        &self,
        like_id: Uuid,
        requesting_user_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        let like = self
            .likes
            .find_by_id(like_id)
            .await?
            .ok_or_else(|| DomainError::not_found("like", like_id))?;

        if like.user_id() != requesting_user_id {
            return Err(DomainError::Forbidden("like"));
        }

        self.likes.delete(like_id).await?;
        tracing::info!(like_id = %like_id, "Like deleted");
        Ok(like_id)
    }

    pub async fn get_likes_for_post(&self, post_id: Uuid) -> Result<Vec<Like>, DomainError> {
        Ok(self.likes.find_by_post_id(post_id).await?)
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
    struct MemoryLikes {
        rows: Mutex<HashMap<Uuid, Like>>,
    }

    #[async_trait]
    impl BaseRepository<Like, Uuid> for MemoryLikes {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Like>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, like: Like) -> Result<Like, RepoError> {
            self.rows.lock().unwrap().insert(like.id(), like.clone());
            Ok(like)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            match self.rows.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            }
        }
    }

    #[async_trait]
    impl LikeRepository for MemoryLikes {
        async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Like>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|l| l.post_id() == Some(post_id))
                .cloned()
                .collect())
        }
    }

    fn service() -> (LikeService, Arc<MemoryLikes>) {
        let repo = Arc::new(MemoryLikes::default());
        (LikeService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_and_list_likes_for_post() {
        let (service, _repo) = service();
        let post_id = Uuid::new_v4();

        service
            .create_like(Uuid::new_v4(), Some(post_id), None)
            .await
            .unwrap();
        service
            .create_like(Uuid::new_v4(), Some(Uuid::new_v4()), None)
            .await
            .unwrap();

        let likes = service.get_likes_for_post(post_id).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].post_id(), Some(post_id));
    }

    #[tokio::test]
    async fn test_delete_like_requires_ownership() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();
        let like = service
            .create_like(owner, Some(Uuid::new_v4()), None)
            .await
            .unwrap();

        let result = service.delete_like(like.id(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::Forbidden(_))));

        let deleted = service.delete_like(like.id(), owner).await.unwrap();
        assert_eq!(deleted, like.id());
        assert!(repo.find_by_id(like.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_like_is_not_found() {
        let (service, _repo) = service();
        let result = service.delete_like(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
