//! Post lifecycle orchestration: lookup, ownership checks, and mutation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{PostFilter, PostRepository};

/// Outcome of a delete operation.
///
/// This is a dual-signal contract: `deleted_id` is the nil UUID on any
/// failure, and `error` is non-empty. Callers must treat the sentinel, not
/// the message, as the authoritative failure signal; code that only checks
/// `error` still observes a non-empty message on every failure.
#[derive(Debug, Clone)]
pub struct PostDeletion {
    pub deleted_id: Uuid,
    pub error: String,
}

impl PostDeletion {
    fn deleted(id: Uuid) -> Self {
        Self {
            deleted_id: id,
            error: String::new(),
        }
    }

    fn failed(error: impl ToString) -> Self {
        Self {
            deleted_id: Uuid::nil(),
            error: error.to_string(),
        }
    }

    pub fn succeeded(&self) -> bool {
        !self.deleted_id.is_nil()
    }
}

/// Service for post CRUD with ownership authorization.
///
/// Update and delete perform a read-check-write sequence with no transaction
/// or version token around it; concurrent mutations of the same post race.
/// A version column on posts is the extension seam if that ever needs to
/// change.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Fetch posts matching the filter; all fields optional, AND-combined.
    ///
    /// No matches is an empty `Ok` list, never an error; only storage
    /// failures surface.
    pub async fn get_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.find(filter).await?;
        tracing::debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    /// Create a post for an already-authenticated author.
    ///
    /// Identity resolution happens in the adapter; by the time this runs,
    /// `author_id` is trusted. A supplied `group_id` is recorded without a
    /// membership check.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        content: String,
        group_id: Option<Uuid>,
    ) -> Result<Post, DomainError> {
        let post = Post::create(author_id, content, group_id)?;
        let saved = self.posts.save(post).await?;

        tracing::info!(post_id = %saved.id(), author_id = %author_id, "Post created");
        Ok(saved)
    }

    /// Replace a post's content, owner only.
    ///
    /// Checks run in order: existence first (`NotFound`), then ownership
    /// (`Forbidden`), then validation of the new content. On any failure the
    /// stored post is untouched.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        requesting_user_id: Uuid,
        new_content: String,
    ) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;

        if post.author_id() != requesting_user_id {
            tracing::warn!(
                post_id = %post_id,
                requesting_user_id = %requesting_user_id,
                "Update rejected: requester does not own post"
            );
            return Err(DomainError::Forbidden("post"));
        }

        post.edit_content(new_content)?;
        let saved = self.posts.save(post).await?;

        tracing::info!(post_id = %post_id, "Post updated");
        Ok(saved)
    }

    /// Delete a post, owner only. Hard delete: the post is gone, no
    /// tombstone.
    ///
    /// Same ordered existence-then-ownership check as update. See
    /// [`PostDeletion`] for the sentinel contract on failure.
    pub async fn delete_post(&self, post_id: Uuid, requesting_user_id: Uuid) -> PostDeletion {
        let post = match self.posts.find_by_id(post_id).await {
            Ok(Some(post)) => post,
            Ok(None) => return PostDeletion::failed(DomainError::not_found("post", post_id)),
            Err(err) => return PostDeletion::failed(DomainError::from(err)),
        };

        if post.author_id() != requesting_user_id {
            tracing::warn!(
                post_id = %post_id,
                requesting_user_id = %requesting_user_id,
                "Delete rejected: requester does not own post"
            );
            return PostDeletion::failed(DomainError::Forbidden("post"));
        }

        if let Err(err) = self.posts.delete(post_id).await {
            return PostDeletion::failed(DomainError::from(err));
        }

        tracing::info!(post_id = %post_id, "Post deleted");
        PostDeletion::deleted(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;
    use async_trait::async_trait;
    use chrono::{TimeDelta, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryPosts {
        rows: Mutex<HashMap<Uuid, Post>>,
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for MemoryPosts {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, post: Post) -> Result<Post, RepoError> {
            self.rows.lock().unwrap().insert(post.id(), post.clone());
            Ok(post)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            match self.rows.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            }
        }
    }

    #[async_trait]
    impl PostRepository for MemoryPosts {
        async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect())
        }
    }

    fn service() -> (PostService, Arc<MemoryPosts>) {
        let repo = Arc::new(MemoryPosts::default());
        (PostService::new(repo.clone()), repo)
    }

    async fn seed_post(repo: &MemoryPosts, author: Uuid, content: &str) -> Post {
        // Rehydrate with a past timestamp so updated_at > created_at is
        // observable after an edit.
        let created = Utc::now() - TimeDelta::hours(1);
        let post = Post::rehydrate(
            Uuid::new_v4(),
            author,
            None,
            content.to_string(),
            created,
            created,
        );
        repo.save(post).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_post_persists_and_returns_entity() {
        let (service, repo) = service();
        let author = Uuid::new_v4();

        let post = service
            .create_post(author, "first!".to_string(), None)
            .await
            .unwrap();

        let stored = repo.find_by_id(post.id()).await.unwrap().unwrap();
        assert_eq!(stored.content(), "first!");
        assert_eq!(stored.author_id(), author);
    }

    #[tokio::test]
    async fn test_create_post_with_invalid_content_saves_nothing() {
        let (service, repo) = service();

        let result = service
            .create_post(Uuid::new_v4(), String::new(), None)
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.find(&PostFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();
        let post = seed_post(&repo, owner, "original").await;

        let updated = service
            .update_post(post.id(), owner, "new content".to_string())
            .await
            .unwrap();

        assert_eq!(updated.content(), "new content");
        assert!(updated.updated_at() > updated.created_at());
        let stored = repo.find_by_id(post.id()).await.unwrap().unwrap();
        assert_eq!(stored.content(), "new content");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_forbidden_and_changes_nothing() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let post = seed_post(&repo, owner, "original").await;

        let result = service
            .update_post(post.id(), intruder, "x".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::Forbidden(_))));
        let stored = repo.find_by_id(post.id()).await.unwrap().unwrap();
        assert_eq!(stored.content(), "original");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let (service, _repo) = service();

        let result = service
            .update_post(Uuid::new_v4(), Uuid::new_v4(), "x".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_existence_checked_before_ownership() {
        // A nonexistent id reports NotFound even when the requester would not
        // have owned it; order of checks is part of the contract.
        let (service, repo) = service();
        seed_post(&repo, Uuid::new_v4(), "someone else's").await;

        let result = service
            .update_post(Uuid::new_v4(), Uuid::new_v4(), "x".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_by_owner_returns_id_and_empty_error() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();
        let post = seed_post(&repo, owner, "to be removed").await;

        let outcome = service.delete_post(post.id(), owner).await;

        assert!(outcome.succeeded());
        assert_eq!(outcome.deleted_id, post.id());
        assert!(outcome.error.is_empty());
        assert!(repo.find_by_id(post.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_returns_nil_sentinel() {
        let (service, _repo) = service();

        let outcome = service.delete_post(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(!outcome.succeeded());
        assert!(outcome.deleted_id.is_nil());
        assert!(!outcome.error.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_returns_sentinel_and_keeps_post() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();
        let post = seed_post(&repo, owner, "still here").await;

        let outcome = service.delete_post(post.id(), Uuid::new_v4()).await;

        assert!(!outcome.succeeded());
        assert!(outcome.deleted_id.is_nil());
        assert!(!outcome.error.is_empty());
        assert!(repo.find_by_id(post.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_get_posts_empty_filter_returns_all() {
        let (service, repo) = service();
        seed_post(&repo, Uuid::new_v4(), "one").await;
        seed_post(&repo, Uuid::new_v4(), "two").await;

        let posts = service.get_posts(&PostFilter::default()).await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_get_posts_combined_filters() {
        let (service, repo) = service();
        let author = Uuid::new_v4();
        let group = Uuid::new_v4();
        let created = Utc::now();
        let matching = Post::rehydrate(
            Uuid::new_v4(),
            author,
            Some(group),
            "both".to_string(),
            created,
            created,
        );
        repo.save(matching.clone()).await.unwrap();
        seed_post(&repo, author, "author only, no group").await;

        let filter = PostFilter {
            author_id: Some(author),
            group_id: Some(group),
            ..Default::default()
        };
        let posts = service.get_posts(&filter).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id(), matching.id());
    }

    #[tokio::test]
    async fn test_get_posts_no_match_is_empty_ok() {
        let (service, repo) = service();
        seed_post(&repo, Uuid::new_v4(), "something").await;

        let filter = PostFilter {
            content_contains: Some("no such substring".to_string()),
            ..Default::default()
        };

        let posts = service.get_posts(&filter).await.unwrap();
        assert!(posts.is_empty());
    }
}
