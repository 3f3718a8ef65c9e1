//! In-memory repository implementations.
//!
//! Back the server when no database is configured and double as fast test
//! doubles. Same semantics as the PostgreSQL adapters, including the
//! `RepoError::NotFound` on deleting a missing row and the unique
//! username/email constraint.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use socialnet_core::domain::{GroupBlock, Like, Post, User};
use socialnet_core::error::RepoError;
use socialnet_core::ports::{
    BaseRepository, GroupBlockRepository, LikeRepository, PostFilter, PostRepository,
    UserRepository,
};

/// In-memory post repository.
#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.rows.write().await.insert(post.id(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect())
    }
}

/// In-memory user repository enforcing username/email uniqueness.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let taken = rows.values().any(|existing| {
            existing.id() != user.id()
                && (existing.username() == user.username() || existing.email() == user.email())
        });
        if taken {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

/// In-memory like repository.
#[derive(Default)]
pub struct InMemoryLikeRepository {
    rows: RwLock<HashMap<Uuid, Like>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Like, Uuid> for InMemoryLikeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Like>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, like: Like) -> Result<Like, RepoError> {
        self.rows.write().await.insert(like.id(), like.clone());
        Ok(like)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Like>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|like| like.post_id() == Some(post_id))
            .cloned()
            .collect())
    }
}

/// In-memory group block repository enforcing one block per (group, blocked)
/// pair.
#[derive(Default)]
pub struct InMemoryGroupBlockRepository {
    rows: RwLock<HashMap<Uuid, GroupBlock>>,
}

impl InMemoryGroupBlockRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<GroupBlock, Uuid> for InMemoryGroupBlockRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GroupBlock>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, block: GroupBlock) -> Result<GroupBlock, RepoError> {
        let mut rows = self.rows.write().await;
        let duplicate = rows.values().any(|existing| {
            existing.id() != block.id()
                && existing.group_id() == block.group_id()
                && existing.blocked_id() == block.blocked_id()
        });
        if duplicate {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.insert(block.id(), block.clone());
        Ok(block)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl GroupBlockRepository for InMemoryGroupBlockRepository {
    async fn find_by_group_id(&self, group_id: Uuid) -> Result<Vec<GroupBlock>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|block| block.group_id() == group_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_round_trip_and_delete() {
        let repo = InMemoryPostRepository::new();
        let post = Post::create(Uuid::new_v4(), "hello".to_string(), None).unwrap();
        let id = post.id();

        repo.save(post).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_some());

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_user_uniqueness_constraint() {
        let repo = InMemoryUserRepository::new();
        let first = User::create(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap();
        repo.save(first).await.unwrap();

        let duplicate = User::create(
            "alice".to_string(),
            "other@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap();

        assert!(matches!(
            repo.save(duplicate).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_user_lookup_by_email_and_username() {
        let repo = InMemoryUserRepository::new();
        let user = User::create(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap();
        repo.save(user.clone()).await.unwrap();

        let by_email = repo.find_by_email("bob@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id(), user.id());
        let by_username = repo.find_by_username("bob").await.unwrap();
        assert_eq!(by_username.unwrap().id(), user.id());
        assert!(repo.find_by_email("missing@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_group_block_uniqueness_per_group_and_blocked() {
        let repo = InMemoryGroupBlockRepository::new();
        let group = Uuid::new_v4();
        let blocked = Uuid::new_v4();

        let first = GroupBlock::create(group, Uuid::new_v4(), blocked).unwrap();
        repo.save(first).await.unwrap();

        // Another member blocking the same user in the same group collides.
        let duplicate = GroupBlock::create(group, Uuid::new_v4(), blocked).unwrap();
        assert!(matches!(
            repo.save(duplicate).await,
            Err(RepoError::Constraint(_))
        ));

        // The same pair in another group does not.
        let elsewhere = GroupBlock::create(Uuid::new_v4(), Uuid::new_v4(), blocked).unwrap();
        repo.save(elsewhere).await.unwrap();
    }
}
