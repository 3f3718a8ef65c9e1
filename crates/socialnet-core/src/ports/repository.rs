use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{GroupBlock, Like, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Optional filters over the post collection.
///
/// Provided fields are combined with logical AND; an empty filter matches all
/// posts. Mirrors the query surface of the posts endpoint.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub post_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub content_contains: Option<String>,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.post_id.is_none()
            && self.author_id.is_none()
            && self.group_id.is_none()
            && self.content_contains.is_none()
    }

    /// In-memory evaluation of the filter against one post.
    ///
    /// Adapters that can push the predicate into a query (SQL) should do so;
    /// this is the reference semantics they must match.
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(id) = self.post_id {
            if post.id() != id {
                return false;
            }
        }
        if let Some(author_id) = self.author_id {
            if post.author_id() != author_id {
                return false;
            }
        }
        if let Some(group_id) = self.group_id {
            if post.group_id() != Some(group_id) {
                return false;
            }
        }
        if let Some(needle) = &self.content_contains {
            if !post.content().contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Find all posts matching the filter (AND across provided fields).
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Like repository.
#[async_trait]
pub trait LikeRepository: BaseRepository<Like, Uuid> {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Like>, RepoError>;
}

/// Group block repository.
#[async_trait]
pub trait GroupBlockRepository: BaseRepository<GroupBlock, Uuid> {
    async fn find_by_group_id(&self, group_id: Uuid) -> Result<Vec<GroupBlock>, RepoError>;
}
