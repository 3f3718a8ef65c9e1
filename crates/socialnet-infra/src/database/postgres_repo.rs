//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};

use socialnet_core::domain::{GroupBlock, Like, Post, User};
use socialnet_core::error::RepoError;
use socialnet_core::ports::{
    GroupBlockRepository, LikeRepository, PostFilter, PostRepository, UserRepository,
};

use super::entity::group_block::{self, Entity as GroupBlockEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

/// PostgreSQL group block repository.
pub type PostgresGroupBlockRepository = PostgresBaseRepository<GroupBlockEntity>;

/// Mask the local part of an email for logging, keeping PII out of logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            if local.len() > 1 {
                format!("{}***{}", &local[..1], domain)
            } else {
                format!("***{domain}")
            }
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        // AND across whichever filters were supplied; an empty filter is an
        // unconditioned select.
        let mut condition = Condition::all();
        if let Some(id) = filter.post_id {
            condition = condition.add(post::Column::Id.eq(id));
        }
        if let Some(author_id) = filter.author_id {
            condition = condition.add(post::Column::AuthorId.eq(author_id));
        }
        if let Some(group_id) = filter.group_id {
            condition = condition.add(post::Column::GroupId.eq(group_id));
        }
        if let Some(needle) = &filter.content_contains {
            condition = condition.add(post::Column::Content.contains(needle.as_str()));
        }

        let result = PostEntity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn find_by_post_id(&self, post_id: uuid::Uuid) -> Result<Vec<Like>, RepoError> {
        let result = LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl GroupBlockRepository for PostgresGroupBlockRepository {
    async fn find_by_group_id(&self, group_id: uuid::Uuid) -> Result<Vec<GroupBlock>, RepoError> {
        let result = GroupBlockEntity::find()
            .filter(group_block::Column::GroupId.eq(group_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
