#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use socialnet_core::domain::{Post, User};
    use socialnet_core::error::RepoError;
    use socialnet_core::ports::{BaseRepository, PostFilter, PostRepository, UserRepository};

    fn post_row(id: uuid::Uuid, author_id: uuid::Uuid, content: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            author_id,
            group_id: None,
            content: content.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let author_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_row(post_id, author_id, "Content")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.id(), post_id);
        assert_eq!(post.author_id(), author_id);
        assert_eq!(post.content(), "Content");
    }

    #[tokio::test]
    async fn test_find_posts_with_filter() {
        let author_id = uuid::Uuid::new_v4();
        let rows = vec![
            post_row(uuid::Uuid::new_v4(), author_id, "first"),
            post_row(uuid::Uuid::new_v4(), author_id, "second"),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let filter = PostFilter {
            author_id: Some(author_id),
            ..Default::default()
        };

        let posts = repo.find(&filter).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.author_id() == author_id));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                email: "alice@example.com".to_owned(),
                password_hash: "hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result: Option<User> = repo.find_by_email("alice@example.com").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().id(), user_id);
    }
}
