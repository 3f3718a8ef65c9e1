//! Post handlers: filtered reads plus owner-authorized mutations.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use socialnet_core::domain::Post;
use socialnet_core::ports::PostFilter;
use socialnet_shared::dto::{
    CreatePostRequest, DeletePostResponse, PostQuery, PostResponse, UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id(),
        author_id: post.author_id(),
        group_id: post.group_id(),
        content: post.content().to_string(),
        created_at: post.created_at(),
        updated_at: post.updated_at(),
    }
}

/// GET /api/posts - Protected route
///
/// Reads require an authenticated caller just like mutations. All query
/// filters optional and AND-combined; no filters lists everything.
pub async fn get_posts(
    _identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = PostFilter {
        post_id: query.post_id,
        author_id: query.author_id,
        group_id: query.group_id,
        content_contains: query.content,
    };

    let posts = state.post_service.get_posts(&filter).await?;
    let response: Vec<PostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/posts - Protected route
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .post_service
        .create_post(identity.user_id, req.content, req.group_id)
        .await?;

    Ok(HttpResponse::Created().json(to_response(&post)))
}

/// PUT /api/posts/{post_id} - Protected route, owner only
pub async fn update_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .post_service
        .update_post(post_id, identity.user_id, body.into_inner().content)
        .await?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// DELETE /api/posts/{post_id} - Protected route, owner only
///
/// The service reports failure through the nil-id sentinel; the message is
/// echoed in the 400 body but the sentinel is what decides.
pub async fn delete_post(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let outcome = state
        .post_service
        .delete_post(post_id, identity.user_id)
        .await;

    if !outcome.succeeded() {
        return Err(AppError::BadRequest(outcome.error));
    }

    Ok(HttpResponse::Ok().json(DeletePostResponse {
        deleted_id: outcome.deleted_id,
    }))
}
