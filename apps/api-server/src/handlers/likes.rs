//! Like handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use socialnet_core::domain::Like;
use socialnet_shared::dto::{CreateLikeRequest, LikeResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(like: &Like) -> LikeResponse {
    LikeResponse {
        id: like.id(),
        user_id: like.user_id(),
        post_id: like.post_id(),
        comment_id: like.comment_id(),
        created_at: like.created_at(),
    }
}

/// POST /api/likes - Protected route
pub async fn create_like(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateLikeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let like = state
        .like_service
        .create_like(identity.user_id, req.post_id, req.comment_id)
        .await?;

    Ok(HttpResponse::Created().json(to_response(&like)))
}

/// DELETE /api/likes/{like_id} - Protected route, owner only
pub async fn delete_like(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted_id = state
        .like_service
        .delete_like(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted_id": deleted_id })))
}

/// GET /api/posts/{post_id}/likes - Protected route
pub async fn get_post_likes(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let likes = state
        .like_service
        .get_likes_for_post(path.into_inner())
        .await?;

    let response: Vec<LikeResponse> = likes.iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(response))
}
