//! Group block handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use socialnet_core::domain::GroupBlock;
use socialnet_shared::dto::{CreateGroupBlockRequest, GroupBlockResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(block: &GroupBlock) -> GroupBlockResponse {
    GroupBlockResponse {
        id: block.id(),
        group_id: block.group_id(),
        blocker_id: block.blocker_id(),
        blocked_id: block.blocked_id(),
        created_at: block.created_at(),
        updated_at: block.updated_at(),
    }
}

/// POST /api/group-blocks - Protected route
pub async fn create_group_block(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateGroupBlockRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let block = state
        .group_block_service
        .create_block(req.group_id, identity.user_id, req.blocked_id)
        .await?;

    Ok(HttpResponse::Created().json(to_response(&block)))
}

/// DELETE /api/group-blocks/{block_id} - Protected route, blocker only
pub async fn delete_group_block(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted_id = state
        .group_block_service
        .delete_block(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted_id": deleted_id })))
}

/// GET /api/groups/{group_id}/blocks - Protected route
pub async fn get_group_blocks(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let blocks = state
        .group_block_service
        .get_blocks_for_group(path.into_inner())
        .await?;

    let response: Vec<GroupBlockResponse> = blocks.iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(response))
}
