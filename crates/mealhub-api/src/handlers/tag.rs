//! Tag catalog handlers.
//!
//! The catalog is read-only through the façade. Write routes exist but
//! always answer with the policy denial, so a caller sees an explicit
//! Forbidden instead of a missing endpoint.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use mealhub_core::types::pagination::PageResponse;
use mealhub_entity::tag::{Tag, TagType};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Query parameters for tag listing.
#[derive(Debug, Deserialize)]
pub struct ListTagsQuery {
    /// Narrow to one tag type.
    pub tag_type: Option<TagType>,
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// GET /api/tags
pub async fn list_tags(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTagsQuery>,
) -> Result<Json<ApiResponse<PageResponse<Tag>>>, ApiError> {
    let page = PaginationParams {
        page: query.page,
        per_page: query.per_page,
    }
    .into_page_request();

    let tags = state
        .tag_service
        .list_tags(&auth, query.tag_type, page)
        .await?;

    Ok(Json(ApiResponse::ok(tags)))
}

/// GET /api/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tag>>, ApiError> {
    let tag = state.tag_service.get_tag(&auth, id).await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// POST /api/tags — always denied by policy.
pub async fn create_tag(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tag_service.create_tag(&auth)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tag created"))))
}

/// PUT /api/tags/{id} — always denied by policy.
pub async fn update_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tag_service.update_tag(&auth, id)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tag updated"))))
}

/// DELETE /api/tags/{id} — always denied by policy.
pub async fn delete_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tag_service.delete_tag(&auth, id)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tag deleted"))))
}
