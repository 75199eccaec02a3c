//! Profile self-service handlers.

use axum::Json;
use axum::extract::State;

use mealhub_entity::profile::{Profile, UpdateProfile};

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate_payload;
use crate::state::AppState;

/// GET /api/profiles/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let profile = state.profile_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/profiles/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    validate_payload(&req)?;

    let profile = state
        .profile_service
        .update_profile(
            &auth,
            UpdateProfile {
                username: req.username,
                full_name: req.full_name,
                avatar_url: req.avatar_url,
                dietary_preferences: req.dietary_preferences,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}
