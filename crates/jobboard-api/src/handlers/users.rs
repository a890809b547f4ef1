//! Current-account handlers

use axum::{extract::State, Json};
use jobboard_service::dto::{AccountResponse, ApplicationResponse, UpdateProfileRequest};
use jobboard_service::{AccountService, ApplicationService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /users/@me
pub async fn get_current_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AccountResponse>> {
    let account = AccountService::new(state.service_context())
        .current(&auth)
        .await?;
    Ok(Json(account))
}

/// PATCH /users/@me/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let account = AccountService::new(state.service_context())
        .update_profile(&auth, request)
        .await?;
    Ok(Json(account))
}

/// GET /users/@me/applications
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let applications = ApplicationService::new(state.service_context())
        .my_applications(&auth)
        .await?;
    Ok(Json(applications))
}
