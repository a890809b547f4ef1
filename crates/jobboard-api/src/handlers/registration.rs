//! Registration and verification handlers

use axum::{extract::State, Json};
use jobboard_service::dto::{
    AcceptedResponse, AuthResponse, RegisterApplicantRequest, RegisterCompanyRequest,
    RegistrationResponse, ResendVerificationRequest,
};
use jobboard_service::{RegistrationService, VerificationService};

use crate::extractors::{ValidatedJson, VerificationPath};
use crate::response::{Accepted, ApiResult, Created};
use crate::state::AppState;

/// Sign up as a job seeker
///
/// POST /register/applicant
pub async fn register_applicant(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterApplicantRequest>,
) -> ApiResult<Created<Json<RegistrationResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register_applicant(request).await?;
    Ok(Created(Json(response)))
}

/// Sign up as an employer
///
/// POST /register/company
pub async fn register_company(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterCompanyRequest>,
) -> ApiResult<Created<Json<RegistrationResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register_company(request).await?;
    Ok(Created(Json(response)))
}

/// POST /register/resend
pub async fn resend_verification(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResendVerificationRequest>,
) -> ApiResult<Accepted<Json<AcceptedResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.resend_verification(request).await?;
    Ok(Accepted(Json(response)))
}

/// Follow an activation link
///
/// GET /verify/:uid/:token
pub async fn verify(
    State(state): State<AppState>,
    path: VerificationPath,
) -> ApiResult<Json<AuthResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.verify(&path.uid, &path.token).await?;
    Ok(Json(response))
}
