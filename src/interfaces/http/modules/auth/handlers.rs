//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;

use super::dto::{LoginRequest, LoginResponse, MemberInfo, RegisterRequest, SurveyRequest};
use crate::domain::member::Member;
use crate::domain::{DomainError, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedMember;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<MemberInfo>),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberInfo>>), (StatusCode, Json<ApiResponse<MemberInfo>>)>
{
    let existing = state
        .repos
        .members()
        .find_by_email(&request.email)
        .await
        .map_err(error_response)?;

    if existing.is_some() {
        return Err(error_response(DomainError::Conflict(format!(
            "member with email {}",
            request.email
        ))));
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let now = Utc::now();
    let member = state
        .repos
        .members()
        .save(Member {
            id: 0,
            email: request.email,
            name: request.name,
            password_hash,
            roles: vec!["USER".to_string()],
            deleted: false,
            survey: None,
            created_at: now,
            updated_at: now,
        })
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MemberInfo::from_member(member))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<LoginResponse>>)> {
    let member = state
        .repos
        .members()
        .find_by_email(&request.email)
        .await
        .map_err(error_response)?;

    let Some(member) = member else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    };

    if member.deleted {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account is disabled")),
        ));
    }

    let password_valid = verify_password(&request.password, &member.password_hash).unwrap_or(false);
    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    }

    let token = create_token(
        &member.email,
        &member.name,
        member.is_admin(),
        &state.jwt_config,
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let response = LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_config.expiration_hours * 3600,
        member: MemberInfo::from_member(member),
    };

    Ok(Json(ApiResponse::success(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current member info", body = ApiResponse<MemberInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_member(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
) -> Result<Json<ApiResponse<MemberInfo>>, (StatusCode, Json<ApiResponse<MemberInfo>>)> {
    let member = state
        .repos
        .members()
        .find_by_email(&caller.email)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Member", "email", &caller.email)))?;

    Ok(Json(ApiResponse::success(MemberInfo::from_member(member))))
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/me/survey",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = SurveyRequest,
    responses(
        (status = 200, description = "Survey recorded", body = ApiResponse<MemberInfo>),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn submit_survey(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    ValidatedJson(request): ValidatedJson<SurveyRequest>,
) -> Result<Json<ApiResponse<MemberInfo>>, (StatusCode, Json<ApiResponse<MemberInfo>>)> {
    let mut member = state
        .repos
        .members()
        .find_by_email(&caller.email)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Member", "email", &caller.email)))?;

    member.survey = Some(request.into_survey());
    state
        .repos
        .members()
        .update(member.clone())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(MemberInfo::from_member(member))))
}
