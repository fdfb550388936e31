use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{AuthSession, ProfileSection, UserProfile};
use crate::session::Session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub password: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthSession>, AppError> {
    require(&req.email, "email")?;
    require(&req.password, "password")?;
    Ok(Json(state.upstream.login(&req.email, &req.password).await?))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    require(&req.profile.email, "email")?;
    require(&req.password, "password")?;
    let message = state.upstream.register(&req.profile, &req.password).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse { message })))
}

/// POST /api/v1/auth/profile
pub async fn handle_fetch_profile(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<UserProfile>, AppError> {
    require(&req.email, "email")?;
    Ok(Json(state.upstream.fetch_profile(&req.email, &req.password).await?))
}

/// PUT /api/v1/auth/profile/:email/:section
pub async fn handle_update_profile(
    State(state): State<AppState>,
    session: Session,
    Path((email, section)): Path<(String, ProfileSection)>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state
        .upstream
        .update_profile_section(&session, &email, section, &profile)
        .await?;
    Ok(Json(MessageResponse { message }))
}
