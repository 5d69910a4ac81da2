//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        auth::{
            AuthResponse, ForgotPasswordRequest, LoginRequest, UpdatePasswordRequest,
            VerifyRequest,
        },
        user::UserRequest,
        MessageResponse,
    },
    AppState,
};

use super::{AuthenticatedUser, ValidatedJson};

/// Start a registration; a verification code is emailed
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Verification code sent", body = MessageResponse),
        (status = 400, description = "Invalid input or email taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.register(req).await?;
    Ok(Json(MessageResponse::new("Verification code has been sent")))
}

/// Confirm a registration code
#[utoipa::path(
    post,
    path = "/auth/verify",
    tag = "auth",
    request_body = VerifyRequest,
    responses(
        (status = 201, description = "User created", body = AuthResponse),
        (status = 400, description = "Wrong or expired code", body = crate::error::ErrorResponse)
    )
)]
pub async fn verify(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<VerifyRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (user, token) = state.services.auth.verify(&req.email, &req.code).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse::bearer(user, token))))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (user, token) = state.services.auth.login(&req.email, &req.password).await?;
    Ok(Json(AuthResponse::bearer(user, token)))
}

/// Email a password reset code
#[utoipa::path(
    post,
    path = "/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset code sent", body = MessageResponse),
        (status = 404, description = "Unknown email", body = crate::error::ErrorResponse)
    )
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.forgot_password(&req.email).await?;
    Ok(Json(MessageResponse::new("Reset code has been sent")))
}

/// Confirm a reset code; the returned token authorizes a password update
#[utoipa::path(
    post,
    path = "/auth/verify-forgot-password",
    tag = "auth",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Code accepted", body = AuthResponse),
        (status = 400, description = "Wrong or expired code", body = crate::error::ErrorResponse)
    )
)]
pub async fn verify_forgot_password(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<VerifyRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (user, token) = state
        .services
        .auth
        .verify_forgot_password(&req.email, &req.code)
        .await?;
    Ok(Json(AuthResponse::bearer(user, token)))
}

/// Change the caller's password
#[utoipa::path(
    post,
    path = "/auth/update-password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(req): ValidatedJson<UpdatePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .auth
        .update_password(claims.user_id, &req.password)
        .await?;
    Ok(Json(MessageResponse::new("Password has been updated")))
}
