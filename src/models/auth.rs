//! Request and response bodies of the authentication flow

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::user::User;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 16, message = "password must be 6-16 characters"))]
    pub password: String,
}

/// Emailed code confirming a registration or a password reset
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(equal = 6, message = "code must be 6 digits"))]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 6, max = 16, message = "password must be 6-16 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(user: User, access_token: String) -> Self {
        Self {
            user,
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}
