//! Hotel owner model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Owner row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub username: Option<String>,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Create or replace an owner
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OwnerRequest {
    #[validate(length(min = 2, max = 30, message = "first_name must be 2-30 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 30, message = "last_name must be 2-30 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 30, message = "phone_number must be at most 30 characters"))]
    pub phone_number: Option<String>,
    #[validate(
        required(message = "username is required"),
        length(min = 2, max = 30, message = "username must be 2-30 characters")
    )]
    pub username: Option<String>,
    #[validate(length(min = 6, max = 16, message = "password must be 6-16 characters"))]
    pub password: String,
}

impl OwnerRequest {
    pub fn into_owner(self, password_hash: String) -> Owner {
        Owner {
            id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            username: self.username,
            password: password_hash,
            created_at: DateTime::<Utc>::default(),
        }
    }
}
