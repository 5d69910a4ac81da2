//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgTypeInfo, Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Account type stored in the `users.type` column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Partner,
    Superadmin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Partner => "partner",
            UserType::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserType::User),
            "partner" => Ok(UserType::Partner),
            "superadmin" => Ok(UserType::Superadmin),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}

// Stored as plain text
impl sqlx::Type<Postgres> for UserType {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for UserType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: &str = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for UserType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// User row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub username: Option<String>,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

/// Create or replace a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
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
    /// `user` or `partner`
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_signup_type"))]
    pub user_type: UserType,
}

impl UserRequest {
    /// Build the row to store, with an already hashed password
    pub fn into_user(self, password_hash: String) -> User {
        User {
            id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            username: self.username,
            password: password_hash,
            user_type: self.user_type,
            created_at: DateTime::<Utc>::default(),
        }
    }
}

/// Superadmins are provisioned out of band, never through the API
pub fn validate_signup_type(user_type: &UserType) -> Result<(), ValidationError> {
    match user_type {
        UserType::User | UserType::Partner => Ok(()),
        UserType::Superadmin => {
            let mut err = ValidationError::new("user_type");
            err.message = Some("type must be one of: user, partner".into());
            Err(err)
        }
    }
}

/// JWT claims for authenticated users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    /// User ID as a string, per the JWT `sub` convention
    pub sub: String,
    pub user_id: i64,
    pub email: String,
    pub user_type: UserType,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    pub fn new(user: &User, expiration_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id.to_string(),
            user_id: user.id,
            email: user.email.clone(),
            user_type: user.user_type,
            exp: now + (expiration_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// Password-only update
#[derive(Debug, Clone)]
pub struct UpdatePassword {
    pub user_id: i64,
    pub password_hash: String,
}
