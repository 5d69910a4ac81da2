//! Registration, login and password recovery

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{codes::CodeStore, email::EmailService};
use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        user::{UpdatePassword, UserClaims, UserRequest, UserType},
        User,
    },
    repository::Repository,
};

/// Registration held in Redis until its code is confirmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PendingRegistration {
    code: String,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
    username: Option<String>,
    password_hash: String,
    user_type: UserType,
}

impl PendingRegistration {
    fn new(request: UserRequest, password_hash: String, code: String) -> Self {
        Self {
            code,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            username: request.username,
            password_hash,
            user_type: request.user_type,
        }
    }

    fn into_user(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            username: self.username,
            password: self.password_hash,
            user_type: self.user_type,
            ..Default::default()
        }
    }
}

fn register_key(email: &str) -> String {
    format!("register:{}", email)
}

fn forgot_password_key(email: &str) -> String {
    format!("forgot_password:{}", email)
}

/// Random six digit code
pub fn generate_code() -> String {
    let num = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", num)
}

fn argon2_hash(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn argon2_verify(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2 on the blocking pool
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || argon2_hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
}

pub async fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let (hash, password) = (hash.to_owned(), password.to_owned());
    tokio::task::spawn_blocking(move || argon2_verify(&hash, &password))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
    codes: CodeStore,
    email: EmailService,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig, codes: CodeStore, email: EmailService) -> Self {
        Self {
            repository,
            config,
            codes,
            email,
        }
    }

    fn code_ttl_seconds(&self) -> u64 {
        self.config.code_ttl_minutes * 60
    }

    /// Issue a bearer token for `user`
    pub fn create_token(&self, user: &User) -> AppResult<String> {
        UserClaims::new(user, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> AppResult<UserClaims> {
        UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))
    }

    /// Start a registration: park it in Redis and email the confirmation code
    pub async fn register(&self, request: UserRequest) -> AppResult<()> {
        match self.repository.users().get_by_email(&request.email).await {
            Ok(_) => {
                return Err(AppError::BadRequest(format!(
                    "Email {} is already registered",
                    request.email
                )))
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let email = request.email.clone();
        let code = generate_code();
        let password_hash = hash_password(&request.password).await?;
        let pending = PendingRegistration::new(request, password_hash, code.clone());
        let payload = serde_json::to_string(&pending)
            .map_err(|e| AppError::Internal(format!("Failed to serialize registration: {}", e)))?;

        self.codes
            .put(&register_key(&email), &payload, self.code_ttl_seconds())
            .await?;
        self.email
            .send_verification_code(&email, &code, self.config.code_ttl_minutes)
            .await?;

        tracing::info!(email = %email, "registration pending verification");
        Ok(())
    }

    /// Confirm a registration code and create the user
    pub async fn verify(&self, email: &str, code: &str) -> AppResult<(User, String)> {
        let key = register_key(email);
        let payload = self
            .codes
            .get(&key)
            .await?
            .ok_or_else(|| AppError::BadRequest("Verification code expired".to_string()))?;
        let pending: PendingRegistration = serde_json::from_str(&payload)
            .map_err(|e| AppError::Internal(format!("Corrupt pending registration: {}", e)))?;

        if pending.code != code {
            return Err(AppError::BadRequest("Incorrect verification code".to_string()));
        }

        let user = self.repository.users().create(pending.into_user()).await?;
        self.codes.delete(&key).await?;

        tracing::info!(user_id = user.id, "user registered");
        let token = self.create_token(&user)?;
        Ok((user, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, String)> {
        let invalid = || AppError::Authentication("Invalid email or password".to_string());

        let user = match self.repository.users().get_by_email(email).await {
            Ok(user) => user,
            Err(e) if e.is_not_found() => return Err(invalid()),
            Err(e) => return Err(e),
        };

        if !verify_password(&user.password, password).await? {
            tracing::debug!(user_id = user.id, "password mismatch");
            return Err(invalid());
        }

        let token = self.create_token(&user)?;
        Ok((user, token))
    }

    /// Email a reset code to an existing user
    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        let user = self.repository.users().get_by_email(email).await?;

        let code = generate_code();
        self.codes
            .put(&forgot_password_key(&user.email), &code, self.code_ttl_seconds())
            .await?;
        self.email
            .send_reset_code(&user.email, &code, self.config.code_ttl_minutes)
            .await?;

        tracing::info!(user_id = user.id, "password reset code sent");
        Ok(())
    }

    /// Confirm a reset code; the returned token authorizes `update_password`
    pub async fn verify_forgot_password(&self, email: &str, code: &str) -> AppResult<(User, String)> {
        let key = forgot_password_key(email);
        let stored = self
            .codes
            .get(&key)
            .await?
            .ok_or_else(|| AppError::BadRequest("Reset code expired".to_string()))?;

        if stored != code {
            return Err(AppError::BadRequest("Incorrect reset code".to_string()));
        }
        self.codes.delete(&key).await?;

        let user = self.repository.users().get_by_email(email).await?;
        let token = self.create_token(&user)?;
        Ok((user, token))
    }

    pub async fn update_password(&self, user_id: i64, password: &str) -> AppResult<()> {
        let req = UpdatePassword {
            user_id,
            password_hash: hash_password(password).await?,
        };
        self.repository.users().update_password(&req).await
    }
}
