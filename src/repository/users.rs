//! User lookups beyond the generic CRUD set

use super::{
    entity::{select_list, Entity},
    table::TableRepository,
};
use crate::{
    error::{AppError, AppResult},
    models::user::{UpdatePassword, User},
};

impl TableRepository<User> {
    /// Get user by exact email
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        let sql = format!(
            "SELECT {} FROM {} WHERE email = $1",
            select_list::<User>(),
            User::TABLE
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// Overwrite only the password hash. Succeeds even when no row matches.
    pub async fn update_password(&self, req: &UpdatePassword) -> AppResult<()> {
        sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(&req.password_hash)
            .bind(req.user_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(user_id = req.user_id, "password updated");
        Ok(())
    }
}
