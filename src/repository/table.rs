//! Generic CRUD repository over one table

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgArguments, Arguments, Pool, Postgres};

use super::entity::{
    count_sql, delete_sql, insert_sql, like_pattern, list_sql, select_by_id_sql, update_sql, Entity,
};
use crate::{
    error::{AppError, AppResult},
    models::ListQuery,
};

pub struct TableRepository<E> {
    pub(super) pool: Pool<Postgres>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for TableRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> TableRepository<E> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("{} {} not found", E::NAME, id))
    }

    /// Insert a row; the store assigns `id` and `created_at`, which are
    /// written back into the returned entity
    pub async fn create(&self, mut entity: E) -> AppResult<E> {
        let sql = insert_sql::<E>();
        let mut args = PgArguments::default();
        entity.bind_columns(&mut args);

        let (id, created_at) = sqlx::query_as_with::<_, (i64, DateTime<Utc>), _>(&sql, args)
            .fetch_one(&self.pool)
            .await?;

        entity.stamp(id, created_at);
        tracing::debug!(table = E::TABLE, id, "row created");
        Ok(entity)
    }

    /// Get a row by ID
    pub async fn get(&self, id: i64) -> AppResult<E> {
        let sql = select_by_id_sql::<E>();
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// One page of rows, newest first, plus the filtered total
    pub async fn get_all(&self, query: &ListQuery) -> AppResult<(Vec<E>, i64)> {
        let pattern = query.search_term().map(like_pattern);
        let with_search = pattern.is_some();

        let page_sql = list_sql::<E>(with_search);
        let mut list = sqlx::query_as::<_, E>(&page_sql);
        if let Some(ref pattern) = pattern {
            list = list.bind(pattern);
        }
        let rows = list
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        // Separate statement: under concurrent writes the page and the count
        // may disagree
        let total_sql = count_sql::<E>(with_search);
        let mut count = sqlx::query_scalar::<_, i64>(&total_sql);
        if let Some(ref pattern) = pattern {
            count = count.bind(pattern);
        }
        let total = count.fetch_one(&self.pool).await?;

        tracing::debug!(
            table = E::TABLE,
            page = query.page,
            limit = query.limit,
            rows = rows.len(),
            total,
            "page fetched"
        );
        Ok((rows, total))
    }

    /// Replace every mutable column of the row matching `entity.id()`
    pub async fn update(&self, mut entity: E) -> AppResult<E> {
        let id = entity.id();
        let sql = update_sql::<E>();
        let mut args = PgArguments::default();
        entity.bind_columns(&mut args);
        args.add(id);

        let created_at = sqlx::query_scalar_with::<_, DateTime<Utc>, _>(&sql, args)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        entity.stamp(id, created_at);
        tracing::debug!(table = E::TABLE, id, "row updated");
        Ok(entity)
    }

    /// Hard delete
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let sql = delete_sql::<E>();
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        tracing::debug!(table = E::TABLE, id, "row deleted");
        Ok(())
    }
}
