//! CRUD service shared by every stored entity

use crate::{
    error::AppResult,
    models::{ListQuery, Page},
    repository::{Entity, TableRepository},
};

pub struct RecordService<E> {
    repository: TableRepository<E>,
}

impl<E> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<E> RecordService<E>
where
    E: Entity + for<'a> utoipa::ToSchema<'a>,
{
    pub fn new(repository: TableRepository<E>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, entity: E) -> AppResult<E> {
        let created = self.repository.create(entity).await?;
        tracing::info!(table = E::TABLE, id = created.id(), "created");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> AppResult<E> {
        self.repository.get(id).await
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Page<E>> {
        let (items, count) = self.repository.get_all(query).await?;
        Ok(Page::new(items, count, query))
    }

    /// Replace the row with id `id` by `entity`
    pub async fn update(&self, id: i64, mut entity: E) -> AppResult<E> {
        // created_at is read back from the row
        entity.stamp(id, Default::default());
        let updated = self.repository.update(entity).await?;
        tracing::info!(table = E::TABLE, id, "updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(table = E::TABLE, id, "deleted");
        Ok(())
    }
}
