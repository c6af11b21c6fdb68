use uuid::Uuid;

/// Mutable repository.
///
/// Writes may be staged by the implementation until [`save_changed`] is called.
///
/// [`save_changed`]: MutableRepository::save_changed
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot + 'static,
{
    /// Update an existing object.
    async fn update(&self, entity: &T) -> anyhow::Result<()> {
        anyhow::bail!("update is not supported by this repository, id: {}", entity.id())
    }

    /// Insert an object, returning its id.
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid> {
        anyhow::bail!("insert is not supported by this repository, id: {}", entity.id())
    }

    /// Insert several objects in order.
    async fn insert_list(&self, entities: &[T]) -> anyhow::Result<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(entities.len());
        for entity in entities {
            ids.push(self.insert(entity).await?);
        }
        Ok(ids)
    }

    /// Delete an object.
    async fn delete(&self, entity: &T) -> anyhow::Result<()> {
        self.delete_by_id(entity.id()).await
    }

    /// Delete an object by id.
    async fn delete_by_id(&self, uuid: Uuid) -> anyhow::Result<()> {
        anyhow::bail!("delete_by_id is not supported by this repository, id: {uuid}")
    }

    /// Commit staged changes. Stores without transactions return `Ok(true)`.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}
