use uuid::Uuid;

/// Read only repository.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot + 'static,
{
    /// Get the unique object by id. Missing objects yield
    /// [`RepositoryError::NotFound`](super::RepositoryError::NotFound).
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<T> {
        anyhow::bail!("get_by_id is not supported by this repository, id: {uuid}")
    }

    /// Get all objects.
    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        anyhow::bail!("get_all is not supported by this repository")
    }
}
