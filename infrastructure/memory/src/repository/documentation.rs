use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_order::{model::entity::Documentation, repository::DocumentationRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl DocumentationRepo for MemoryRepository {
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Documentation>> {
        Ok(self.documentation.list(|el| el.order_id == order_id))
    }
}

#[async_trait]
impl ReadOnlyRepository<Documentation> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Documentation> {
        self.documentation.get(uuid)
    }
}

#[async_trait]
impl MutableRepository<Documentation> for MemoryRepository {
    async fn insert(&self, entity: &Documentation) -> anyhow::Result<Uuid> {
        self.documentation.insert(entity)
    }

    async fn delete_by_id(&self, uuid: Uuid) -> anyhow::Result<()> {
        self.documentation.remove(uuid)
    }
}

impl DBRepository<Documentation> for MemoryRepository {}
