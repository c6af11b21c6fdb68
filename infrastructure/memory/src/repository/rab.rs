use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_order::{model::entity::Rab, repository::RabRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl RabRepo for MemoryRepository {
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Rab>> {
        Ok(self.rabs.list(|el| el.order_id == order_id))
    }
}

#[async_trait]
impl ReadOnlyRepository<Rab> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Rab> {
        self.rabs.get(uuid)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Rab>> {
        Ok(self.rabs.list(|_| true))
    }
}

#[async_trait]
impl MutableRepository<Rab> for MemoryRepository {
    async fn update(&self, entity: &Rab) -> anyhow::Result<()> {
        self.rabs.update(entity)
    }

    async fn insert(&self, entity: &Rab) -> anyhow::Result<Uuid> {
        self.rabs.insert(entity)
    }
}

impl DBRepository<Rab> for MemoryRepository {}
