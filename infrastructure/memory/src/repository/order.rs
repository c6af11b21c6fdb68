use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_order::{model::entity::Order, repository::OrderRepo};
use uuid::Uuid;

use super::MemoryRepository;

#[async_trait]
impl OrderRepo for MemoryRepository {
    async fn get_by_customer(&self, customer_id: Uuid) -> anyhow::Result<Vec<Order>> {
        Ok(self.orders.list(|el| el.customer_id == customer_id))
    }
}

#[async_trait]
impl ReadOnlyRepository<Order> for MemoryRepository {
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<Order> {
        self.orders.get(uuid)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.orders.list(|_| true))
    }
}

#[async_trait]
impl MutableRepository<Order> for MemoryRepository {
    async fn update(&self, entity: &Order) -> anyhow::Result<()> {
        self.orders.update(entity)
    }

    async fn insert(&self, entity: &Order) -> anyhow::Result<Uuid> {
        self.orders.insert(entity)
    }
}

impl DBRepository<Order> for MemoryRepository {}
