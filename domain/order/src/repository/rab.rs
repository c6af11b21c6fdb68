use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Rab;

#[async_trait]
pub trait RabRepo: DBRepository<Rab> + Send + Sync {
    /// Every proposal of an order, oldest first.
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Rab>>;
}
