use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Documentation;

#[async_trait]
pub trait DocumentationRepo: DBRepository<Documentation> + Send + Sync {
    async fn get_by_order(&self, order_id: Uuid) -> anyhow::Result<Vec<Documentation>>;
}
