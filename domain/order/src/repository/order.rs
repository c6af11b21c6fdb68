use architecture::DBRepository;
use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Order;

#[async_trait]
pub trait OrderRepo: DBRepository<Order> + Send + Sync {
    /// Orders submitted by one customer.
    async fn get_by_customer(&self, customer_id: Uuid) -> anyhow::Result<Vec<Order>>;
}
