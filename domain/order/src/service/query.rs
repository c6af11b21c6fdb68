use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::OrderResult,
    model::vo::{Actor, OrderDetail, OrderFilter, OrderSummary},
};

/// Read side used by listing screens.
#[async_trait]
pub trait OrderQueryService: Send + Sync {
    async fn get_orders_for_actor(
        &self,
        actor: Actor,
        filter: OrderFilter,
    ) -> OrderResult<Vec<OrderSummary>>;

    async fn get_order_detail(&self, order_id: Uuid) -> OrderResult<OrderDetail>;
}
