use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::ProposeRabCommand,
    exception::OrderResult,
    model::{
        entity::{Rab, RabItem},
        vo::{Actor, RabDecision},
    },
};

/// Budget proposal workflow: `Pending -> Approved | Rejected`.
#[async_trait]
pub trait RabService: Send + Sync {
    async fn propose(&self, actor: Actor, command: ProposeRabCommand) -> OrderResult<Rab>;

    async fn decide(&self, rab_id: Uuid, approver: Actor, decision: RabDecision)
        -> OrderResult<Rab>;

    async fn edit_items(&self, rab_id: Uuid, actor: Actor, items: Vec<RabItem>)
        -> OrderResult<Rab>;

    async fn get(&self, rab_id: Uuid) -> OrderResult<Rab>;

    /// Newest first.
    async fn list_by_order(&self, order_id: Uuid) -> OrderResult<Vec<Rab>>;
}
