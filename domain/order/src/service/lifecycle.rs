use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::SubmitOrderCommand,
    exception::OrderResult,
    model::{entity::Order, vo::Actor},
};

/// Order state machine:
/// `AwaitingValidation -> Working -> Done`, with `Cancelled` reachable from
/// both open states.
///
/// Every operation validates before writing; a rejected call leaves the
/// order untouched.
#[async_trait]
pub trait OrderLifecycleService: Send + Sync {
    /// Creates an order awaiting validation. Customers only.
    async fn submit(&self, actor: Actor, command: SubmitOrderCommand) -> OrderResult<Order>;

    /// Records the supervisor's duration estimate, required by [`begin_work`].
    ///
    /// [`begin_work`]: OrderLifecycleService::begin_work
    async fn record_estimate(
        &self,
        order_id: Uuid,
        actor: Actor,
        estimate: &str,
    ) -> OrderResult<Order>;

    /// Needs at least one assignment and a time estimate.
    async fn begin_work(&self, order_id: Uuid, actor: Actor) -> OrderResult<Order>;

    /// `percent == 100` completes and locks the order.
    async fn update_progress(&self, order_id: Uuid, actor: Actor, percent: i32)
        -> OrderResult<Order>;

    async fn cancel(&self, order_id: Uuid, actor: Actor, reason: &str) -> OrderResult<Order>;

    async fn get(&self, order_id: Uuid) -> OrderResult<Order>;
}
