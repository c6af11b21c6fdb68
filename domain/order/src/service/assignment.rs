use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::OrderResult,
    model::{entity::Assignment, vo::Actor},
};

/// Crew placed on an order.
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Makes the order's crew exactly `personnel_ids`, returning the new list.
    async fn replace_assignments(
        &self,
        order_id: Uuid,
        actor: Actor,
        personnel_ids: &[Uuid],
    ) -> OrderResult<Vec<Assignment>>;

    /// Ordered by assignment time.
    async fn list_assignments(&self, order_id: Uuid) -> OrderResult<Vec<Assignment>>;
}
